//! Bar-chart rendering of an estimate.
//!
//! Two charts: where gross income goes (each tax component plus net income as
//! a share of gross), and the taxable amount landing in each federal bracket.

use colored::{Color, Colorize};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use tax_engine::TaxCalculationResult;

use crate::format::{currency, percent};

const BAR_WIDTH: usize = 40;

/// Renders both charts for a result.
pub fn render_chart(result: &TaxCalculationResult) -> String {
    if result.gross_income <= Decimal::ZERO {
        return "No income to chart.\n".to_string();
    }

    let mut out = String::from("Where your gross income goes\n\n");
    for (label, amount, color) in segments(result) {
        out.push_str(&bar_line(label, amount, result.gross_income, color));
    }

    if !result.tax_bracket_details.is_empty() {
        out.push_str("\nTaxable income by federal bracket\n\n");
        let widest = result
            .tax_bracket_details
            .iter()
            .map(|d| d.taxable_amount)
            .max()
            .unwrap_or(Decimal::ONE);
        for detail in &result.tax_bracket_details {
            let label = format!("{:>6} rate", percent(detail.rate * Decimal::ONE_HUNDRED));
            out.push_str(&bar_line(&label, detail.taxable_amount, widest, Color::Cyan));
        }
    }

    out
}

fn segments(result: &TaxCalculationResult) -> Vec<(&'static str, Decimal, Color)> {
    vec![
        ("Federal income tax", result.federal_tax, Color::Red),
        ("State income tax", result.state_tax, Color::Magenta),
        ("Social security", result.social_security_tax, Color::Yellow),
        ("Medicare", result.medicare_tax, Color::Blue),
        (
            "Additional medicare",
            result.additional_medicare_tax,
            Color::BrightBlue,
        ),
        ("Net income", result.net_income, Color::Green),
    ]
}

fn bar_line(
    label: &str,
    amount: Decimal,
    scale: Decimal,
    color: Color,
) -> String {
    // Pad before coloring: ANSI escapes would defeat width formatting.
    let bar = format!(
        "{:<width$}",
        "█".repeat(bar_width(amount, scale)),
        width = BAR_WIDTH
    );
    format!("{label:<20} {} {}\n", bar.color(color), currency(amount))
}

/// Number of bar cells for `amount` out of `scale`, clamped to `BAR_WIDTH`.
fn bar_width(
    amount: Decimal,
    scale: Decimal,
) -> usize {
    if scale <= Decimal::ZERO || amount <= Decimal::ZERO {
        return 0;
    }
    let cells = (amount * Decimal::from(BAR_WIDTH as u32) / scale)
        .round()
        .to_usize()
        .unwrap_or(0);
    cells.min(BAR_WIDTH)
}
