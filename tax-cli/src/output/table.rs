use tabled::{Table, builder::Builder};

use tax_engine::TaxCalculationResult;

use crate::format::{currency, percent};

/// Renders the summary table followed by the per-bracket breakdown.
pub fn render_table(result: &TaxCalculationResult) -> String {
    let mut out = summary_table(result).to_string();
    if !result.tax_bracket_details.is_empty() {
        out.push_str("\n\nFederal brackets\n");
        out.push_str(&bracket_table(result).to_string());
    }
    out.push('\n');
    out
}

fn summary_table(result: &TaxCalculationResult) -> Table {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Amount"]);
    builder.push_record(["Gross Income", &currency(result.gross_income)]);
    builder.push_record([
        "Adjusted Gross Income",
        &currency(result.adjusted_gross_income),
    ]);
    builder.push_record(["Standard Deduction", &currency(result.standard_deduction)]);
    builder.push_record(["Taxable Income", &currency(result.taxable_income)]);
    builder.push_record(["Federal Income Tax", &currency(result.federal_tax)]);
    builder.push_record(["State Income Tax", &currency(result.state_tax)]);
    builder.push_record([
        "Social Security Tax",
        &currency(result.social_security_tax),
    ]);
    builder.push_record(["Medicare Tax", &currency(result.medicare_tax)]);
    builder.push_record([
        "Additional Medicare Tax",
        &currency(result.additional_medicare_tax),
    ]);
    builder.push_record(["Total Taxes", &currency(result.total_taxes)]);
    builder.push_record(["Net Income", &currency(result.net_income)]);
    builder.push_record(["Effective Tax Rate", &percent(result.effective_tax_rate)]);
    builder.push_record(["Marginal Tax Rate", &percent(result.marginal_tax_rate)]);

    let refund_label = if result.refund_or_owed.is_sign_negative() {
        "Amount Owed"
    } else {
        "Estimated Refund"
    };
    builder.push_record([refund_label, &currency(result.refund_or_owed.abs())]);

    Table::from(builder)
}

fn bracket_table(result: &TaxCalculationResult) -> Table {
    let mut builder = Builder::default();
    builder.push_record(["Rate", "From", "To", "Taxable Amount", "Tax"]);

    for detail in &result.tax_bracket_details {
        let upper = detail
            .upper_bound
            .map_or_else(|| "No Limit".to_string(), currency);
        builder.push_record([
            percent(detail.rate * rust_decimal::Decimal::ONE_HUNDRED),
            currency(detail.lower_bound),
            upper,
            currency(detail.taxable_amount),
            currency(detail.tax_owed),
        ]);
    }

    Table::from(builder)
}
