//! Flat-rate state income tax.

use rust_decimal::Decimal;

use crate::models::StateTaxInfo;

/// Calculates state income tax on `taxable_income`.
///
/// An absent record (unknown code) or a state without an income tax yields
/// zero. Real state tax is often progressive; the single flat rate is a
/// documented approximation, not a defect.
pub fn calculate_state_tax(
    state: Option<&StateTaxInfo>,
    taxable_income: Decimal,
) -> Decimal {
    match state {
        Some(info) if info.has_income_tax => taxable_income * info.flat_rate,
        _ => Decimal::ZERO,
    }
}
