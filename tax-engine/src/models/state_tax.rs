use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Flat state income tax rate for one state.
///
/// Many states actually have progressive schedules; modeling each state as a
/// single flat rate is a documented approximation of this estimator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateTaxInfo {
    /// Two-letter USPS code, uppercase.
    pub code: String,
    pub name: String,
    pub flat_rate: Decimal,
    pub has_income_tax: bool,
}
