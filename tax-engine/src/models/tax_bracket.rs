use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of a federal bracket schedule.
///
/// `upper_bound` is `None` for the final, unbounded bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub lower_bound: Decimal,
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
}
