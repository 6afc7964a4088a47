use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Caps on above-the-line income adjustments for one tax year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustmentLimits {
    /// 401(k) elective deferral limit ($23,000 for 2024).
    pub retirement_contribution_cap: Decimal,

    /// Student loan interest deduction limit ($2,500 for 2024).
    pub student_loan_interest_cap: Decimal,
}
