use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::FilingStatus;

/// Additional-Medicare income threshold for one filing status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicareThreshold {
    pub filing_status: FilingStatus,
    pub amount: Decimal,
}

/// FICA payroll tax rates and limits for one tax year.
///
/// FICA applies to gross income; it is independent of deductions and
/// adjustments, matching real payroll withholding rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FicaConfig {
    /// Employee social security rate (6.2% for 2024).
    pub ss_rate: Decimal,

    /// Wage base above which no social security tax is owed ($168,600 for 2024).
    pub ss_wage_base: Decimal,

    /// Employee Medicare rate, uncapped (1.45% for 2024).
    pub medicare_rate: Decimal,

    /// Additional Medicare rate on income above the per-status threshold (0.9%).
    pub additional_medicare_rate: Decimal,

    /// Per-status thresholds for the additional Medicare tax.
    pub additional_medicare_thresholds: Vec<MedicareThreshold>,
}

impl FicaConfig {
    pub fn additional_medicare_threshold(
        &self,
        filing_status: FilingStatus,
    ) -> Option<Decimal> {
        self.additional_medicare_thresholds
            .iter()
            .find(|t| t.filing_status == filing_status)
            .map(|t| t.amount)
    }
}
