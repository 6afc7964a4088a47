//! FICA payroll taxes.
//!
//! FICA is computed on gross income, not taxable income: payroll withholding
//! does not see deductions or adjustments. Social security is capped at the
//! wage base, Medicare is uncapped, and the additional Medicare tax applies
//! only above a per-filing-status threshold.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{FicaConfig, FilingStatus};

/// Errors that can occur during FICA calculation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FicaError {
    /// The rate table has no additional-Medicare threshold for this status.
    #[error("no additional medicare threshold for filing status {0}")]
    MissingThreshold(FilingStatus),
}

/// The three FICA components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FicaTaxes {
    pub social_security: Decimal,
    pub medicare: Decimal,
    pub additional_medicare: Decimal,
}

/// Calculator over one year's FICA rates and limits.
#[derive(Debug, Clone)]
pub struct FicaCalculator<'a> {
    config: &'a FicaConfig,
}

impl<'a> FicaCalculator<'a> {
    pub fn new(config: &'a FicaConfig) -> Self {
        Self { config }
    }

    /// Calculates FICA taxes on gross `income`.
    ///
    /// # Errors
    ///
    /// Returns [`FicaError::MissingThreshold`] if the rate table lacks an
    /// additional-Medicare threshold for `filing_status`.
    pub fn calculate(
        &self,
        income: Decimal,
        filing_status: FilingStatus,
    ) -> Result<FicaTaxes, FicaError> {
        let threshold = self
            .config
            .additional_medicare_threshold(filing_status)
            .ok_or(FicaError::MissingThreshold(filing_status))?;

        let social_security = income.min(self.config.ss_wage_base) * self.config.ss_rate;
        let medicare = income * self.config.medicare_rate;
        let additional_medicare = (income - threshold).max(Decimal::ZERO)
            * self.config.additional_medicare_rate;

        Ok(FicaTaxes {
            social_security,
            medicare,
            additional_medicare,
        })
    }
}
