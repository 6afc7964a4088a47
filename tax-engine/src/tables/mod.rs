//! Static tax-law reference tables.
//!
//! Tables are versioned by tax year, built once at startup, and read-only for
//! the life of the process. Every lookup keyed by filing status is fallible so
//! that an incomplete table surfaces as an error instead of propagating into
//! arithmetic.

mod year_2024;

pub use year_2024::tables_2024;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{
    AdjustmentLimits, FicaConfig, FilingStatus, StandardDeduction, StateTaxInfo, TaxBracket,
};

/// Errors raised when a reference table is missing a row for a filing status.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxTableError {
    #[error("no federal bracket schedule for filing status {0}")]
    MissingBracketSchedule(FilingStatus),

    #[error("no standard deduction for filing status {0}")]
    MissingStandardDeduction(FilingStatus),
}

/// The ordered federal bracket schedule for one filing status.
///
/// Brackets must be sorted ascending by `lower_bound`, contiguous, and cover
/// `[0, ∞)`; the final bracket has `upper_bound = None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketSchedule {
    pub filing_status: FilingStatus,
    pub brackets: Vec<TaxBracket>,
}

/// Complete tax-law tables for one tax year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxLawTables {
    pub tax_year: i32,
    pub schedules: Vec<BracketSchedule>,
    pub standard_deductions: Vec<StandardDeduction>,
    pub fica: FicaConfig,
    pub states: Vec<StateTaxInfo>,
    pub limits: AdjustmentLimits,
}

impl TaxLawTables {
    /// Returns the bracket schedule for a filing status.
    pub fn brackets_for(
        &self,
        filing_status: FilingStatus,
    ) -> Result<&[TaxBracket], TaxTableError> {
        self.schedules
            .iter()
            .find(|s| s.filing_status == filing_status)
            .map(|s| s.brackets.as_slice())
            .ok_or(TaxTableError::MissingBracketSchedule(filing_status))
    }

    /// Returns the standard deduction amount for a filing status.
    pub fn standard_deduction(
        &self,
        filing_status: FilingStatus,
    ) -> Result<Decimal, TaxTableError> {
        self.standard_deductions
            .iter()
            .find(|d| d.filing_status == filing_status)
            .map(|d| d.amount)
            .ok_or(TaxTableError::MissingStandardDeduction(filing_status))
    }

    /// Looks up a state by its two-letter code (case-sensitive, uppercase).
    ///
    /// Returns `None` for unknown codes; the state tax calculator treats that
    /// as "no state income tax". Callers wanting strict validation should
    /// reject unknown codes before building the calculation input.
    pub fn state(
        &self,
        code: &str,
    ) -> Option<&StateTaxInfo> {
        self.states.iter().find(|s| s.code == code)
    }
}
