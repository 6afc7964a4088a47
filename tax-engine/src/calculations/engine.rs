//! The tax estimate orchestrator.
//!
//! [`TaxEngine::calculate`] turns one [`TaxCalculationInput`] into one
//! [`TaxCalculationResult`] in a single pass:
//!
//! | Step | Derivation |
//! |------|------------|
//! | 1    | Adjustments: capped retirement contributions + capped student loan interest |
//! | 2    | Adjusted gross income: income − adjustments |
//! | 3    | Standard deduction lookup by filing status |
//! | 4    | Total deductions: standard + other (+ charitable if flagged) |
//! | 5    | Taxable income: AGI − total deductions, floored at zero |
//! | 6    | Federal tax, bracket details, marginal rate |
//! | 7    | FICA on **gross** income |
//! | 8    | State tax on taxable income |
//! | 9    | Totals, net income, effective/marginal rates, refund or owed |
//!
//! The engine never mutates its input and has no observable side effects, so
//! concurrent calls with shared tables need no synchronization. Monetary
//! inputs are not clamped here; callers wanting strict non-negativity should
//! validate at the boundary.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_engine::{FilingStatus, TaxCalculationInput, TaxEngine};
//! use tax_engine::tables::tables_2024;
//!
//! let tables = tables_2024();
//! let input = TaxCalculationInput {
//!     income: dec!(50000),
//!     filing_status: FilingStatus::Single,
//!     state: "CA".to_string(),
//!     federal_withholding: dec!(4000),
//!     state_withholding: dec!(1000),
//!     other_deductions: dec!(0),
//!     dependents: 0,
//!     has_retirement_contributions: false,
//!     retirement_contributions: dec!(0),
//!     has_student_loan_interest: false,
//!     student_loan_interest: dec!(0),
//!     has_charitable_deductions: false,
//!     charitable_deductions: dec!(0),
//! };
//!
//! let result = TaxEngine::new(&tables).calculate(&input).unwrap();
//!
//! assert_eq!(result.taxable_income, dec!(35400));
//! assert_eq!(result.federal_tax, dec!(4016));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::calculations::federal::{FederalCalculator, FederalTaxError, TaxBracketDetail};
use crate::calculations::fica::{FicaCalculator, FicaError};
use crate::calculations::state::calculate_state_tax;
use crate::models::FilingStatus;
use crate::tables::{TaxLawTables, TaxTableError};

/// Errors that can occur while producing a tax estimate.
///
/// The calculation fails atomically: either every field of the result is
/// produced, or one of these errors surfaces and nothing is returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxCalculationError {
    #[error(transparent)]
    Table(#[from] TaxTableError),

    #[error(transparent)]
    Federal(#[from] FederalTaxError),

    #[error(transparent)]
    Fica(#[from] FicaError),
}

/// One evaluation's inputs. Owned by the caller and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCalculationInput {
    /// Gross annual income.
    pub income: Decimal,
    pub filing_status: FilingStatus,
    /// Two-letter USPS state code, uppercase.
    pub state: String,
    pub federal_withholding: Decimal,
    pub state_withholding: Decimal,
    /// Deductions beyond the standard deduction (added on top of it).
    pub other_deductions: Decimal,
    /// Carried for future credit support; unused by the computation today.
    pub dependents: u32,
    pub has_retirement_contributions: bool,
    pub retirement_contributions: Decimal,
    pub has_student_loan_interest: bool,
    pub student_loan_interest: Decimal,
    pub has_charitable_deductions: bool,
    pub charitable_deductions: Decimal,
}

/// The complete derived estimate. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCalculationResult {
    pub gross_income: Decimal,
    pub adjusted_gross_income: Decimal,
    pub standard_deduction: Decimal,
    pub taxable_income: Decimal,
    pub federal_tax: Decimal,
    pub state_tax: Decimal,
    pub social_security_tax: Decimal,
    pub medicare_tax: Decimal,
    pub additional_medicare_tax: Decimal,
    pub total_federal_tax: Decimal,
    pub total_state_tax: Decimal,
    pub total_taxes: Decimal,
    pub net_income: Decimal,
    /// Total taxes as a percentage of gross income; zero when income is zero.
    pub effective_tax_rate: Decimal,
    /// Marginal federal rate as a percentage.
    pub marginal_tax_rate: Decimal,
    /// Positive means refund, negative means amount owed.
    pub refund_or_owed: Decimal,
    /// Per-bracket breakdown for only the brackets actually touched,
    /// ascending by rate. The `tax_owed` values sum exactly to `federal_tax`.
    pub tax_bracket_details: Vec<TaxBracketDetail>,
}

/// Stateless estimator over one year's tax-law tables.
#[derive(Debug, Clone)]
pub struct TaxEngine<'a> {
    tables: &'a TaxLawTables,
}

impl<'a> TaxEngine<'a> {
    pub fn new(tables: &'a TaxLawTables) -> Self {
        Self { tables }
    }

    /// Produces the full estimate for one input record.
    ///
    /// # Errors
    ///
    /// Returns [`TaxCalculationError`] when a reference table has no row for
    /// the input's filing status. Unknown state codes are not an error here:
    /// they are treated as "no state income tax".
    pub fn calculate(
        &self,
        input: &TaxCalculationInput,
    ) -> Result<TaxCalculationResult, TaxCalculationError> {
        let adjustments = self.adjustments(input);
        let adjusted_gross_income = input.income - adjustments;

        let standard_deduction = self.tables.standard_deduction(input.filing_status)?;
        let total_deductions = self.total_deductions(standard_deduction, input);
        let taxable_income = (adjusted_gross_income - total_deductions).max(Decimal::ZERO);

        let schedule = self.tables.brackets_for(input.filing_status)?;
        let federal = FederalCalculator::new(schedule).calculate(taxable_income)?;

        let fica = FicaCalculator::new(&self.tables.fica)
            .calculate(input.income, input.filing_status)?;

        let state_tax = calculate_state_tax(self.tables.state(&input.state), taxable_income);

        let total_federal_tax = federal.total;
        let total_state_tax = state_tax;
        let total_taxes = total_federal_tax
            + total_state_tax
            + fica.social_security
            + fica.medicare
            + fica.additional_medicare;
        let net_income = input.income - total_taxes;

        let effective_tax_rate = if input.income > Decimal::ZERO {
            total_taxes / input.income * Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        };

        let total_withholding = input.federal_withholding + input.state_withholding;
        let refund_or_owed = total_withholding - total_taxes;

        debug!(
            year = self.tables.tax_year,
            status = input.filing_status.as_str(),
            %taxable_income,
            %total_taxes,
            "estimate complete"
        );

        Ok(TaxCalculationResult {
            gross_income: input.income,
            adjusted_gross_income,
            standard_deduction,
            taxable_income,
            federal_tax: federal.total,
            state_tax,
            social_security_tax: fica.social_security,
            medicare_tax: fica.medicare,
            additional_medicare_tax: fica.additional_medicare,
            total_federal_tax,
            total_state_tax,
            total_taxes,
            net_income,
            effective_tax_rate,
            marginal_tax_rate: federal.marginal_rate * Decimal::ONE_HUNDRED,
            refund_or_owed,
            tax_bracket_details: federal.brackets,
        })
    }

    /// Above-the-line adjustments, each capped at its yearly limit and only
    /// counted when its flag is set.
    fn adjustments(
        &self,
        input: &TaxCalculationInput,
    ) -> Decimal {
        let limits = &self.tables.limits;
        let mut adjustments = Decimal::ZERO;
        if input.has_retirement_contributions {
            adjustments += input
                .retirement_contributions
                .min(limits.retirement_contribution_cap);
        }
        if input.has_student_loan_interest {
            adjustments += input
                .student_loan_interest
                .min(limits.student_loan_interest_cap);
        }
        adjustments
    }

    /// Standard deduction plus other deductions, plus charitable deductions
    /// when flagged. The engine always adds standard and other together; any
    /// itemized-vs-standard choice is a caller policy.
    fn total_deductions(
        &self,
        standard_deduction: Decimal,
        input: &TaxCalculationInput,
    ) -> Decimal {
        let mut total = standard_deduction + input.other_deductions;
        if input.has_charitable_deductions {
            total += input.charitable_deductions;
        }
        total
    }
}
