//! Boundary validation for estimate requests.
//!
//! The engine deliberately does not clamp or reject negative monetary inputs;
//! strictness lives here instead. A request is the raw, stringly-typed shape
//! that arrives from flags or a TOML file; [`EstimateRequest::into_input`]
//! turns it into a typed [`TaxCalculationInput`] or fails with a structured
//! error before any arithmetic happens.

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use tax_engine::{FilingStatus, TaxCalculationInput, TaxLawTables};

/// Errors raised while validating an estimate request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("{field} must be non-negative, got {value}")]
    NegativeAmount {
        field: &'static str,
        value: Decimal,
    },

    #[error(
        "unknown filing status '{0}' (expected single, married-filing-jointly, \
         married-filing-separately, head-of-household, or qualifying-surviving-spouse)"
    )]
    UnknownFilingStatus(String),

    #[error("unknown state code '{0}' (expected a two-letter USPS code)")]
    UnknownState(String),
}

/// A raw estimate request, as read from CLI flags or a TOML file.
///
/// The three optional adjustment amounts double as their own flags: supplying
/// an amount turns the corresponding adjustment on.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EstimateRequest {
    pub income: Decimal,
    pub filing_status: String,
    pub state: String,
    #[serde(default)]
    pub federal_withholding: Decimal,
    #[serde(default)]
    pub state_withholding: Decimal,
    #[serde(default)]
    pub other_deductions: Decimal,
    #[serde(default)]
    pub dependents: u32,
    #[serde(default)]
    pub retirement_contributions: Option<Decimal>,
    #[serde(default)]
    pub student_loan_interest: Option<Decimal>,
    #[serde(default)]
    pub charitable_deductions: Option<Decimal>,
}

impl EstimateRequest {
    /// Validates the request against the tables and produces the engine input.
    ///
    /// State codes are matched case-insensitively here (normalized to
    /// uppercase) but unknown codes are rejected outright, stricter than the
    /// engine's own "unknown state means no state tax" behavior.
    pub fn into_input(
        self,
        tables: &TaxLawTables,
    ) -> Result<TaxCalculationInput, InputError> {
        let filing_status = FilingStatus::parse(&self.filing_status)
            .ok_or_else(|| InputError::UnknownFilingStatus(self.filing_status.clone()))?;

        let state = self.state.trim().to_ascii_uppercase();
        if tables.state(&state).is_none() {
            return Err(InputError::UnknownState(self.state.clone()));
        }

        let income = non_negative("income", self.income)?;
        let federal_withholding =
            non_negative("federal-withholding", self.federal_withholding)?;
        let state_withholding = non_negative("state-withholding", self.state_withholding)?;
        let other_deductions = non_negative("other-deductions", self.other_deductions)?;
        let retirement_contributions = optional_non_negative(
            "retirement-contributions",
            self.retirement_contributions,
        )?;
        let student_loan_interest =
            optional_non_negative("student-loan-interest", self.student_loan_interest)?;
        let charitable_deductions =
            optional_non_negative("charitable-deductions", self.charitable_deductions)?;

        Ok(TaxCalculationInput {
            income,
            filing_status,
            state,
            federal_withholding,
            state_withholding,
            other_deductions,
            dependents: self.dependents,
            has_retirement_contributions: retirement_contributions.is_some(),
            retirement_contributions: retirement_contributions.unwrap_or(Decimal::ZERO),
            has_student_loan_interest: student_loan_interest.is_some(),
            student_loan_interest: student_loan_interest.unwrap_or(Decimal::ZERO),
            has_charitable_deductions: charitable_deductions.is_some(),
            charitable_deductions: charitable_deductions.unwrap_or(Decimal::ZERO),
        })
    }
}

fn non_negative(
    field: &'static str,
    value: Decimal,
) -> Result<Decimal, InputError> {
    if value < Decimal::ZERO {
        Err(InputError::NegativeAmount { field, value })
    } else {
        Ok(value)
    }
}

fn optional_non_negative(
    field: &'static str,
    value: Option<Decimal>,
) -> Result<Option<Decimal>, InputError> {
    value.map(|v| non_negative(field, v)).transpose()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use tax_engine::tables::tables_2024;

    fn request() -> EstimateRequest {
        EstimateRequest {
            income: dec!(50000),
            filing_status: "single".to_string(),
            state: "CA".to_string(),
            federal_withholding: dec!(0),
            state_withholding: dec!(0),
            other_deductions: dec!(0),
            dependents: 0,
            retirement_contributions: None,
            student_loan_interest: None,
            charitable_deductions: None,
        }
    }

    #[test]
    fn valid_request_produces_engine_input() {
        let tables = tables_2024();

        let input = request().into_input(&tables).unwrap();

        assert_eq!(input.income, dec!(50000));
        assert_eq!(input.filing_status, FilingStatus::Single);
        assert_eq!(input.state, "CA");
        assert!(!input.has_retirement_contributions);
    }

    #[test]
    fn state_code_is_normalized_to_uppercase() {
        let tables = tables_2024();
        let mut req = request();
        req.state = " ca ".to_string();

        let input = req.into_input(&tables).unwrap();

        assert_eq!(input.state, "CA");
    }

    #[test]
    fn unknown_state_is_rejected() {
        let tables = tables_2024();
        let mut req = request();
        req.state = "XX".to_string();

        let result = req.into_input(&tables);

        assert_eq!(result, Err(InputError::UnknownState("XX".to_string())));
    }

    #[test]
    fn unknown_filing_status_is_rejected() {
        let tables = tables_2024();
        let mut req = request();
        req.filing_status = "widowed".to_string();

        let result = req.into_input(&tables);

        assert_eq!(
            result,
            Err(InputError::UnknownFilingStatus("widowed".to_string()))
        );
    }

    #[test]
    fn negative_amounts_are_rejected() {
        let tables = tables_2024();
        let mut req = request();
        req.federal_withholding = dec!(-100);

        let result = req.into_input(&tables);

        assert_eq!(
            result,
            Err(InputError::NegativeAmount {
                field: "federal-withholding",
                value: dec!(-100),
            })
        );
    }

    #[test]
    fn negative_optional_amounts_are_rejected() {
        let tables = tables_2024();
        let mut req = request();
        req.student_loan_interest = Some(dec!(-1));

        let result = req.into_input(&tables);

        assert_eq!(
            result,
            Err(InputError::NegativeAmount {
                field: "student-loan-interest",
                value: dec!(-1),
            })
        );
    }

    #[test]
    fn supplying_an_adjustment_amount_sets_its_flag() {
        let tables = tables_2024();
        let mut req = request();
        req.retirement_contributions = Some(dec!(6000));
        req.charitable_deductions = Some(dec!(250));

        let input = req.into_input(&tables).unwrap();

        assert!(input.has_retirement_contributions);
        assert_eq!(input.retirement_contributions, dec!(6000));
        assert!(input.has_charitable_deductions);
        assert_eq!(input.charitable_deductions, dec!(250));
        assert!(!input.has_student_loan_interest);
    }

    #[test]
    fn request_deserializes_from_toml() {
        let request: EstimateRequest = toml::from_str(
            r#"
            income = "82500.50"
            filing_status = "married-filing-jointly"
            state = "OR"
            federal_withholding = "9000"
            retirement_contributions = "4000"
            "#,
        )
        .unwrap();

        assert_eq!(request.income, dec!(82500.50));
        assert_eq!(request.retirement_contributions, Some(dec!(4000)));
        assert_eq!(request.dependents, 0);
    }
}
