//! 2024 tax year reference data.
//!
//! Federal bracket schedules and standard deductions follow the IRS 2024 rate
//! schedules (X, Y-1, Y-2, Z); Qualifying Surviving Spouse shares schedule Y-1
//! with Married Filing Jointly. State rates are the simplified flat rates used
//! by this estimator.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{BracketSchedule, TaxLawTables};
use crate::models::{
    AdjustmentLimits, FicaConfig, FilingStatus, MedicareThreshold, StandardDeduction,
    StateTaxInfo, TaxBracket,
};

fn bracket(
    lower_bound: Decimal,
    upper_bound: Option<Decimal>,
    rate: Decimal,
) -> TaxBracket {
    TaxBracket {
        lower_bound,
        upper_bound,
        rate,
    }
}

/// Schedule X: Single.
fn single_brackets() -> Vec<TaxBracket> {
    vec![
        bracket(dec!(0), Some(dec!(11600)), dec!(0.10)),
        bracket(dec!(11600), Some(dec!(47150)), dec!(0.12)),
        bracket(dec!(47150), Some(dec!(100525)), dec!(0.22)),
        bracket(dec!(100525), Some(dec!(191950)), dec!(0.24)),
        bracket(dec!(191950), Some(dec!(243725)), dec!(0.32)),
        bracket(dec!(243725), Some(dec!(609350)), dec!(0.35)),
        bracket(dec!(609350), None, dec!(0.37)),
    ]
}

/// Schedule Y-1: Married Filing Jointly and Qualifying Surviving Spouse.
fn mfj_brackets() -> Vec<TaxBracket> {
    vec![
        bracket(dec!(0), Some(dec!(23200)), dec!(0.10)),
        bracket(dec!(23200), Some(dec!(94300)), dec!(0.12)),
        bracket(dec!(94300), Some(dec!(201050)), dec!(0.22)),
        bracket(dec!(201050), Some(dec!(383900)), dec!(0.24)),
        bracket(dec!(383900), Some(dec!(487450)), dec!(0.32)),
        bracket(dec!(487450), Some(dec!(731200)), dec!(0.35)),
        bracket(dec!(731200), None, dec!(0.37)),
    ]
}

/// Schedule Y-2: Married Filing Separately.
fn mfs_brackets() -> Vec<TaxBracket> {
    vec![
        bracket(dec!(0), Some(dec!(11600)), dec!(0.10)),
        bracket(dec!(11600), Some(dec!(47150)), dec!(0.12)),
        bracket(dec!(47150), Some(dec!(100525)), dec!(0.22)),
        bracket(dec!(100525), Some(dec!(191950)), dec!(0.24)),
        bracket(dec!(191950), Some(dec!(243725)), dec!(0.32)),
        bracket(dec!(243725), Some(dec!(365600)), dec!(0.35)),
        bracket(dec!(365600), None, dec!(0.37)),
    ]
}

/// Schedule Z: Head of Household.
fn hoh_brackets() -> Vec<TaxBracket> {
    vec![
        bracket(dec!(0), Some(dec!(16550)), dec!(0.10)),
        bracket(dec!(16550), Some(dec!(63100)), dec!(0.12)),
        bracket(dec!(63100), Some(dec!(100500)), dec!(0.22)),
        bracket(dec!(100500), Some(dec!(191950)), dec!(0.24)),
        bracket(dec!(191950), Some(dec!(243700)), dec!(0.32)),
        bracket(dec!(243700), Some(dec!(609350)), dec!(0.35)),
        bracket(dec!(609350), None, dec!(0.37)),
    ]
}

fn standard_deductions() -> Vec<StandardDeduction> {
    let deduction = |filing_status, amount| StandardDeduction {
        filing_status,
        amount,
    };
    vec![
        deduction(FilingStatus::Single, dec!(14600)),
        deduction(FilingStatus::MarriedFilingJointly, dec!(29200)),
        deduction(FilingStatus::MarriedFilingSeparately, dec!(14600)),
        deduction(FilingStatus::HeadOfHousehold, dec!(21900)),
        deduction(FilingStatus::QualifyingSurvivingSpouse, dec!(29200)),
    ]
}

fn fica_config() -> FicaConfig {
    let threshold = |filing_status, amount| MedicareThreshold {
        filing_status,
        amount,
    };
    FicaConfig {
        ss_rate: dec!(0.062),
        ss_wage_base: dec!(168600),
        medicare_rate: dec!(0.0145),
        additional_medicare_rate: dec!(0.009),
        additional_medicare_thresholds: vec![
            threshold(FilingStatus::Single, dec!(200000)),
            threshold(FilingStatus::MarriedFilingJointly, dec!(250000)),
            threshold(FilingStatus::MarriedFilingSeparately, dec!(125000)),
            threshold(FilingStatus::HeadOfHousehold, dec!(200000)),
            threshold(FilingStatus::QualifyingSurvivingSpouse, dec!(200000)),
        ],
    }
}

fn state_rates() -> Vec<StateTaxInfo> {
    let state = |code: &str, name: &str, flat_rate: Decimal, has_income_tax| StateTaxInfo {
        code: code.to_string(),
        name: name.to_string(),
        flat_rate,
        has_income_tax,
    };
    vec![
        state("AL", "Alabama", dec!(0.05), true),
        state("AK", "Alaska", dec!(0.00), false),
        state("AZ", "Arizona", dec!(0.042), true),
        state("AR", "Arkansas", dec!(0.055), true),
        state("CA", "California", dec!(0.093), true),
        state("CO", "Colorado", dec!(0.0455), true),
        state("CT", "Connecticut", dec!(0.0699), true),
        state("DE", "Delaware", dec!(0.066), true),
        state("FL", "Florida", dec!(0.00), false),
        state("GA", "Georgia", dec!(0.0575), true),
        state("HI", "Hawaii", dec!(0.11), true),
        state("ID", "Idaho", dec!(0.058), true),
        state("IL", "Illinois", dec!(0.0495), true),
        state("IN", "Indiana", dec!(0.0323), true),
        state("IA", "Iowa", dec!(0.0853), true),
        state("KS", "Kansas", dec!(0.057), true),
        state("KY", "Kentucky", dec!(0.045), true),
        state("LA", "Louisiana", dec!(0.0425), true),
        state("ME", "Maine", dec!(0.0715), true),
        state("MD", "Maryland", dec!(0.0575), true),
        state("MA", "Massachusetts", dec!(0.05), true),
        state("MI", "Michigan", dec!(0.0425), true),
        state("MN", "Minnesota", dec!(0.0985), true),
        state("MS", "Mississippi", dec!(0.05), true),
        state("MO", "Missouri", dec!(0.0495), true),
        state("MT", "Montana", dec!(0.0675), true),
        state("NE", "Nebraska", dec!(0.0684), true),
        state("NV", "Nevada", dec!(0.00), false),
        state("NH", "New Hampshire", dec!(0.00), false),
        state("NJ", "New Jersey", dec!(0.1075), true),
        state("NM", "New Mexico", dec!(0.059), true),
        state("NY", "New York", dec!(0.109), true),
        state("NC", "North Carolina", dec!(0.0475), true),
        state("ND", "North Dakota", dec!(0.0295), true),
        state("OH", "Ohio", dec!(0.0399), true),
        state("OK", "Oklahoma", dec!(0.05), true),
        state("OR", "Oregon", dec!(0.099), true),
        state("PA", "Pennsylvania", dec!(0.0307), true),
        state("RI", "Rhode Island", dec!(0.0599), true),
        state("SC", "South Carolina", dec!(0.07), true),
        state("SD", "South Dakota", dec!(0.00), false),
        state("TN", "Tennessee", dec!(0.00), false),
        state("TX", "Texas", dec!(0.00), false),
        state("UT", "Utah", dec!(0.0485), true),
        state("VT", "Vermont", dec!(0.0875), true),
        state("VA", "Virginia", dec!(0.0575), true),
        state("WA", "Washington", dec!(0.00), false),
        state("WV", "West Virginia", dec!(0.065), true),
        state("WI", "Wisconsin", dec!(0.0765), true),
        state("WY", "Wyoming", dec!(0.00), false),
    ]
}

/// Builds the complete 2024 tax-law tables.
pub fn tables_2024() -> TaxLawTables {
    TaxLawTables {
        tax_year: 2024,
        schedules: vec![
            BracketSchedule {
                filing_status: FilingStatus::Single,
                brackets: single_brackets(),
            },
            BracketSchedule {
                filing_status: FilingStatus::MarriedFilingJointly,
                brackets: mfj_brackets(),
            },
            BracketSchedule {
                filing_status: FilingStatus::MarriedFilingSeparately,
                brackets: mfs_brackets(),
            },
            BracketSchedule {
                filing_status: FilingStatus::HeadOfHousehold,
                brackets: hoh_brackets(),
            },
            BracketSchedule {
                filing_status: FilingStatus::QualifyingSurvivingSpouse,
                brackets: mfj_brackets(),
            },
        ],
        standard_deductions: standard_deductions(),
        fica: fica_config(),
        states: state_rates(),
        limits: AdjustmentLimits {
            retirement_contribution_cap: dec!(23000),
            student_loan_interest_cap: dec!(2500),
        },
    }
}
