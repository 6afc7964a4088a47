//! Progressive federal income tax over a bracket schedule.
//!
//! Each bracket's rate applies only to the taxable income that falls inside
//! that bracket. No rounding is performed here: the per-bracket amounts are
//! exact, so their sum equals the total by construction.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::TaxBracket;

/// Errors that can occur during federal tax calculation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FederalTaxError {
    /// The bracket schedule was empty.
    #[error("no tax brackets provided")]
    EmptySchedule,
}

/// Tax owed within a single bracket that taxable income reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracketDetail {
    pub rate: Decimal,
    pub lower_bound: Decimal,
    /// `None` for the unbounded top bracket.
    pub upper_bound: Option<Decimal>,
    /// Portion of taxable income that falls inside this bracket.
    pub taxable_amount: Decimal,
    pub tax_owed: Decimal,
}

/// Federal tax outcome: total, marginal rate, and the brackets touched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FederalTax {
    pub total: Decimal,
    /// Rate of the bracket containing the top dollar of taxable income.
    /// Zero when taxable income is zero.
    pub marginal_rate: Decimal,
    /// Only brackets with a strictly positive taxable amount, in ascending
    /// rate order.
    pub brackets: Vec<TaxBracketDetail>,
}

/// Calculator over one filing status's ordered bracket schedule.
#[derive(Debug, Clone)]
pub struct FederalCalculator<'a> {
    schedule: &'a [TaxBracket],
}

impl<'a> FederalCalculator<'a> {
    /// Creates a calculator over a schedule sorted ascending by `lower_bound`
    /// and covering `[0, ∞)`.
    pub fn new(schedule: &'a [TaxBracket]) -> Self {
        Self { schedule }
    }

    /// Calculates federal tax on `taxable_income`.
    ///
    /// # Errors
    ///
    /// Returns [`FederalTaxError::EmptySchedule`] if the schedule has no
    /// brackets.
    pub fn calculate(
        &self,
        taxable_income: Decimal,
    ) -> Result<FederalTax, FederalTaxError> {
        if self.schedule.is_empty() {
            return Err(FederalTaxError::EmptySchedule);
        }

        let mut total = Decimal::ZERO;
        let mut marginal_rate = Decimal::ZERO;
        let mut brackets = Vec::new();

        for bracket in self.schedule {
            if taxable_income <= bracket.lower_bound {
                break;
            }

            let ceiling = bracket
                .upper_bound
                .map_or(taxable_income, |upper| taxable_income.min(upper));
            let taxable_amount = ceiling - bracket.lower_bound;
            let tax_owed = taxable_amount * bracket.rate;

            total += tax_owed;
            marginal_rate = bracket.rate;
            brackets.push(TaxBracketDetail {
                rate: bracket.rate,
                lower_bound: bracket.lower_bound,
                upper_bound: bracket.upper_bound,
                taxable_amount,
                tax_owed,
            });
        }

        Ok(FederalTax {
            total,
            marginal_rate,
            brackets,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::FilingStatus;
    use crate::tables::tables_2024;

    fn single_schedule() -> Vec<TaxBracket> {
        tables_2024()
            .brackets_for(FilingStatus::Single)
            .unwrap()
            .to_vec()
    }

    #[test]
    fn zero_income_owes_nothing() {
        let schedule = single_schedule();
        let calculator = FederalCalculator::new(&schedule);

        let result = calculator.calculate(dec!(0)).unwrap();

        assert_eq!(result.total, dec!(0));
        assert_eq!(result.marginal_rate, dec!(0));
        assert_eq!(result.brackets, vec![]);
    }

    #[test]
    fn income_within_first_bracket() {
        let schedule = single_schedule();
        let calculator = FederalCalculator::new(&schedule);

        let result = calculator.calculate(dec!(10000)).unwrap();

        assert_eq!(result.total, dec!(1000));
        assert_eq!(result.marginal_rate, dec!(0.10));
        assert_eq!(result.brackets.len(), 1);
        assert_eq!(result.brackets[0].taxable_amount, dec!(10000));
    }

    #[test]
    fn income_spanning_two_brackets() {
        let schedule = single_schedule();
        let calculator = FederalCalculator::new(&schedule);

        let result = calculator.calculate(dec!(35400)).unwrap();

        // 11600 * 0.10 + (35400 - 11600) * 0.12 = 1160 + 2856
        assert_eq!(result.total, dec!(4016));
        assert_eq!(result.marginal_rate, dec!(0.12));
        assert_eq!(result.brackets.len(), 2);
        assert_eq!(result.brackets[1].taxable_amount, dec!(23800));
        assert_eq!(result.brackets[1].tax_owed, dec!(2856));
    }

    #[test]
    fn income_in_the_unbounded_top_bracket() {
        let schedule = single_schedule();
        let calculator = FederalCalculator::new(&schedule);

        let result = calculator.calculate(dec!(700000)).unwrap();

        assert_eq!(result.marginal_rate, dec!(0.37));
        let top = result.brackets.last().unwrap();
        assert_eq!(top.upper_bound, None);
        assert_eq!(top.taxable_amount, dec!(700000) - dec!(609350));
    }

    #[test]
    fn bracket_details_sum_exactly_to_total() {
        let schedule = single_schedule();
        let calculator = FederalCalculator::new(&schedule);

        for income in [dec!(0.01), dec!(11600), dec!(50000.55), dec!(243725), dec!(1000000)] {
            let result = calculator.calculate(income).unwrap();
            let sum: Decimal = result.brackets.iter().map(|b| b.tax_owed).sum();
            assert_eq!(sum, result.total, "income {income}");
        }
    }

    #[test]
    fn tax_is_monotone_in_taxable_income() {
        let schedule = single_schedule();
        let calculator = FederalCalculator::new(&schedule);

        let incomes = [
            dec!(0),
            dec!(500),
            dec!(11600),
            dec!(11600.01),
            dec!(47150),
            dec!(100525),
            dec!(191950),
            dec!(243725),
            dec!(609350),
            dec!(2000000),
        ];
        let mut previous = dec!(-1);
        for income in incomes {
            let tax = calculator.calculate(income).unwrap().total;
            assert!(tax >= previous, "tax decreased at income {income}");
            previous = tax;
        }
    }

    #[test]
    fn bracket_boundary_belongs_to_the_lower_bracket() {
        let schedule = single_schedule();
        let calculator = FederalCalculator::new(&schedule);

        // Exactly at the first boundary: the 12% bracket is not touched.
        let result = calculator.calculate(dec!(11600)).unwrap();

        assert_eq!(result.marginal_rate, dec!(0.10));
        assert_eq!(result.brackets.len(), 1);
        assert_eq!(result.total, dec!(1160));
    }

    #[test]
    fn empty_schedule_is_an_error() {
        let calculator = FederalCalculator::new(&[]);

        let result = calculator.calculate(dec!(50000));

        assert_eq!(result, Err(FederalTaxError::EmptySchedule));
    }
}
