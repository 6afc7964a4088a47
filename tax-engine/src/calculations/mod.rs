//! Tax calculation modules.
//!
//! The calculators are pure: each takes previously derived values plus the
//! static reference tables and produces a result with no side effects.
//! [`TaxEngine`] orchestrates them into the full estimate.

pub mod engine;
pub mod federal;
pub mod fica;
pub mod state;

pub use engine::{TaxCalculationError, TaxCalculationInput, TaxCalculationResult, TaxEngine};
pub use federal::{FederalCalculator, FederalTax, FederalTaxError, TaxBracketDetail};
pub use fica::{FicaCalculator, FicaError, FicaTaxes};
pub use state::calculate_state_tax;
