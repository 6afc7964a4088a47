pub mod calculations;
pub mod models;
pub mod tables;

pub use calculations::{
    TaxCalculationError, TaxCalculationInput, TaxCalculationResult, TaxEngine,
};
pub use models::*;
pub use tables::{BracketSchedule, TaxLawTables, TaxTableError};
