mod adjustment_limits;
mod fica;
mod filing_status;
mod standard_deduction;
mod state_tax;
mod tax_bracket;

pub use adjustment_limits::AdjustmentLimits;
pub use fica::{FicaConfig, MedicareThreshold};
pub use filing_status::FilingStatus;
pub use standard_deduction::StandardDeduction;
pub use state_tax::StateTaxInfo;
pub use tax_bracket::TaxBracket;
