//! Result rendering.
//!
//! Renderers build strings rather than printing, so tests can assert on the
//! rendered output directly.

pub mod chart;
pub mod json;
pub mod table;

use clap::ValueEnum;
use tax_engine::{TaxCalculationInput, TaxCalculationResult, TaxLawTables};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Summary and per-bracket tables.
    Table,
    /// Bar-chart breakdown of where gross income goes.
    Chart,
    /// Pretty-printed JSON of the full result record.
    Json,
}

/// Renders a result in the requested format.
pub fn render(
    format: OutputFormat,
    result: &TaxCalculationResult,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => Ok(table::render_table(result)),
        OutputFormat::Chart => Ok(chart::render_chart(result)),
        OutputFormat::Json => Ok(json::render_json(result)?),
    }
}

/// One-line heading naming the filing status, state, and tax year, e.g.
/// `Single filer in California (CA), tax year 2024`.
///
/// Unknown codes cannot reach this point through the validated input path,
/// but fall back to the bare code rather than panicking.
pub fn heading(
    input: &TaxCalculationInput,
    tables: &TaxLawTables,
) -> String {
    let state = tables
        .state(&input.state)
        .map_or_else(|| input.state.clone(), |s| format!("{} ({})", s.name, s.code));
    format!(
        "{} filer in {}, tax year {}",
        input.filing_status.name(),
        state,
        tables.tax_year
    )
}
