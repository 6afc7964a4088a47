use tax_engine::TaxCalculationResult;

/// Renders the full result record as pretty-printed JSON.
pub fn render_json(result: &TaxCalculationResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}
