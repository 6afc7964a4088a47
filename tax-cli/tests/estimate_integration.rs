//! End-to-end tests: raw request through validation, the engine, and rendering.

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

use tax_cli::input::EstimateRequest;
use tax_cli::output::{OutputFormat, heading, render};
use tax_engine::{TaxEngine, tables::tables_2024};

fn request() -> EstimateRequest {
    EstimateRequest {
        income: dec!(50000),
        filing_status: "single".to_string(),
        state: "ca".to_string(),
        federal_withholding: dec!(4000),
        state_withholding: dec!(1000),
        other_deductions: dec!(0),
        dependents: 0,
        retirement_contributions: None,
        student_loan_interest: None,
        charitable_deductions: None,
    }
}

#[test]
fn table_output_end_to_end() {
    let tables = tables_2024();
    let input = request().into_input(&tables).unwrap();
    let result = TaxEngine::new(&tables).calculate(&input).unwrap();

    let rendered = render(OutputFormat::Table, &result).unwrap();

    assert!(rendered.contains("Taxable Income"));
    assert!(rendered.contains("$35,400.00"));
    assert!(rendered.contains("$4,016.00"));
    assert!(rendered.contains("Amount Owed"));
}

#[test]
fn chart_output_end_to_end() {
    let tables = tables_2024();
    let input = request().into_input(&tables).unwrap();
    let result = TaxEngine::new(&tables).calculate(&input).unwrap();

    let rendered = render(OutputFormat::Chart, &result).unwrap();

    assert!(rendered.contains("Where your gross income goes"));
    assert!(rendered.contains("State income tax"));
}

#[test]
fn heading_shows_the_full_state_name() {
    let tables = tables_2024();
    let input = request().into_input(&tables).unwrap();

    let line = heading(&input, &tables);

    assert_eq!(line, "Single filer in California (CA), tax year 2024");
}

#[test]
fn json_output_round_trips_the_result() {
    let tables = tables_2024();
    let input = request().into_input(&tables).unwrap();
    let result = TaxEngine::new(&tables).calculate(&input).unwrap();

    let rendered = render(OutputFormat::Json, &result).unwrap();
    let parsed: tax_engine::TaxCalculationResult = serde_json::from_str(&rendered).unwrap();

    assert_eq!(parsed, result);
}

#[test]
fn toml_request_end_to_end() {
    let tables = tables_2024();
    let request: EstimateRequest = toml::from_str(
        r#"
        income = "600000"
        filing_status = "MFJ"
        state = "TX"
        federal_withholding = "150000"
        "#,
    )
    .unwrap();

    let input = request.into_input(&tables).unwrap();
    let result = TaxEngine::new(&tables).calculate(&input).unwrap();

    // Social security capped at the wage base, additional Medicare above 250k.
    assert_eq!(result.social_security_tax, dec!(10453.2));
    assert_eq!(result.additional_medicare_tax, dec!(3150));
    assert_eq!(result.state_tax, dec!(0));
}

#[test]
fn invalid_request_blocks_the_calculation() {
    let tables = tables_2024();
    let mut bad_state = request();
    bad_state.state = "QQ".to_string();

    assert!(bad_state.into_input(&tables).is_err());

    let mut negative = request();
    negative.income = dec!(-1);

    assert!(negative.into_input(&tables).is_err());
}
