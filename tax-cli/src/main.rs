use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rust_decimal::Decimal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tax_cli::input::EstimateRequest;
use tax_cli::output::{self, OutputFormat};
use tax_engine::TaxEngine;
use tax_engine::tables::tables_2024;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Federal, state, and payroll tax estimator for the 2024 tax year.
///
/// Takes income, filing status, and deductions, runs them through the 2024
/// tax-law tables, and renders the estimate as tables, bar charts, or JSON.
#[derive(Debug, Parser)]
#[command(name = "tax-estimator")]
struct Cli {
    /// Gross annual income in dollars.
    #[arg(long, required_unless_present = "input", conflicts_with = "input")]
    income: Option<Decimal>,

    /// Filing status: single, married-filing-jointly, married-filing-separately,
    /// head-of-household, or qualifying-surviving-spouse (short codes work too).
    #[arg(long, required_unless_present = "input", conflicts_with = "input")]
    filing_status: Option<String>,

    /// Two-letter state code (e.g. CA).
    #[arg(long, required_unless_present = "input", conflicts_with = "input")]
    state: Option<String>,

    /// Federal income tax already withheld.
    #[arg(long, default_value = "0")]
    federal_withholding: Decimal,

    /// State income tax already withheld.
    #[arg(long, default_value = "0")]
    state_withholding: Decimal,

    /// Deductions on top of the standard deduction.
    #[arg(long, default_value = "0")]
    other_deductions: Decimal,

    /// Number of dependents.
    #[arg(long, default_value = "0")]
    dependents: u32,

    /// Retirement (401k) contributions; capped at the yearly limit.
    #[arg(long)]
    retirement_contributions: Option<Decimal>,

    /// Student loan interest paid; capped at the yearly limit.
    #[arg(long)]
    student_loan_interest: Option<Decimal>,

    /// Charitable contributions to deduct.
    #[arg(long)]
    charitable_deductions: Option<Decimal>,

    /// Read the whole request from a TOML file instead of the flags above.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn load_request(cli: &Cli) -> anyhow::Result<EstimateRequest> {
    if let Some(path) = &cli.input {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read request file '{}'", path.display()))?;
        return toml::from_str(&raw)
            .with_context(|| format!("invalid request file '{}'", path.display()));
    }

    Ok(EstimateRequest {
        income: cli.income.context("--income is required")?,
        filing_status: cli
            .filing_status
            .clone()
            .context("--filing-status is required")?,
        state: cli.state.clone().context("--state is required")?,
        federal_withholding: cli.federal_withholding,
        state_withholding: cli.state_withholding,
        other_deductions: cli.other_deductions,
        dependents: cli.dependents,
        retirement_contributions: cli.retirement_contributions,
        student_loan_interest: cli.student_loan_interest,
        charitable_deductions: cli.charitable_deductions,
    })
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let tables = tables_2024();

    let request = load_request(&cli)?;
    let input = request.into_input(&tables)?;

    debug!(year = tables.tax_year, "calculating estimate");
    let result = TaxEngine::new(&tables).calculate(&input)?;

    // JSON stays machine-readable; the heading is for the human formats.
    if cli.format != OutputFormat::Json {
        println!("{}\n", output::heading(&input, &tables));
    }
    let rendered = output::render(cli.format, &result)?;
    println!("{}", rendered.trim_end());

    Ok(())
}
