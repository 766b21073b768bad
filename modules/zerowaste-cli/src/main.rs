use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use zerowaste_common::{
    format_currency, format_number, format_percent, Config, Country, Derived, Inputs,
    ScenarioMappingInputs,
};
use zerowaste_engine::{
    calculate_derived, create_snapshot, find_scenario, suggest_scenario, validate_inputs,
    write_snapshot, ReportSummary, Scenario, SCENARIOS,
};

mod file_config;

#[derive(Parser)]
#[command(name = "zw", about = "Zero-waste program estimator", version)]
struct Cli {
    /// Path to an optional config TOML file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Country used for currency formatting (overrides config)
    #[arg(long, global = true)]
    country: Option<Country>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the scenario catalogue
    Scenarios,
    /// Suggest a scenario from context answers and apply it
    Suggest {
        /// JSON file with the context answers
        #[arg(long)]
        mapping: PathBuf,
        /// JSON inputs to apply the scenario onto (defaults to the global defaults)
        #[arg(long)]
        inputs: Option<PathBuf>,
    },
    /// Validate inputs and compute derived metrics
    Calc {
        #[arg(long)]
        inputs: Option<PathBuf>,
        /// Apply this scenario id before calculating
        #[arg(long)]
        scenario: Option<String>,
        /// Print results even when validation fails
        #[arg(long)]
        allow_invalid: bool,
    },
    /// Write an export snapshot of inputs and derived metrics
    Export {
        #[arg(long)]
        inputs: Option<PathBuf>,
        #[arg(long)]
        scenario: Option<String>,
        /// Output directory (overrides config)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_effective_config(&cli)?;
    init_tracing(config.log_json)?;

    info!("Zero-waste estimator starting...");
    config.log_redacted();

    match &cli.command {
        Command::Scenarios => print_json(&SCENARIOS),
        Command::Suggest { mapping, inputs } => run_suggest(mapping, inputs.as_deref()),
        Command::Calc {
            inputs,
            scenario,
            allow_invalid,
        } => run_calc(&config, inputs.as_deref(), scenario.as_deref(), *allow_invalid),
        Command::Export {
            inputs,
            scenario,
            out,
        } => run_export(&config, inputs.as_deref(), scenario.as_deref(), out.as_deref()),
    }
}

/// Env first, then the TOML file, then command-line flags.
fn load_effective_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::from_env().context("Invalid environment configuration")?;
    if let Some(path) = &cli.config {
        config = file_config::load_config(path)?.apply_to(config);
    }
    if let Some(country) = cli.country {
        config.country = country;
    }
    Ok(config)
}

fn init_tracing(json: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("zerowaste=info,zw=info"))?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
    Ok(())
}

fn run_suggest(mapping_path: &Path, inputs_path: Option<&Path>) -> Result<()> {
    let mapping: ScenarioMappingInputs = read_json(mapping_path)?;
    mapping.check()?;

    let scenario = suggest_scenario(&mapping);
    info!(
        scenario = scenario.id,
        locality = mapping.locality_name.as_deref().unwrap_or("-"),
        "Scenario suggested"
    );

    let applied = scenario.apply(&load_inputs(inputs_path)?);
    print_json(&json!({
        "scenario": scenario,
        "inputs": applied,
    }))
}

fn run_calc(
    config: &Config,
    inputs_path: Option<&Path>,
    scenario_id: Option<&str>,
    allow_invalid: bool,
) -> Result<()> {
    let inputs = prepare_inputs(inputs_path, scenario_id)?;

    let errors = validate_inputs(&inputs);
    for err in &errors {
        warn!(field = err.field.as_str(), "{}", err.message);
    }
    if !errors.is_empty() && !allow_invalid {
        print_json(&json!({ "errors": errors }))?;
        anyhow::bail!("{} validation error(s); rerun with --allow-invalid to preview", errors.len());
    }

    let derived = calculate_derived(&inputs);
    let report = ReportSummary::from_derived(&derived);
    print_json(&json!({
        "inputs": inputs,
        "derived": derived,
        "report": report,
        "formatted": formatted_headlines(&derived, &report, config.country),
        "errors": errors,
    }))
}

fn run_export(
    config: &Config,
    inputs_path: Option<&Path>,
    scenario_id: Option<&str>,
    out: Option<&Path>,
) -> Result<()> {
    let inputs = prepare_inputs(inputs_path, scenario_id)?;

    let errors = validate_inputs(&inputs);
    if !errors.is_empty() {
        print_json(&json!({ "errors": errors }))?;
        anyhow::bail!("Refusing to export invalid inputs ({} error(s))", errors.len());
    }

    let dir = out.unwrap_or(&config.snapshot_dir);
    let snapshot = create_snapshot(&inputs);
    let path = write_snapshot(dir, &snapshot)
        .with_context(|| format!("Failed to write snapshot to {}", dir.display()))?;
    print_json(&json!({ "path": path }))
}

/// Load inputs and optionally merge a named scenario onto them.
fn prepare_inputs(inputs_path: Option<&Path>, scenario_id: Option<&str>) -> Result<Inputs> {
    let inputs = load_inputs(inputs_path)?;
    match scenario_id {
        Some(id) => Ok(lookup_scenario(id)?.apply(&inputs)),
        None => Ok(inputs),
    }
}

fn lookup_scenario(id: &str) -> Result<&'static Scenario> {
    find_scenario(id).ok_or_else(|| {
        zerowaste_common::ZeroWasteError::UnknownScenario { id: id.to_string() }.into()
    })
}

fn load_inputs(path: Option<&Path>) -> Result<Inputs> {
    match path {
        Some(p) => read_json(p),
        None => Ok(Inputs::default()),
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn formatted_headlines(
    derived: &Derived,
    report: &ReportSummary,
    country: Country,
) -> serde_json::Value {
    json!({
        "totalAnnualTons": format_number(derived.total_annual_tons, 1),
        "divertedOrganicsTons": format_number(derived.diverted_organics_tons, 1),
        "compostKg": format_number(derived.compost_kg, 0),
        "baselineCost": format_currency(derived.baseline_cost, country, 0),
        "afterZWCost": format_currency(derived.after_zw_cost, country, 0),
        "compostRevenue": format_currency(derived.compost_revenue, country, 0),
        "avoidedDisposalSavings": format_currency(derived.avoided_disposal_savings, country, 0),
        "netSavings": format_currency(report.net_savings, country, 0),
        "costReduction": format_percent(report.cost_reduction_fraction, 1),
    })
}
