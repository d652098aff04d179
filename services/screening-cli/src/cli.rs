use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use credit_card_applications::config::{AppConfig, RegistryConfig};
use credit_card_applications::error::AppError;
use credit_card_applications::telemetry;
use credit_card_applications::{
    CreditCardApplication, CreditCardApplicationEvaluator, FrequentFlyerNumberValidator,
    LicenseStatus,
};
use tracing::info;

use crate::batch::{screen_batch, write_evaluation, OutputFormat};
use crate::error::ScreeningError;
use crate::registry::RegistryValidator;

#[derive(Parser, Debug)]
#[command(
    name = "card-screening",
    about = "Screen credit card applications against the frequent flyer registry",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a single application given on the command line
    Evaluate(EvaluateArgs),
    /// Screen every application in a CSV file
    Screen(ScreenArgs),
}

#[derive(Args, Debug, Default, Clone)]
struct RegistryArgs {
    /// Registry snapshot with one frequent flyer number per line (overrides FFN_REGISTRY_PATH)
    #[arg(long)]
    registry: Option<PathBuf>,
    /// License status reported by the registry (overrides FFN_LICENSE_STATUS)
    #[arg(long)]
    license_status: Option<String>,
}

#[derive(Args, Debug)]
struct EvaluateArgs {
    /// Gross annual income of the applicant
    #[arg(long)]
    income: u64,
    /// Age of the applicant in years
    #[arg(long)]
    age: u32,
    /// Frequent flyer number supplied by the applicant
    #[arg(long)]
    frequent_flyer_number: Option<String>,
    /// Emit the result as a JSON object instead of text
    #[arg(long)]
    json: bool,
    #[command(flatten)]
    registry: RegistryArgs,
}

#[derive(Args, Debug)]
struct ScreenArgs {
    /// CSV with headers reference,gross_annual_income,age,frequent_flyer_number
    #[arg(long)]
    applications: PathBuf,
    /// Emit one JSON object per application instead of text
    #[arg(long)]
    json: bool,
    #[command(flatten)]
    registry: RegistryArgs,
}

pub(crate) fn run() -> Result<(), ScreeningError> {
    let cli = Cli::parse();
    let config = AppConfig::load().map_err(AppError::from)?;
    telemetry::init(&config.telemetry).map_err(AppError::from)?;

    info!(?config.environment, "credit card screening starting");

    match cli.command {
        Command::Evaluate(args) => run_evaluate(&config, args),
        Command::Screen(args) => run_screen(&config, args),
    }
}

fn run_evaluate(config: &AppConfig, args: EvaluateArgs) -> Result<(), ScreeningError> {
    let EvaluateArgs {
        income,
        age,
        frequent_flyer_number,
        json,
        registry,
    } = args;

    let evaluator = build_evaluator(&config.registry, registry)?;
    let application = CreditCardApplication {
        gross_annual_income: income,
        age,
        frequent_flyer_number,
    };

    let evaluation = evaluator.assess(&application);
    write_evaluation(
        &mut io::stdout().lock(),
        "application",
        &evaluation,
        output_format(json),
    )
}

fn run_screen(config: &AppConfig, args: ScreenArgs) -> Result<(), ScreeningError> {
    let ScreenArgs {
        applications,
        json,
        registry,
    } = args;

    let evaluator = build_evaluator(&config.registry, registry)?;
    let file = File::open(&applications).map_err(|source| ScreeningError::Read {
        path: applications.display().to_string(),
        source,
    })?;
    let summary = screen_batch(
        &evaluator,
        BufReader::new(file),
        io::stdout().lock(),
        output_format(json),
    )?;

    info!(
        screened = summary.screened,
        decisions = ?summary.decisions,
        "batch screening complete"
    );
    Ok(())
}

fn output_format(json: bool) -> OutputFormat {
    if json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    }
}

fn build_evaluator(
    config: &RegistryConfig,
    overrides: RegistryArgs,
) -> Result<CreditCardApplicationEvaluator, ScreeningError> {
    let settings = resolve_registry(config, overrides);
    let path = settings.path.ok_or(ScreeningError::MissingRegistry)?;
    let license = LicenseStatus::from(settings.license_status);
    let registry = RegistryValidator::from_path(&path, license)?;

    info!(
        registry = %path.display(),
        numbers = registry.len(),
        "frequent flyer registry loaded"
    );

    let validator: Arc<dyn FrequentFlyerNumberValidator> = Arc::new(registry);
    let evaluator =
        CreditCardApplicationEvaluator::try_new(Some(validator)).map_err(AppError::from)?;
    Ok(evaluator)
}

fn resolve_registry(config: &RegistryConfig, overrides: RegistryArgs) -> RegistryConfig {
    RegistryConfig {
        path: overrides.registry.or_else(|| config.path.clone()),
        license_status: overrides
            .license_status
            .or_else(|| config.license_status.clone()),
    }
}
