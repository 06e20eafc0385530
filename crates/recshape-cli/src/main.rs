//! # recshape CLI entry point
//!
//! Parses command-line arguments, loads the optional config file, installs
//! the tracing subscriber, and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use recshape_cli::config::{log_filter, CliConfig, OutputFormat, Settings};
use recshape_cli::greet::{run_greet, GreetArgs};
use recshape_cli::schema::{run_schema, SchemaArgs};
use recshape_cli::summary::{run_summary, SummaryArgs};
use recshape_cli::validate::{run_validate, ValidateArgs};
use recshape_cli::EXIT_ERROR;

/// Record shape validator for post and person documents.
#[derive(Parser, Debug)]
#[command(name = "recshape", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format. Overrides the config file.
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a document against the post or person shape.
    Validate(ValidateArgs),

    /// Validate a person and print a greeting.
    Greet(GreetArgs),

    /// Validate a post and print its title, slug, and first tag.
    Summary(SummaryArgs),

    /// Print the published JSON Schema for a shape.
    Schema(SchemaArgs),
}

/// Load the config file and build the tracing filter from it.
fn load_setup(cli: &Cli) -> anyhow::Result<(CliConfig, EnvFilter)> {
    let config = cli
        .config
        .as_deref()
        .map(CliConfig::load)
        .transpose()?
        .unwrap_or_default();
    let filter = log_filter(cli.verbose, &config)?;
    Ok((config, filter))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let (config, filter) = match load_setup(&cli) {
        Ok((config, filter)) => (Ok(config), filter),
        Err(e) => (Err(e), EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(EXIT_ERROR);
        }
    };

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "recshape starting");

    let settings = Settings::resolve(cli.format, &config);

    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args, &settings),
        Commands::Greet(args) => run_greet(&args, &settings),
        Commands::Summary(args) => run_summary(&args, &settings),
        Commands::Schema(args) => run_schema(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
