//! # csf CLI entry point
//!
//! Parses command-line arguments, loads the optional config file, sets up
//! logging, and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use csf_cli::config::CliConfig;
use csf_cli::show::{run_show, ShowArgs};
use csf_cli::summary::{run_summary, SummaryArgs};
use csf_cli::validate::{run_validate, ValidateArgs};

/// Exit code for operational errors (unreadable input, bad config).
const EXIT_OPERATIONAL_ERROR: u8 = 2;

/// CSF taxonomy CLI
///
/// Loads a CSF 2.0 JSON export and summarizes it, checks its integrity, or
/// inspects individual elements.
#[derive(Parser, Debug)]
#[command(name = "csf", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Skip invalid records instead of aborting the load.
    #[arg(long, global = true)]
    lenient: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Summarize documents, elements, relationships, and functions.
    Summary(SummaryArgs),

    /// Check framework integrity (duplicates, dangling references, orphans).
    Validate(ValidateArgs),

    /// Show one element with its parents, children, and related elements.
    Show(ShowArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // The config may set the log level, so read it before logging starts
    // and report a failure once the subscriber is up.
    let config = CliConfig::load_optional(cli.config.as_deref());

    let mut rejected_level = None;
    let filter = match (cli.verbose, config.as_ref().ok().and_then(|c| c.log_level.as_deref())) {
        (0, Some(level)) => EnvFilter::try_new(level).unwrap_or_else(|e| {
            rejected_level = Some((level.to_string(), e));
            EnvFilter::new("warn")
        }),
        (0, None) => EnvFilter::new("warn"),
        (1, _) => EnvFilter::new("info"),
        (2, _) => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if let Some((level, e)) = rejected_level {
        tracing::warn!(log_level = %level, error = %e, "invalid log_level in config, using warn");
    }

    let mut config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(EXIT_OPERATIONAL_ERROR);
        }
    };
    config.lenient |= cli.lenient;

    tracing::debug!(?config, "csf CLI starting");

    let result = match cli.command {
        Commands::Summary(args) => run_summary(&args, &config),
        Commands::Validate(args) => run_validate(&args, &config),
        Commands::Show(args) => run_show(&args, &config),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(EXIT_OPERATIONAL_ERROR)
        }
    }
}
