//! Changelog Validator CLI
//!
//! A command-line tool for validating Keep a Changelog documents.

use clap::Parser;
use std::io::{self, IsTerminal};
use std::process::ExitCode as StdExitCode;
use tracing::{Level, debug, error, info};
use tracing_subscriber::EnvFilter;

mod cli;

use changelog_validator_core::validate_changelog;
use cli::Args;
use cli::config::{ExitCode, ValidatedConfig, exit_code_for_outcome};
use cli::output::HumanOutput;

fn main() -> StdExitCode {
    // Parse command-line arguments
    let args = Args::parse();

    // Initialize tracing
    init_tracing(args.verbose);

    let exit_code = run(&args);
    StdExitCode::from(i32::from(exit_code) as u8)
}

/// Initialize tracing based on verbosity level.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

/// Run the validator with the given arguments.
fn run(args: &Args) -> ExitCode {
    let use_colors = !args.no_color && io::stdout().is_terminal();
    let mut stdout = HumanOutput::new(io::stdout().lock(), use_colors);
    let mut stderr = HumanOutput::new(io::stderr().lock(), use_colors);

    // Validate configuration
    let config = match ValidatedConfig::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            let _ = stderr.write_error(&e.to_string());
            return ExitCode::StartupFailure;
        }
    };

    debug!("Validated configuration: {:?}", config);
    info!("Changelog file: {}", config.changelog_path.display());

    let content = match config.read_changelog() {
        Ok(content) => content,
        Err(e) => {
            let _ = stderr.write_error(&e.to_string());
            return ExitCode::StartupFailure;
        }
    };

    let outcome = validate_changelog(&content, &config.validator_config);
    let written = match &outcome {
        Ok(report) => {
            info!(
                "Checked {} release(s), {} violation(s)",
                report.releases.len(),
                report.total_errors()
            );
            stdout.write_report(report)
        }
        Err(e) => {
            info!("Validation stopped: {}", e);
            stdout.write_changelog_error(e)
        }
    };

    if let Err(e) = written {
        error!("Failed to write output: {}", e);
        return ExitCode::StartupFailure;
    }

    exit_code_for_outcome(&outcome)
}
