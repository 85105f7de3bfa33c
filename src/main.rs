//! Preflight CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use preflight::cli::Cli;
use preflight::config::{EnvSnapshot, ReportConfig, ReportContext};
use preflight::report::{run_report, Reporter};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("preflight=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("preflight=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Preflight starting with args: {:?}", cli);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Determine project root
    let project_root = cli
        .project
        .as_ref()
        .cloned()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    let ctx = ReportContext {
        config: ReportConfig::from_cli(&cli),
        env: EnvSnapshot::capture(),
        project_root,
    };

    let mut reporter = Reporter::new();

    match run_report(&ctx, &mut reporter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            reporter.fatal(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
