//! coverage-audit CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use coverage_audit::cli::{AuditCommand, Cli};
use coverage_audit::ui::should_use_colors;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr; stdout is reserved for the report.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("coverage_audit=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("coverage_audit=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("coverage-audit starting with args: {:?}", cli);

    // Determine project root
    let project_root = cli
        .project
        .clone()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    let use_color = !cli.no_color && should_use_colors();

    let cmd = AuditCommand::new(&project_root, cli.audit)
        .with_color(use_color)
        .with_quiet(cli.quiet);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cmd.execute(&mut out) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}
