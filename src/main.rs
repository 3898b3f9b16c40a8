use anyhow::Result;
use tracing::info;

use customer_report::cli::CommandLine;
use customer_report::run_demo;

/// Logs go to stderr so stdout carries only the report.
///
/// ```bash
/// RUST_LOG=debug cargo run    # show each order and discount calculation
/// ```
fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() -> Result<()> {
    setup_tracing();

    let command_line = CommandLine::parse_args();
    let policy = command_line.discount_policy()?;
    info!(
        threshold = policy.threshold().value(),
        rate = policy.rate(),
        "Starting customer report demo"
    );

    let stdout = std::io::stdout();
    run_demo(&mut stdout.lock(), policy)
}
