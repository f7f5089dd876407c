//! Prints `migration.sql` wrapped in instructions for the operator.

use anyhow::{Context, Result};
use pos_services::MigrationPrinter;
use pos_tools::{telemetry, AppConfig};
use tracing::debug;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init("pos_tools=warn,pos_services=warn");

    let config = AppConfig::printer().context("failed to load configuration")?;
    let printer = MigrationPrinter::resolve(config.migration_path)?;
    debug!("Printing {}", printer.path().display());

    let stdout = std::io::stdout();
    printer.print_to(&mut stdout.lock())?;

    Ok(())
}
