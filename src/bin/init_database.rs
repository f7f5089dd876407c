//! Creates the POS database on the configured server if it does not exist.

use anyhow::{Context, Result};
use pos_services::DatabaseInitializer;
use pos_tools::{telemetry, AppConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init("pos_tools=info,pos_db=info,pos_services=info");

    let config = AppConfig::new().context("failed to load configuration")?;
    let initializer = DatabaseInitializer::new(config.database)?;
    info!(
        "Ensuring database {} exists on {}",
        initializer.database(),
        initializer.config().display_target()
    );

    match initializer.run().await {
        Ok(outcome) => {
            println!("{outcome}");
            Ok(())
        }
        Err(e) => {
            error!("❌ Database initialization failed: {}", e);
            Err(e).context(format!(
                "could not create database '{}'",
                initializer.database()
            ))
        }
    }
}
