use std::time::Duration;

use pos_models::{PosError, Result, ServerConfig};
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::{Connection, Row};
use tracing::{debug, info};

/// A single MySQL connection, opened without selecting a default schema.
pub struct DatabaseConnection {
    conn: MySqlConnection,
}

impl DatabaseConnection {
    pub async fn connect(config: &ServerConfig) -> Result<Self> {
        let options = connect_options(config);
        let seconds = config.connect_timeout_secs;

        debug!("Connecting to {}", config.display_target());
        let conn = tokio::time::timeout(
            Duration::from_secs(seconds),
            MySqlConnection::connect_with(&options),
        )
        .await
        .map_err(|_| PosError::ConnectTimeout {
            addr: config.server_addr(),
            seconds,
        })??;

        info!("Connected to {}", config.display_target());
        Ok(Self { conn })
    }

    pub(crate) fn conn(&mut self) -> &mut MySqlConnection {
        &mut self.conn
    }

    pub async fn health_check(&mut self) -> Result<bool> {
        let row = sqlx::query("SELECT 1 AS health")
            .fetch_one(&mut self.conn)
            .await?;

        Ok(row.get::<i64, _>("health") == 1)
    }

    /// Sends COM_QUIT and waits for the server to drop the session.
    pub async fn close(self) -> Result<()> {
        self.conn.close().await?;
        debug!("Database connection closed");
        Ok(())
    }
}

fn connect_options(config: &ServerConfig) -> MySqlConnectOptions {
    let options = MySqlConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user);

    if config.password.is_empty() {
        options
    } else {
        options.password(&config.password)
    }
}
