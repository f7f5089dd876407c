use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PosError {
    #[error("Cannot read migration file {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Database connection or query failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Timed out after {seconds}s connecting to {addr}")]
    ConnectTimeout { addr: String, seconds: u64 },

    #[error("Invalid database name {name:?}: {reason}")]
    InvalidDatabaseName { name: String, reason: &'static str },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PosError {
    /// True for failures raised while talking to the database server.
    pub fn is_connection_or_query(&self) -> bool {
        matches!(self, Self::Database(_) | Self::ConnectTimeout { .. })
    }
}

pub type Result<T> = std::result::Result<T, PosError>;
