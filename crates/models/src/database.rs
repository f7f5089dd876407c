use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PosError, Result};

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 3306;
pub const DEFAULT_USER: &str = "root";
pub const DEFAULT_DATABASE: &str = "idcw9344_pos";
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// MySQL caps schema names at 64 characters.
pub const MAX_DATABASE_NAME_LEN: usize = 64;

/// Connection target for the database initializer.
///
/// Defaults mirror the local development server: `root@localhost:3306`
/// with an empty password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub connect_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            user: DEFAULT_USER.to_string(),
            password: String::new(),
            database: DEFAULT_DATABASE.to_string(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl ServerConfig {
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// `user@host:port`, safe to log.
    pub fn display_target(&self) -> String {
        format!("{}@{}", self.user, self.server_addr())
    }
}

/// A schema name that is safe to splice into a backtick-quoted identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DatabaseName(String);

impl DatabaseName {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let invalid = |reason| PosError::InvalidDatabaseName {
            name: name.clone(),
            reason,
        };

        if name.is_empty() {
            return Err(invalid("name is empty"));
        }
        if name.chars().count() > MAX_DATABASE_NAME_LEN {
            return Err(invalid("name is longer than 64 characters"));
        }
        if name.ends_with(' ') {
            return Err(invalid("name ends with a space"));
        }
        if name
            .chars()
            .any(|c| matches!(c, '`' | '\0' | '/' | '\\' | '.'))
        {
            return Err(invalid("name contains a character MySQL does not allow in schema names"));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DatabaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// End state reached by the database initializer: the database exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitOutcome {
    database: DatabaseName,
}

impl InitOutcome {
    pub fn new(database: DatabaseName) -> Self {
        Self { database }
    }

    pub fn database(&self) -> &DatabaseName {
        &self.database
    }
}

impl fmt::Display for InitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Database '{}' is ready.", self.database)
    }
}
