// Creates the POS database if it is missing

use pos_db::{DatabaseConnection, SchemaAdmin};
use pos_models::{DatabaseName, InitOutcome, Result, ServerConfig};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct DatabaseInitializer {
    config: ServerConfig,
    database: DatabaseName,
}

impl DatabaseInitializer {
    /// Fails on an invalid database name before any connection is attempted.
    pub fn new(config: ServerConfig) -> Result<Self> {
        let database = DatabaseName::new(config.database.clone())?;
        Ok(Self { config, database })
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn database(&self) -> &DatabaseName {
        &self.database
    }

    pub async fn run(&self) -> Result<InitOutcome> {
        let conn = DatabaseConnection::connect(&self.config).await?;
        self.run_with(conn).await
    }

    /// Runs against an open session and closes it whatever the outcome.
    ///
    /// A close failure is only logged: the statement result decides what the
    /// caller sees.
    pub async fn run_with<A: SchemaAdmin>(&self, mut admin: A) -> Result<InitOutcome> {
        let outcome = self.ensure_database(&mut admin).await;

        if let Err(e) = admin.close().await {
            warn!("Failed to close database connection: {}", e);
        }

        outcome
    }

    async fn ensure_database<A: SchemaAdmin>(&self, admin: &mut A) -> Result<InitOutcome> {
        admin.create_database(&self.database).await?;
        info!(
            "Database {} is ready on {}",
            self.database,
            self.config.server_addr()
        );
        Ok(InitOutcome::new(self.database.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pos_models::PosError;

    #[derive(Default)]
    struct RecordingAdmin {
        fail_create: bool,
        statements: Vec<String>,
    }

    impl SchemaAdmin for &mut RecordingAdmin {
        async fn create_database(&mut self, name: &DatabaseName) -> Result<()> {
            self.statements.push(format!("create {name}"));
            if self.fail_create {
                return Err(PosError::Database(sqlx::Error::Protocol(
                    "Access denied for user 'root'@'localhost'".into(),
                )));
            }
            Ok(())
        }

        async fn close(self) -> Result<()> {
            self.statements.push("close".to_string());
            Ok(())
        }
    }

    #[test]
    fn test_invalid_name_rejected_up_front() {
        let config = ServerConfig {
            database: "bad`name".to_string(),
            ..ServerConfig::default()
        };
        assert!(matches!(
            DatabaseInitializer::new(config),
            Err(PosError::InvalidDatabaseName { .. })
        ));
    }

    #[tokio::test]
    async fn test_issues_only_the_create_statement_then_closes() {
        let initializer = DatabaseInitializer::new(ServerConfig::default()).unwrap();
        let mut admin = RecordingAdmin::default();

        let outcome = initializer.run_with(&mut admin).await.unwrap();

        assert_eq!(outcome.to_string(), "Database 'idcw9344_pos' is ready.");
        assert_eq!(admin.statements, vec!["create idcw9344_pos", "close"]);
    }

    #[tokio::test]
    async fn test_failed_statement_still_closes() {
        let initializer = DatabaseInitializer::new(ServerConfig::default()).unwrap();
        let mut admin = RecordingAdmin {
            fail_create: true,
            ..RecordingAdmin::default()
        };

        let err = initializer.run_with(&mut admin).await.unwrap_err();

        assert!(err.is_connection_or_query());
        assert!(err.to_string().contains("Access denied"));
        assert_eq!(admin.statements, vec!["create idcw9344_pos", "close"]);
    }
}
