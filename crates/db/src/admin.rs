// Server-level administration used by the initializer

use pos_models::{DatabaseName, Result};
use sqlx::Executor;
use tracing::debug;

use crate::connection::DatabaseConnection;
use crate::statements::create_database_sql;

/// Operations the initializer needs from a server session.
///
/// `close` consumes the session so nothing can run on it afterwards.
#[allow(async_fn_in_trait)]
pub trait SchemaAdmin {
    async fn create_database(&mut self, name: &DatabaseName) -> Result<()>;
    async fn close(self) -> Result<()>;
}

impl SchemaAdmin for DatabaseConnection {
    async fn create_database(&mut self, name: &DatabaseName) -> Result<()> {
        let sql = create_database_sql(name);
        // Plain text protocol: DDL does not need a prepared statement
        let result = self.conn().execute(sql.as_str()).await?;
        debug!(rows_affected = result.rows_affected(), "{}", sql);
        Ok(())
    }

    async fn close(self) -> Result<()> {
        DatabaseConnection::close(self).await
    }
}
