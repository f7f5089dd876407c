// Administrative SQL issued by the initializer

use pos_models::DatabaseName;

/// `DatabaseName` guarantees there is no backtick to escape.
pub fn create_database_sql(name: &DatabaseName) -> String {
    format!("CREATE DATABASE IF NOT EXISTS `{}`", name.as_str())
}
