pub mod migration_printer;
pub mod db_initializer;

pub use migration_printer::*;
pub use db_initializer::*;
