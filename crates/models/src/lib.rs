pub mod database;
pub mod migration;
pub mod error;

pub use database::*;
pub use migration::*;
pub use error::*;
