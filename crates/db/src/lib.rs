pub mod admin;
pub mod connection;
pub mod statements;

pub use admin::*;
pub use connection::*;
pub use statements::*;
