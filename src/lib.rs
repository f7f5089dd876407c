//! Operator utilities for the POS database.

pub mod config;
pub mod telemetry;

pub use self::config::{AppConfig, PrinterConfig};
