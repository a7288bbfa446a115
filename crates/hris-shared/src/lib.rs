//! # HRIS Shared
//!
//! Configuration, telemetry, constants and small helpers shared by the HRIS client crates.

pub mod config;
pub mod constants;
pub mod error;
pub mod telemetry;
pub mod types;
pub mod utils;

pub use config::{ApiSettings, ClientConfig, LogSettings, StorageSettings};
pub use error::AppError;
pub use types::*;
