//! # HRIS Core
//!
//! Domain types, ports, observable stores and the client-side services:
//! navigation tree processing, session lifecycle and the shortcut dispatcher.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
pub mod store;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
pub use store::Store;
