//! # HRIS Client
//!
//! HTTP adapter with bearer auth and single-retry token refresh, file-backed
//! token storage, and the entity services of the admin console.

pub mod api;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;

pub use api::{ApiClient, RequestOptions};
pub use error::ClientError;
pub use state::ClientState;
pub use storage::FileTokenStorage;
