//! Request and response payloads for the entity endpoints

pub mod employee;
pub mod organization;
pub mod time_off;

pub use employee::*;
pub use organization::*;
pub use time_off::*;
