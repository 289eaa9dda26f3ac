//! Infrastructure Services
//!
//! - **config**: Form configuration (theme and dropdown option sets)
//! - **errors**: Validation error types surfaced through the error dialog

pub mod config;
pub mod errors;
