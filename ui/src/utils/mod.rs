//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: Browser console logging macros, routed to `tracing` off-wasm

pub mod console_macros;
