//! User Interface Components
//!
//! This module contains the Dioxus components for the registration page:
//!
//! - **forms**: The registration form and its dropdown and radio controls
//! - **display**: The alert dialog used for both error and success feedback
//! - **inputs**: Labelled text inputs

pub mod display;
pub mod forms;
pub mod inputs;
