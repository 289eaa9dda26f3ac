//! This crate contains the student registration form: its state, validation
//! and the Dioxus components that render it.

pub mod app;
pub use app::RegistrationPage;

pub mod components;
pub mod registration;
pub mod services;
pub mod utils;
