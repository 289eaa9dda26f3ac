//! Student registration
//!
//! The registration form is a single reducer-driven state machine:
//!
//! - **types**: form controls, dialog state, actions and the reducer
//! - **form_validation**: ordered presence checks, the email pattern and the
//!   pure submit handler
//!
//! A submit either opens the error dialog naming the first problem (fields are
//! kept) or opens the modal success dialog and clears every control.

pub mod form_validation;
pub mod types;

pub use form_validation::*;
pub use types::*;
