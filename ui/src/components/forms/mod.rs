pub mod gender_selector;
pub mod option_selector;
pub mod registration_form;

pub use gender_selector::*;
pub use option_selector::*;
pub use registration_form::*;
