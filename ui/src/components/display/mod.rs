pub mod alert_dialog;

pub use alert_dialog::*;
