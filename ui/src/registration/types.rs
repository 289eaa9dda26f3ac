// Core types for the registration form - no dioxus imports needed here
use serde::Serialize;
use std::fmt;

use crate::registration::form_validation::{apply_outcome, validate_registration};
use crate::services::config::FormConfig;
use crate::services::errors::ValidationError;
use crate::{console_debug, console_info, console_warn};

/// Labelled single-line text control
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextField {
    pub label: String,
    pub value: String,
}

impl TextField {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            value: String::new(),
        }
    }

    /// Empty string is the only missing value; whitespace counts as input
    pub fn is_present(&self) -> bool {
        !self.value.is_empty()
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }
}

/// Dropdown with a fixed, ordered option list
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionField {
    pub label: String,
    pub options: Vec<String>,
    pub selected: Option<String>,
}

impl SelectionField {
    pub fn new(label: &str, options: Vec<String>) -> Self {
        Self {
            label: label.to_string(),
            options,
            selected: None,
        }
    }

    /// Select an option, or clear the selection with `None` / the empty placeholder.
    /// Returns false and leaves the selection untouched for unknown options.
    pub fn select(&mut self, value: Option<String>) -> bool {
        match value {
            None => {
                self.selected = None;
                true
            }
            Some(value) if value.is_empty() => {
                self.selected = None;
                true
            }
            Some(value) if self.options.contains(&value) => {
                self.selected = Some(value);
                true
            }
            Some(_) => false,
        }
    }

    pub fn is_present(&self) -> bool {
        self.selected.is_some()
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Masculino,
    Femenino,
    Otro,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Masculino, Gender::Femenino, Gender::Otro];

    /// Value submitted with the form
    pub fn value(&self) -> &'static str {
        match self {
            Gender::Masculino => "masculino",
            Gender::Femenino => "femenino",
            Gender::Otro => "otro",
        }
    }

    /// Label shown next to the radio button
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Masculino => "Masculino",
            Gender::Femenino => "Femenino",
            Gender::Otro => "Otro",
        }
    }

    /// Parses the value carried by a checked radio input
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.value() == value)
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

/// Radio group of mutually exclusive options
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceGroup {
    pub label: String,
    pub selected: Option<Gender>,
}

impl ChoiceGroup {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            selected: None,
        }
    }

    pub fn is_present(&self) -> bool {
        self.selected.is_some()
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: TextField,
    pub control_number: TextField,
    pub email: TextField,
    pub career: SelectionField,
    pub semester: SelectionField,
    pub gender: ChoiceGroup,
}

impl RegistrationForm {
    pub fn new(config: &FormConfig) -> Self {
        Self {
            name: TextField::new("Nombre"),
            control_number: TextField::new("Numero de control"),
            email: TextField::new("Email"),
            career: SelectionField::new("Carrera", config.career_options.clone()),
            semester: SelectionField::new("Semestre", config.semester_options.clone()),
            gender: ChoiceGroup::new("Género"),
        }
    }

    /// Return every control to its empty/unselected state
    pub fn reset(&mut self) {
        self.name.clear();
        self.control_number.clear();
        self.email.clear();
        self.career.clear();
        self.semester.clear();
        self.gender.clear();
    }

    pub fn is_blank(&self) -> bool {
        !self.name.is_present()
            && !self.control_number.is_present()
            && !self.email.is_present()
            && !self.career.is_present()
            && !self.semester.is_present()
            && !self.gender.is_present()
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new(&FormConfig::default())
    }
}

/// A validated submission. Built only to render the confirmation, never stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub name: String,
    pub control_number: String,
    pub email: String,
    pub career: String,
    pub semester: String,
    pub gender: Gender,
}

impl fmt::Display for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "👤 ALUMNO REGISTRADO:\nN.Control: {}\nNombre: {}\nCorreo: {}\nCarrera: {}\nSemestre: {}\nGenero: {}",
            self.control_number, self.name, self.email, self.career, self.semester, self.gender
        )
    }
}

/// Which dialog is visible. Only one can be open at a time.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Closed,
    /// Reusable error dialog; title and body are replaced on every failed submit
    Error { title: String, body: String },
    /// Modal confirmation built from the submitted registration
    Success { body: String },
}

impl DialogState {
    pub fn error(error: &ValidationError) -> Self {
        DialogState::Error {
            title: error.title().to_string(),
            body: error.to_string(),
        }
    }

    pub fn success(registration: &Registration) -> Self {
        DialogState::Success {
            body: registration.to_string(),
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, DialogState::Closed)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, DialogState::Error { .. })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, DialogState::Success { .. })
    }
}

// Action enum for state mutations
#[derive(Clone, Debug, PartialEq)]
pub enum RegistrationAction {
    SetName(String),
    SetControlNumber(String),
    SetEmail(String),
    SelectCareer(Option<String>),
    SelectSemester(Option<String>),
    SelectGender(Option<Gender>),
    Submit,
    DismissError,
    DismissSuccess,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct RegistrationState {
    pub form: RegistrationForm,
    pub dialog: DialogState,
}

impl RegistrationState {
    pub fn new(config: &FormConfig) -> Self {
        Self {
            form: RegistrationForm::new(config),
            dialog: DialogState::Closed,
        }
    }

    /// Reduces the state based on an action
    pub fn reduce(mut self, action: RegistrationAction) -> Self {
        self.reduce_in_place(action);
        self
    }

    /// Reduces the state based on an action in-place (preserves Dioxus Signal reactivity)
    pub fn reduce_in_place(&mut self, action: RegistrationAction) {
        // The success dialog is modal: only its acknowledgement gets through
        if self.dialog.is_success() && action != RegistrationAction::DismissSuccess {
            console_debug!("[FORM] Ignoring {:?} while the success dialog is open", action);
            return;
        }

        match action {
            RegistrationAction::SetName(name) => {
                self.form.name.value = name;
            }
            RegistrationAction::SetControlNumber(control_number) => {
                self.form.control_number.value = control_number;
            }
            RegistrationAction::SetEmail(email) => {
                self.form.email.value = email;
            }
            RegistrationAction::SelectCareer(career) => {
                if !self.form.career.select(career.clone()) {
                    console_warn!("[FORM] Ignoring unknown career option {:?}", career);
                }
            }
            RegistrationAction::SelectSemester(semester) => {
                if !self.form.semester.select(semester.clone()) {
                    console_warn!("[FORM] Ignoring unknown semester option {:?}", semester);
                }
            }
            RegistrationAction::SelectGender(gender) => {
                self.form.gender.selected = gender;
            }
            RegistrationAction::Submit => {
                let outcome = validate_registration(&self.form);
                match &outcome {
                    Ok(registration) => {
                        console_info!(
                            "[FORM] Registration accepted for control number {}",
                            registration.control_number
                        );
                        if let Ok(json) = serde_json::to_string(registration) {
                            console_debug!("[FORM] Registration: {}", json);
                        }
                    }
                    Err(ValidationError::MissingField(field)) => {
                        console_info!("[FORM] Submit rejected: missing {:?}", field);
                    }
                    Err(ValidationError::InvalidEmailFormat) => {
                        console_info!("[FORM] Submit rejected: invalid email format");
                    }
                }

                let (form, dialog) = apply_outcome(&self.form, outcome);
                self.form = form;
                self.dialog = dialog;
            }
            RegistrationAction::DismissError => {
                if self.dialog.is_error() {
                    console_debug!("[FORM] Error dialog dismissed");
                    self.dialog = DialogState::Closed;
                }
            }
            RegistrationAction::DismissSuccess => {
                if self.dialog.is_success() {
                    console_debug!("[FORM] Success dialog dismissed");
                    self.dialog = DialogState::Closed;
                }
            }
        }
    }
}
