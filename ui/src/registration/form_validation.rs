use regex::Regex;
use std::sync::LazyLock;

use crate::registration::types::*;
use crate::services::errors::{RegistrationResult, ValidationError};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email regex is valid")
});

/// Controls that must be filled before a registration is accepted
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequiredField {
    Name,
    ControlNumber,
    Email,
    Career,
    Semester,
    Gender,
}

impl RequiredField {
    /// Presence checks run in this order; the first failure is reported
    pub const CHECK_ORDER: [RequiredField; 6] = [
        RequiredField::Name,
        RequiredField::ControlNumber,
        RequiredField::Email,
        RequiredField::Career,
        RequiredField::Semester,
        RequiredField::Gender,
    ];

    /// How the field is named in the "Campo Requerido" message
    pub fn description(&self) -> &'static str {
        match self {
            RequiredField::Name => "el Nombre Completo",
            RequiredField::ControlNumber => "el Número de Control",
            RequiredField::Email => "el Correo Electrónico",
            RequiredField::Career => "la Carrera",
            RequiredField::Semester => "el Semestre",
            RequiredField::Gender => "el Género",
        }
    }

    pub fn is_present(&self, form: &RegistrationForm) -> bool {
        match self {
            RequiredField::Name => form.name.is_present(),
            RequiredField::ControlNumber => form.control_number.is_present(),
            RequiredField::Email => form.email.is_present(),
            RequiredField::Career => form.career.is_present(),
            RequiredField::Semester => form.semester.is_present(),
            RequiredField::Gender => form.gender.is_present(),
        }
    }
}

/// First empty or unselected control, in check order
pub fn first_missing_field(form: &RegistrationForm) -> Option<RequiredField> {
    RequiredField::CHECK_ORDER
        .into_iter()
        .find(|field| !field.is_present(form))
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Validates the whole form: presence checks first, then the email format
pub fn validate_registration(form: &RegistrationForm) -> RegistrationResult<Registration> {
    if let Some(field) = first_missing_field(form) {
        return Err(ValidationError::MissingField(field));
    }

    if !is_valid_email(&form.email.value) {
        return Err(ValidationError::InvalidEmailFormat);
    }

    Ok(Registration {
        name: form.name.value.clone(),
        control_number: form.control_number.value.clone(),
        email: form.email.value.clone(),
        career: form
            .career
            .selected
            .clone()
            .ok_or(ValidationError::MissingField(RequiredField::Career))?,
        semester: form
            .semester
            .selected
            .clone()
            .ok_or(ValidationError::MissingField(RequiredField::Semester))?,
        gender: form
            .gender
            .selected
            .ok_or(ValidationError::MissingField(RequiredField::Gender))?,
    })
}

/// Next form and dialog for a validation outcome.
/// Failures keep every value; a success clears the form.
pub fn apply_outcome(
    form: &RegistrationForm,
    outcome: RegistrationResult<Registration>,
) -> (RegistrationForm, DialogState) {
    match outcome {
        Ok(registration) => {
            let mut next = form.clone();
            next.reset();
            (next, DialogState::success(&registration))
        }
        Err(error) => (form.clone(), DialogState::error(&error)),
    }
}

/// Pure submit handler: current form in, next form and dialog to show out
pub fn submit(form: &RegistrationForm) -> (RegistrationForm, DialogState) {
    apply_outcome(form, validate_registration(form))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> RegistrationForm {
        let mut form = RegistrationForm::default();
        form.name.value = "Juan Pérez".to_string();
        form.control_number.value = "20210001".to_string();
        form.email.value = "alumno@escuela.edu.mx".to_string();
        form.career.selected = Some("Ingeniería en Sistemas".to_string());
        form.semester.selected = Some("5".to_string());
        form.gender.selected = Some(Gender::Masculino);
        form
    }

    fn clear_field(form: &mut RegistrationForm, field: RequiredField) {
        match field {
            RequiredField::Name => form.name.clear(),
            RequiredField::ControlNumber => form.control_number.clear(),
            RequiredField::Email => form.email.clear(),
            RequiredField::Career => form.career.clear(),
            RequiredField::Semester => form.semester.clear(),
            RequiredField::Gender => form.gender.clear(),
        }
    }

    #[test]
    fn test_each_missing_field_is_named() {
        let expected = [
            (RequiredField::Name, "el Nombre Completo"),
            (RequiredField::ControlNumber, "el Número de Control"),
            (RequiredField::Email, "el Correo Electrónico"),
            (RequiredField::Career, "la Carrera"),
            (RequiredField::Semester, "el Semestre"),
            (RequiredField::Gender, "el Género"),
        ];

        for (field, description) in expected {
            let mut form = filled_form();
            clear_field(&mut form, field);

            let (next, dialog) = submit(&form);
            assert_eq!(next, form, "fields must be kept for {:?}", field);
            assert_eq!(
                dialog,
                DialogState::Error {
                    title: "⚠️ Campo Requerido".to_string(),
                    body: format!("Por favor, ingresa {} para continuar.", description),
                }
            );
        }
    }

    #[test]
    fn test_check_order_first_failure_wins() {
        let mut form = filled_form();
        clear_field(&mut form, RequiredField::Gender);
        clear_field(&mut form, RequiredField::Semester);
        assert_eq!(first_missing_field(&form), Some(RequiredField::Semester));

        clear_field(&mut form, RequiredField::Career);
        assert_eq!(first_missing_field(&form), Some(RequiredField::Career));

        clear_field(&mut form, RequiredField::ControlNumber);
        assert_eq!(first_missing_field(&form), Some(RequiredField::ControlNumber));

        clear_field(&mut form, RequiredField::Name);
        assert_eq!(first_missing_field(&form), Some(RequiredField::Name));

        assert_eq!(first_missing_field(&RegistrationForm::default()), Some(RequiredField::Name));
    }

    #[test]
    fn test_missing_field_reported_before_bad_email() {
        let mut form = filled_form();
        form.email.value = "not-an-email".to_string();
        clear_field(&mut form, RequiredField::Gender);

        assert_eq!(
            validate_registration(&form),
            Err(ValidationError::MissingField(RequiredField::Gender))
        );
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        let mut form = filled_form();
        form.name.value = " ".to_string();
        assert!(validate_registration(&form).is_ok());
    }

    #[test]
    fn test_invalid_emails_rejected() {
        for email in [
            "a@b",
            "abc@@x.com",
            "user@domain",
            "user@domain.c1",
            "a@b.c",
            "usuario@dominio.",
            "@dominio.com",
            "usuario dominio@x.com",
            "ñandú@dominio.com",
        ] {
            assert!(!is_valid_email(email), "{} should be rejected", email);

            let mut form = filled_form();
            form.email.value = email.to_string();
            let (next, dialog) = submit(&form);
            assert_eq!(next, form);
            assert_eq!(dialog, DialogState::error(&ValidationError::InvalidEmailFormat));
        }
    }

    #[test]
    fn test_valid_emails_accepted() {
        for email in [
            "a@b.co",
            "alumno@escuela.edu.mx",
            "first.last+tag@sub-domain.example.org",
            "USER_99%x@DOMINIO.COM",
        ] {
            assert!(is_valid_email(email), "{} should be accepted", email);
        }
    }

    #[test]
    fn test_trailing_newline_rejected() {
        assert!(!is_valid_email("a@b.co\n"));
    }

    #[test]
    fn test_successful_submit() {
        let form = filled_form();
        let (next, dialog) = submit(&form);

        assert!(next.is_blank());
        assert_eq!(next.career.options, form.career.options);

        let DialogState::Success { body } = dialog else {
            panic!("expected success dialog");
        };
        for value in [
            "Juan Pérez",
            "20210001",
            "alumno@escuela.edu.mx",
            "Ingeniería en Sistemas",
            "5",
            "masculino",
        ] {
            assert!(body.contains(value), "body should contain {}", value);
        }
        assert!(body.starts_with("👤 ALUMNO REGISTRADO:\nN.Control: 20210001\n"));
    }
}
