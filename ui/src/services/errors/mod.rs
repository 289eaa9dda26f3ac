use thiserror::Error;

use crate::registration::RequiredField;

pub const MISSING_FIELD_TITLE: &str = "⚠️ Campo Requerido";
pub const INVALID_EMAIL_TITLE: &str = "❌ Correo Inválido";

/// Reasons a registration submit is rejected.
///
/// The `Display` output is the exact body shown in the error dialog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Por favor, ingresa {} para continuar.", .0.description())]
    MissingField(RequiredField),

    #[error("El formato del correo no es correcto. Ejemplo: usuario@dominio.com")]
    InvalidEmailFormat,
}

pub type RegistrationResult<T> = Result<T, ValidationError>;

impl ValidationError {
    /// Title of the error dialog for this failure
    pub fn title(&self) -> &'static str {
        match self {
            ValidationError::MissingField(_) => MISSING_FIELD_TITLE,
            ValidationError::InvalidEmailFormat => INVALID_EMAIL_TITLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        let error = ValidationError::MissingField(RequiredField::ControlNumber);
        assert_eq!(error.title(), "⚠️ Campo Requerido");
        assert_eq!(
            error.to_string(),
            "Por favor, ingresa el Número de Control para continuar."
        );
    }

    #[test]
    fn test_invalid_email_message() {
        let error = ValidationError::InvalidEmailFormat;
        assert_eq!(error.title(), "❌ Correo Inválido");
        assert_eq!(
            error.to_string(),
            "El formato del correo no es correcto. Ejemplo: usuario@dominio.com"
        );
    }
}
