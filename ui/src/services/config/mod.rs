//! Form configuration
//!
//! Page theme and the fixed option sets for the career and semester dropdowns.
//! There is no external source; the defaults are the registration form as shipped.

use std::collections::HashSet;
use std::sync::OnceLock;

use crate::console_warn;

pub const CAREER_OPTIONS: [&str; 5] = [
    "Ingeniería en Sistemas",
    "Ingeniería Civil",
    "Ingeniería Industrial",
    "Ingeniería Gestion Empresarial",
    "Ingeniería Electronica",
];

pub const SEMESTER_COUNT: u8 = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct FormConfig {
    /// Page title and colours
    pub page: PageConfig,

    /// Ordered options for the career dropdown
    pub career_options: Vec<String>,

    /// Ordered options for the semester dropdown
    pub semester_options: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub title: String,
    pub background_color: String,
    /// Border colour shared by the text inputs and dropdowns
    pub border_color: String,
    pub padding_px: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Registro de Estudiantes - Tópicos Avanzados".to_string(),
            background_color: "#FDFBE3".to_string(),
            border_color: "#4D2A32".to_string(),
            padding_px: 30,
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            page: PageConfig::default(),
            career_options: CAREER_OPTIONS.iter().map(|c| c.to_string()).collect(),
            semester_options: (1..=SEMESTER_COUNT).map(|s| s.to_string()).collect(),
        }
    }
}

impl FormConfig {
    /// Validate the configuration, collecting every problem found
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.page.title.trim().is_empty() {
            errors.push("Page title must not be empty".to_string());
        }

        for (name, options) in [
            ("career_options", &self.career_options),
            ("semester_options", &self.semester_options),
        ] {
            if options.is_empty() {
                errors.push(format!("{} must contain at least one option", name));
            }

            if options.iter().any(|o| o.is_empty()) {
                errors.push(format!("{} must not contain empty options", name));
            }

            let unique: HashSet<&String> = options.iter().collect();
            if unique.len() != options.len() {
                errors.push(format!("{} must not contain duplicate options", name));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

static GLOBAL_CONFIG: OnceLock<FormConfig> = OnceLock::new();

/// Get the global configuration, falling back to defaults when invalid
pub fn get_global_config() -> FormConfig {
    GLOBAL_CONFIG
        .get_or_init(|| {
            let config = FormConfig::default();
            // Defaults always validate; the fallback guards config sources added later
            if let Err(errors) = config.validate() {
                console_warn!("Invalid configuration: {}", errors.join("; "));
                FormConfig::default()
            } else {
                config
            }
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        let config = FormConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_option_sets() {
        let config = FormConfig::default();
        assert_eq!(config.career_options.len(), 5);
        assert_eq!(config.career_options[0], "Ingeniería en Sistemas");
        assert_eq!(config.career_options[4], "Ingeniería Electronica");
        assert_eq!(
            config.semester_options,
            vec!["1", "2", "3", "4", "5", "6", "7", "8"]
        );
    }

    #[test]
    fn test_invalid_config() {
        let mut config = FormConfig::default();
        config.career_options.clear();
        config.semester_options.push("8".to_string());
        config.page.title = "  ".to_string();

        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_global_config_is_default() {
        assert_eq!(get_global_config(), FormConfig::default());
    }
}
