//! Configuration validation rules.
//!
//! - Interpreter and installer commands must be non-blank
//! - At least one package must be listed
//! - Package names must be non-blank and unique

use crate::config::schema::BootstrapConfig;
use crate::error::{BootstrapError, Result};
use std::collections::HashSet;

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: impl Into<String>) -> Self {
        Self {
            rule: rule.to_string(),
            message: message.into(),
        }
    }
}

/// Validate a configuration and return all errors.
pub fn validate_config(config: &BootstrapConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.interpreter.command.trim().is_empty() {
        errors.push(ValidationError::new(
            "blank-interpreter",
            "interpreter.command must not be empty",
        ));
    }

    if config.installer.command.trim().is_empty() {
        errors.push(ValidationError::new(
            "blank-installer",
            "installer.command must not be empty",
        ));
    }

    errors.extend(validate_packages(config));

    errors
}

fn validate_packages(config: &BootstrapConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.packages.is_empty() {
        errors.push(ValidationError::new(
            "no-packages",
            "packages must list at least one package",
        ));
    }

    let mut seen = HashSet::new();
    for (index, package) in config.packages.iter().enumerate() {
        let name = package.name.trim();
        if name.is_empty() {
            errors.push(ValidationError::new(
                "blank-package",
                format!("packages[{}] has an empty name", index),
            ));
        } else if !seen.insert(name.to_lowercase()) {
            errors.push(ValidationError::new(
                "duplicate-package",
                format!("Package '{}' is listed more than once", name),
            ));
        }
    }

    errors
}

/// Validate and return Result (for convenience).
///
/// # Errors
///
/// Returns `ConfigValidationError` if any validation rules fail.
pub fn validate(config: &BootstrapConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(BootstrapError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::PackageSpec;

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&BootstrapConfig::default()).is_ok());
    }

    #[test]
    fn blank_interpreter_is_rejected() {
        let mut config = BootstrapConfig::default();
        config.interpreter.command = "  ".to_string();

        let errors = validate_config(&config);
        assert!(errors.iter().any(|e| e.rule == "blank-interpreter"));
    }

    #[test]
    fn blank_installer_is_rejected() {
        let mut config = BootstrapConfig::default();
        config.installer.command = String::new();

        let errors = validate_config(&config);
        assert!(errors.iter().any(|e| e.rule == "blank-installer"));
    }

    #[test]
    fn empty_package_list_is_rejected() {
        let mut config = BootstrapConfig::default();
        config.packages.clear();

        let errors = validate_config(&config);
        assert!(errors.iter().any(|e| e.rule == "no-packages"));
    }

    #[test]
    fn duplicate_packages_are_rejected_case_insensitively() {
        let mut config = BootstrapConfig::default();
        config.packages.push(PackageSpec::new("PySerial"));

        let errors = validate_config(&config);
        assert!(errors.iter().any(|e| e.rule == "duplicate-package"));
    }

    #[test]
    fn blank_package_name_is_rejected() {
        let mut config = BootstrapConfig::default();
        config.packages.push(PackageSpec::new(""));

        let errors = validate_config(&config);
        assert!(errors.iter().any(|e| e.rule == "blank-package"));
    }

    #[test]
    fn validate_joins_all_messages() {
        let mut config = BootstrapConfig::default();
        config.interpreter.command = String::new();
        config.packages.clear();

        let err = validate(&config).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("interpreter.command"));
        assert!(msg.contains("at least one package"));
    }
}
