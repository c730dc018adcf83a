//! Configuration validation rules.
//!
//! This module validates configuration for correctness:
//! - A destination name must be set
//! - Owner entries must not be blank
//! - Exactly one catalog location must be configured
//! - The catalog timeout must be positive

use crate::config::schema::ImagegateConfig;
use crate::error::{ImagegateError, Result};

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
///
/// This function collects all validation errors rather than stopping
/// at the first one, allowing users to fix multiple issues at once.
pub fn validate_config(config: &ImagegateConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.destination_name.trim().is_empty() {
        errors.push(ValidationError::new(
            "missing-destination-name",
            "'destination_name' must be set",
        ));
    }

    for (i, owner) in config.owners.iter().enumerate() {
        if owner.trim().is_empty() {
            errors.push(ValidationError::new(
                "blank-owner",
                format!("Owner #{} is blank", i + 1),
            ));
        }
    }

    // Force-overwrite runs never touch the catalog, so it may be left out.
    let catalog = &config.catalog;
    match (&catalog.file, &catalog.url) {
        (Some(_), Some(_)) => errors.push(ValidationError::new(
            "conflicting-catalog",
            "Set either 'catalog.file' or 'catalog.url', not both",
        )),
        (None, None) if !config.force_overwrite => errors.push(ValidationError::new(
            "missing-catalog",
            "One of 'catalog.file' or 'catalog.url' must be set",
        )),
        _ => {}
    }

    if catalog.timeout == 0 {
        errors.push(ValidationError::new(
            "invalid-timeout",
            "'catalog.timeout' must be greater than zero",
        ));
    }

    errors
}

/// Validate and return Result (for convenience).
///
/// # Errors
///
/// Returns `ConfigValidationError` if any validation rules fail.
pub fn validate(config: &ImagegateConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(ImagegateError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::CatalogConfig;
    use std::path::PathBuf;

    fn valid() -> ImagegateConfig {
        ImagegateConfig {
            destination_name: "web".into(),
            catalog: CatalogConfig {
                url: Some("http://localhost".into()),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn rules(config: &ImagegateConfig) -> Vec<String> {
        validate_config(config).into_iter().map(|e| e.rule).collect()
    }

    #[test]
    fn valid_config_passes() {
        assert!(validate(&valid()).is_ok());
    }

    #[test]
    fn missing_destination_name() {
        let mut config = valid();
        config.destination_name = "  ".into();
        assert_eq!(rules(&config), vec!["missing-destination-name"]);
    }

    #[test]
    fn blank_owner() {
        let mut config = valid();
        config.owners = vec!["111".into(), "".into()];
        let errors = validate_config(&config);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule, "blank-owner");
        assert!(errors[0].message.contains("#2"));
    }

    #[test]
    fn both_catalog_locations() {
        let mut config = valid();
        config.catalog.file = Some(PathBuf::from("catalog.yml"));
        assert_eq!(rules(&config), vec!["conflicting-catalog"]);
    }

    #[test]
    fn missing_catalog() {
        let mut config = valid();
        config.catalog.url = None;
        assert_eq!(rules(&config), vec!["missing-catalog"]);
    }

    #[test]
    fn force_overwrite_does_not_need_catalog() {
        let mut config = valid();
        config.catalog.url = None;
        config.force_overwrite = true;
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn zero_timeout() {
        let mut config = valid();
        config.catalog.timeout = 0;
        assert_eq!(rules(&config), vec!["invalid-timeout"]);
    }

    #[test]
    fn collects_all_errors() {
        let config = ImagegateConfig {
            owners: vec![" ".into()],
            ..Default::default()
        };
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("destination_name"));
        assert!(err.contains("Owner #1"));
        assert!(err.contains("catalog"));
    }
}
