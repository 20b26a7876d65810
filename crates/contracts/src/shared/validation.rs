//! Validation rules for user-entered fields

use serde::{Deserialize, Serialize};

/// Ошибка валидации поля
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamValidationError {
    pub field: String,
    pub message: String,
}

impl ParamValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn blank(field: impl Into<String>) -> Self {
        let field = field.into();
        let message = format!("{} не может быть пустым", field);
        Self::new(field, message)
    }
}

impl std::fmt::Display for ParamValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.field, self.message)
    }
}

impl std::error::Error for ParamValidationError {}

/// Validation rules for a text field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationRules {
    pub required: bool,
}

impl ValidationRules {
    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self { required: true }
    }

    /// Validate a string value against the rules.
    /// Whitespace-only input counts as blank.
    pub fn validate_string(&self, value: &str, field: &str) -> Result<(), ParamValidationError> {
        if self.required && value.trim().is_empty() {
            return Err(ParamValidationError::blank(field));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_blank() {
        let rules = ValidationRules::required();
        assert!(rules.validate_string("", "name").is_err());
        assert!(rules.validate_string("   \t\n", "name").is_err());
        assert!(rules.validate_string(" x ", "name").is_ok());
    }

    #[test]
    fn test_default_accepts_blank() {
        let rules = ValidationRules::default();
        assert!(rules.validate_string("", "value").is_ok());
    }

    #[test]
    fn test_error_display() {
        let err = ValidationRules::required()
            .validate_string(" ", "value")
            .unwrap_err();
        assert_eq!(err.field, "value");
        assert_eq!(err.to_string(), "[value] value не может быть пустым");
    }
}
