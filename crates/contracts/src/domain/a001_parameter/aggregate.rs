use serde::{Deserialize, Serialize};

use crate::shared::validation::{ParamValidationError, ValidationRules};

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор параметра. Выдаётся по возрастанию, начиная с 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamId(pub u64);

impl ParamId {
    pub const FIRST: ParamId = ParamId(1);

    /// Saturates at `u64::MAX`; seeded ids are expected to stay below it.
    pub fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl std::fmt::Display for ParamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Id that follows the largest id in `params`, or [`ParamId::FIRST`] for an empty slice.
pub fn next_free_id(params: &[Parameter]) -> ParamId {
    params
        .iter()
        .map(|p| p.id)
        .max()
        .map(|id| id.next())
        .unwrap_or(ParamId::FIRST)
}

// ============================================================================
// Parameter
// ============================================================================

/// Пара имя/значение, заведённая пользователем
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub id: ParamId,
    pub name: String,
    pub value: String,
}

impl Parameter {
    pub fn new(id: ParamId, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Черновик параметра из формы добавления (ещё без id)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewParameter {
    pub name: String,
    pub value: String,
}

impl NewParameter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Both fields must contain something other than whitespace.
    pub fn validate(&self) -> Result<(), ParamValidationError> {
        let rules = ValidationRules::required();
        rules.validate_string(&self.name, "name")?;
        rules.validate_string(&self.value, "value")?;
        Ok(())
    }

    /// Name and value are kept exactly as typed.
    pub fn into_parameter(self, id: ParamId) -> Parameter {
        Parameter {
            id,
            name: self.name,
            value: self.value,
        }
    }
}

// ============================================================================
// Snapshot
// ============================================================================

/// Снимок текущего набора параметров для хост-приложения
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamModel {
    pub params: Vec<Parameter>,
}

impl ParamModel {
    pub fn new(params: Vec<Parameter>) -> Self {
        Self { params }
    }

    /// Compact JSON rendering used for the developer trace.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.params).unwrap_or_else(|e| format!("<{}>", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_free_id_empty() {
        assert_eq!(next_free_id(&[]), ParamId::FIRST);
    }

    #[test]
    fn test_next_free_id_uses_max_not_len() {
        let params = vec![
            Parameter::new(ParamId(9), "b", "2"),
            Parameter::new(ParamId(4), "a", "1"),
        ];
        assert_eq!(next_free_id(&params), ParamId(10));
    }

    #[test]
    fn test_next_saturates_at_max() {
        assert_eq!(ParamId(1).next(), ParamId(2));
        assert_eq!(ParamId(u64::MAX).next(), ParamId(u64::MAX));
        let params = vec![Parameter::new(ParamId(u64::MAX), "a", "1")];
        assert_eq!(next_free_id(&params), ParamId(u64::MAX));
    }

    #[test]
    fn test_validate_blank_fields() {
        assert!(NewParameter::new("timeout", "30").validate().is_ok());

        let err = NewParameter::new("  ", "30").validate().unwrap_err();
        assert_eq!(err.field, "name");

        let err = NewParameter::new("timeout", "").validate().unwrap_err();
        assert_eq!(err.field, "value");

        assert!(NewParameter::new("", " ").validate().is_err());
    }

    #[test]
    fn test_into_parameter_keeps_whitespace() {
        let p = NewParameter::new(" timeout ", "30 ").into_parameter(ParamId(3));
        assert_eq!(p, Parameter::new(ParamId(3), " timeout ", "30 "));
    }

    #[test]
    fn test_model_json() {
        let model = ParamModel::new(vec![Parameter::new(ParamId(1), "timeout", "30")]);
        assert_eq!(
            model.to_json(),
            r#"[{"id":1,"name":"timeout","value":"30"}]"#
        );
        assert_eq!(ParamModel::default().to_json(), "[]");
    }
}
