//! Free-form structured context attached to logs and metrics

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::DomainError;

/// A JSON object. Scalars and arrays are rejected so consumers can always
/// address context entries by key.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct JsonObject(Map<String, Value>);

impl JsonObject {
    pub fn new(value: Value) -> Result<Self, DomainError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(DomainError::invalid_field(format!(
                "context must be a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl TryFrom<Value> for JsonObject {
    type Error = DomainError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<JsonObject> for Value {
    fn from(value: JsonObject) -> Self {
        Value::Object(value.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use serde_json::json;

    #[test]
    fn test_accepts_objects() {
        let ctx = JsonObject::new(json!({ "zone": 1 })).unwrap();
        assert_eq!(ctx.get("zone"), Some(&json!(1)));
        assert_eq!(ctx.to_value(), json!({ "zone": 1 }));
    }

    #[test]
    fn test_rejects_non_objects() {
        for value in [json!(null), json!([1, 2]), json!("text"), json!(3)] {
            let err = JsonObject::new(value).unwrap_err();
            assert_eq!(err.code(), ErrorCode::InvalidField);
        }
    }
}
