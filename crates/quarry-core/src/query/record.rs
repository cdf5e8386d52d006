//! Query result record type.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{Error, InvalidInputError};

/// One row of a query result.
///
/// A record is a JSON object mapping field names to values. The fields are
/// not interpreted; they are passed through exactly as the server sent
/// them, in the server's field order.
///
/// # Example
///
/// ```
/// use quarry_core::Record;
/// use serde_json::json;
///
/// let record = Record::new(json!({"FirstName": "Ada", "LastName": "Lovelace"})).unwrap();
/// assert_eq!(record.get("LastName").unwrap(), "Lovelace");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Create a record from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a JSON object.
    pub fn new(value: Value) -> Result<Self, Error> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(InvalidInputError::Record {
                reason: format!("record must be a JSON object, got {}", kind(&other)),
            }
            .into()),
        }
    }

    /// Create a record from a field map.
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Get a field value.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Iterate over the fields.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get a reference to the field map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume and return the record as a JSON value.
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Record::new(value).map_err(serde::de::Error::custom)
    }
}
