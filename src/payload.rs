use serde::Serialize;
use serde_json::{Map as JsonMap, Value as JsonValue};

use crate::ClientError;

/// JSON object body to send to the DNS Made Easy API.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Payload {
    payload: JsonMap<String, JsonValue>,
}

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a payload from anything that serializes to a JSON object.
    ///
    /// Values that serialize to something else end up under `"data"`.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self, ClientError> {
        Ok(match serde_json::to_value(value)? {
            JsonValue::Object(payload) => Self { payload },
            other => Self::new().add("data", other),
        })
    }

    /// Adds the given key-value pair.
    pub fn add<T: Into<JsonValue>>(mut self, key: &str, value: T) -> Self {
        self.payload.insert(key.to_string(), value.into());
        self
    }

    /// In the case that `value` is some, adds the key-value pair.
    pub fn add_if_some<T: Into<JsonValue>>(mut self, key: &str, value: Option<T>) -> Self {
        if let Some(value) = value {
            self.payload.insert(key.to_string(), value.into());
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.payload.get(key)
    }
}

impl From<Payload> for JsonValue {
    fn from(value: Payload) -> Self {
        JsonValue::Object(value.payload)
    }
}

impl From<Payload> for JsonMap<String, JsonValue> {
    fn from(value: Payload) -> Self {
        value.payload
    }
}

impl From<JsonMap<String, JsonValue>> for Payload {
    fn from(payload: JsonMap<String, JsonValue>) -> Self {
        Self { payload }
    }
}
