//! Event payload

use super::EventName;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// An event and the data that came with it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlimeshEvent {
    pub name: EventName,
    /// Reference of the request this event answers, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    pub data: Value,
}

impl GlimeshEvent {
    #[must_use]
    pub fn new(name: EventName, data: Value) -> Self {
        Self {
            name,
            reference: None,
            data,
        }
    }

    /// Attach the reference of the request being answered
    #[must_use]
    pub fn with_reference(mut self, reference: Option<String>) -> Self {
        self.reference = reference;
        self
    }

    #[must_use]
    pub fn connected() -> Self {
        Self::new(EventName::Connected, Value::Bool(true))
    }

    /// Socket close event
    #[must_use]
    pub fn close(was_clean: bool, code: Option<u16>) -> Self {
        Self::new(
            EventName::Close,
            serde_json::json!({ "wasClean": was_clean, "code": code }),
        )
    }

    #[must_use]
    pub fn error(data: Value) -> Self {
        Self::new(EventName::Error, data)
    }

    #[must_use]
    pub fn unknown(data: Value) -> Self {
        Self::new(EventName::Unknown, data)
    }

    /// Deserialize the data into a typed value
    pub fn data_as<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(&self.data)
    }

    /// Deserialize one field of the data object, e.g. `chatMessage`
    pub fn field_as<T: DeserializeOwned>(&self, field: &str) -> Result<T, serde_json::Error> {
        T::deserialize(self.data.get(field).unwrap_or(&Value::Null))
    }
}

impl std::fmt::Display for GlimeshEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.reference {
            Some(reference) => write!(f, "{}(ref={reference})", self.name),
            None => write!(f, "{}", self.name),
        }
    }
}
