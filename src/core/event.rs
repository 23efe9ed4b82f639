//! Event values submitted to the interpreter.
//!
//! An event is an identifier plus an arbitrary payload. The interpreter never
//! inspects the payload; it forwards the event verbatim to the transition
//! engine and to every action factory invoked for it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier of the reserved initialization event sent by
/// [`Interpreter::start`](crate::Interpreter::start).
///
/// Distinct from any domain event identifier a caller is expected to use.
pub const INIT_EVENT: &str = "statefold.init";

/// An event submitted to the interpreter.
///
/// Events come in two surface shapes: a bare identifier, or a compound value
/// carrying the identifier plus arbitrary payload fields. Both are the same
/// type here; a bare event simply has an empty payload.
///
/// Serializes as `{"type": <identifier>, ...payload}`.
///
/// # Example
///
/// ```rust
/// use statefold::Event;
///
/// let bare = Event::new("TIMER");
/// assert_eq!(bare.name(), "TIMER");
/// assert!(bare.payload().is_empty());
///
/// let compound = Event::new("CLOSE").with("overrideAdmin", true);
/// assert_eq!(compound.field("overrideAdmin").and_then(|v| v.as_bool()), Some(true));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    name: String,
    #[serde(flatten)]
    payload: Map<String, Value>,
}

impl Event {
    /// Create a bare event from its identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            payload: Map::new(),
        }
    }

    /// Attach a payload field, turning the event into its compound shape.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.payload.insert(field.into(), value.into());
        self
    }

    /// The reserved initialization event.
    pub fn init() -> Self {
        Self::new(INIT_EVENT)
    }

    /// Check whether this is the reserved initialization event.
    pub fn is_init(&self) -> bool {
        self.name == INIT_EVENT
    }

    /// The event identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The payload fields, empty for a bare event.
    pub fn payload(&self) -> &Map<String, Value> {
        &self.payload
    }

    /// Look up a single payload field.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.payload.get(key)
    }
}

impl From<&str> for Event {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Event {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_event_has_empty_payload() {
        let event = Event::new("TIMER");
        assert_eq!(event.name(), "TIMER");
        assert!(event.payload().is_empty());
        assert!(event.field("anything").is_none());
    }

    #[test]
    fn compound_event_carries_payload_fields() {
        let event = Event::new("CLOSE").with("overrideAdmin", true).with("attempt", 2);
        assert_eq!(event.name(), "CLOSE");
        assert_eq!(event.field("overrideAdmin"), Some(&json!(true)));
        assert_eq!(event.field("attempt"), Some(&json!(2)));
    }

    #[test]
    fn init_event_is_reserved() {
        let event = Event::init();
        assert!(event.is_init());
        assert_eq!(event.name(), INIT_EVENT);
        assert!(!Event::new("TIMER").is_init());
    }

    #[test]
    fn event_converts_from_identifier() {
        let event: Event = "OPEN".into();
        assert_eq!(event, Event::new("OPEN"));
    }

    #[test]
    fn event_serializes_with_flattened_payload() {
        let event = Event::new("CLOSE").with("overrideAdmin", true);
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value, json!({"type": "CLOSE", "overrideAdmin": true}));
    }

    #[test]
    fn event_roundtrips_through_serde() {
        let event = Event::new("CLOSE").with("overrideAdmin", true);
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }

    #[test]
    fn bare_event_deserializes_from_type_only() {
        let event: Event = serde_json::from_value(json!({"type": "OPEN"})).unwrap();
        assert_eq!(event, Event::new("OPEN"));
    }
}
