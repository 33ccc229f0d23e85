//! Invocation event and context types

use crate::error::HandlerError;
use serde::{Deserialize, Serialize};

/// The payload a trigger delivers to a handler.
///
/// The shape is trigger-defined, so the event is kept as raw JSON and a
/// handler pulls a typed view out of it when it needs one. Handlers that do
/// not consume input simply ignore it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Event(serde_json::Value);

impl Event {
    /// Wrap a JSON value as an invocation event.
    pub fn new(payload: serde_json::Value) -> Self {
        Self(payload)
    }

    /// The raw JSON payload.
    pub fn payload(&self) -> &serde_json::Value {
        &self.0
    }

    /// True when the trigger supplied no payload.
    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }

    /// Deserialize the payload into a typed struct.
    ///
    /// # Example
    /// ```ignore
    /// #[derive(Deserialize)]
    /// struct Greeting { name: String }
    ///
    /// let greeting: Greeting = event.json()?;
    /// ```
    pub fn json<T: for<'de> Deserialize<'de>>(&self) -> Result<T, HandlerError> {
        serde_json::from_value(self.0.clone())
            .map_err(|e| HandlerError::BadRequest(format!("Invalid event payload: {}", e)))
    }
}

/// Metadata about a single invocation, supplied by the host.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Context {
    /// Request ID for tracing
    #[serde(default)]
    pub request_id: String,

    /// Name the function was deployed under
    #[serde(default)]
    pub function_name: String,
}

/// One inbound frame on the wire: the event plus its context.
///
/// Both fields default when absent, so a bare `{}` frame is a valid
/// invocation with a null event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Invocation {
    #[serde(default)]
    pub event: Event,

    #[serde(default)]
    pub context: Context,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_frame_is_a_valid_invocation() {
        let inv: Invocation = serde_json::from_str("{}").unwrap();
        assert!(inv.event.is_null());
        assert!(inv.context.request_id.is_empty());
        assert!(inv.context.function_name.is_empty());
    }

    #[test]
    fn event_payload_round_trips_through_typed_view() {
        #[derive(Deserialize)]
        struct Payload {
            name: String,
        }

        let event = Event::new(json!({"name": "test"}));
        let payload: Payload = event.json().unwrap();
        assert_eq!(payload.name, "test");
    }

    #[test]
    fn typed_view_of_mismatched_payload_is_bad_request() {
        #[derive(Debug, Deserialize)]
        struct Payload {
            #[allow(dead_code)]
            count: i64,
        }

        let event = Event::new(json!({"count": "not a number"}));
        let err = event.json::<Payload>().unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn invocation_carries_context_fields() {
        let inv: Invocation = serde_json::from_value(json!({
            "event": {"key": "value"},
            "context": {"request_id": "req-1", "function_name": "hello"}
        }))
        .unwrap();
        assert!(!inv.event.is_null());
        assert_eq!(inv.context.request_id, "req-1");
        assert_eq!(inv.context.function_name, "hello");
    }
}
