//! Notification wire messages
//!
//! Defines the JSON messages the server pushes to room members. The channel
//! is send-only from the server's perspective: there is no client message
//! type, and any inbound payload is answered with an error broadcast.

use serde::Serialize;
use std::collections::HashMap;

/// Reason broadcast when a client sends anything into the room
pub const RECEIVE_NOT_SUPPORTED: &str = "You cannot send anything to this room!";

/// Messages sent from server to room members
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Something happened worth telling every member about
    Notification {
        /// Human-readable description
        text: String,
        /// Event metadata (e.g. `quote_id`), flattened into the payload
        #[serde(flatten)]
        extra: HashMap<String, String>,
    },
    /// Protocol policy response
    Error {
        /// Why the server rejected whatever triggered this
        reason: String,
    },
}

impl ServerMessage {
    /// Build a notification event
    pub fn notification(text: impl Into<String>, extra: HashMap<String, String>) -> Self {
        ServerMessage::Notification {
            text: text.into(),
            extra,
        }
    }

    /// Build an error event
    pub fn error(reason: impl Into<String>) -> Self {
        ServerMessage::Error {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_serialize() {
        let mut extra = HashMap::new();
        extra.insert("quote_id".to_string(), "abc-123".to_string());

        let msg = ServerMessage::notification("Created new quote", extra);
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"type\":\"notification\""));
        assert!(json.contains("\"text\":\"Created new quote\""));
        assert!(json.contains("\"quote_id\":\"abc-123\""));
    }

    #[test]
    fn test_notification_without_extra_has_no_stray_fields() {
        let msg = ServerMessage::notification("hello there world", HashMap::new());
        let value: serde_json::Value = serde_json::to_value(&msg).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 2); // type + text only
    }

    #[test]
    fn test_error_serialize() {
        let msg = ServerMessage::error(RECEIVE_NOT_SUPPORTED);
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"type\":\"error\""));
        assert!(json.contains("\"reason\":\"You cannot send anything to this room!\""));
    }
}
