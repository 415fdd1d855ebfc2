//! Event Broadcaster
//!
//! Builds notification payloads and publishes them to the room. Triggered
//! by the quote-creation code path after the store write commits, through
//! the [`QuoteCreatedHook`] seam - the store layer never talks to sockets
//! directly.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

use super::messages::ServerMessage;
use super::room::NotificationRoom;
use crate::store::Quote;

/// Text carried by the quote-creation notification
pub const QUOTE_CREATED_TEXT: &str = "Created new quote";

/// Post-commit hook invoked after a quote is successfully created
///
/// Implementations must be best-effort: delivery failures stay inside the
/// hook and never surface to the HTTP request that triggered it.
#[async_trait]
pub trait QuoteCreatedHook: Send + Sync {
    async fn quote_created(&self, quote: &Quote);
}

/// Publishes notification events to the room
#[derive(Clone)]
pub struct Notifier {
    room: Arc<NotificationRoom>,
}

impl Notifier {
    pub fn new(room: Arc<NotificationRoom>) -> Self {
        Self { room }
    }

    /// Broadcast `{type: "notification", text: message, ...extra}` to every
    /// current room member
    ///
    /// Fire-and-forget: returns once the message is handed to each member's
    /// outbound channel; socket I/O happens in the per-connection tasks.
    pub async fn broadcast(&self, message: &str, extra: HashMap<String, String>) {
        self.room
            .broadcast(ServerMessage::notification(message, extra))
            .await;
    }
}

#[async_trait]
impl QuoteCreatedHook for Notifier {
    async fn quote_created(&self, quote: &Quote) {
        let mut extra = HashMap::new();
        extra.insert("quote_id".to_string(), quote.id.to_string());

        tracing::debug!(quote_id = %quote.id, "Broadcasting quote creation");
        self.broadcast(QUOTE_CREATED_TEXT, extra).await;
    }
}
