//! Live notifications over WebSocket
//!
//! A single fixed room receives an event whenever a quote is created.
//!
//! ## Architecture
//!
//! - **NotificationRoom**: the process-wide member registry and broadcaster
//! - **Handler**: WebSocket upgrade and connection lifecycle
//! - **Notifier**: builds payloads and publishes them post-commit
//! - **Messages**: server-to-client message formats
//!
//! The channel is send-only: anything a client sends is answered with a
//! room-wide `{"type": "error", ...}` broadcast.
//!
//! ## Example
//!
//! ```javascript
//! // Browser
//! const ws = new WebSocket('ws://localhost:8083/ws/notifications');
//!
//! ws.onmessage = (event) => {
//!   const msg = JSON.parse(event.data);
//!   // {type: "notification", text: "Created new quote", quote_id: "..."}
//! };
//! ```

mod handler;
mod messages;
mod notifier;
mod room;

pub use handler::notifications_handler;
pub use messages::{ServerMessage, RECEIVE_NOT_SUPPORTED};
pub use notifier::{Notifier, QuoteCreatedHook, QUOTE_CREATED_TEXT};
pub use room::{ConnectionId, NotificationRoom, RoomConfig, RoomError, NOTIFICATION_ROOM};
