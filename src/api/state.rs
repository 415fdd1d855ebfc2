//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::notify::{Notifier, NotificationRoom, QuoteCreatedHook, RoomConfig};
use crate::store::QuoteStore;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Entity store for authors, tags and quotes
    pub store: Arc<QuoteStore>,
    /// The process-wide notification room
    pub room: Arc<NotificationRoom>,
    /// Post-commit hook fired on quote creation
    pub on_quote_created: Arc<dyn QuoteCreatedHook>,
    /// Full service configuration
    pub config: Arc<Config>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create state with the default notifier wired to the room
    pub fn new(store: Arc<QuoteStore>, config: Config) -> Self {
        let room = Arc::new(NotificationRoom::new(RoomConfig {
            max_connections: config.notifications.max_connections,
        }));
        let notifier = Notifier::new(Arc::clone(&room));

        Self {
            store,
            room,
            on_quote_created: Arc::new(notifier),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Get current notification room member count
    pub async fn room_member_count(&self) -> usize {
        self.room.member_count().await
    }
}
