//! # Quotehub
//!
//! Quote collection service - a REST API for managing quotes, authors and
//! tags, with live WebSocket notifications when new quotes are created.
//!
//! ## Features
//!
//! - **CRUD API**: quotes, authors and tags over SQLite
//! - **List filtering**: declared query parameters map to store predicates
//! - **Search & ordering**: substring search and creation-time ordering
//! - **Live notifications**: one shared room, broadcast on quote creation
//!
//! ## Modules
//!
//! - [`store`]: relational entity store and the query filter layer
//! - [`notify`]: notification room, WebSocket handler and broadcaster
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use quotehub::api::{serve, AppState};
//! use quotehub::config::Config;
//! use quotehub::store::QuoteStore;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!
//!     let store = Arc::new(QuoteStore::open(Path::new(&config.store.db_path))?);
//!     let state = AppState::new(store, config.clone());
//!
//!     serve(state, &config.api).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod notify;
pub mod store;

// Re-export top-level types for convenience
pub use store::{
    Author, AuthorUpdate, FilterSet, ListFilter, ListQuery, NewAuthor, NewQuote, Quote,
    QuoteListQuery, QuoteOrdering, QuoteStore, QuoteUpdate, StoreError, StoreResult, Tag,
};

pub use notify::{
    notifications_handler, NotificationRoom, Notifier, QuoteCreatedHook, RoomConfig, RoomError,
    ServerMessage,
};

pub use api::{build_router, serve, ApiError, ApiResult, AppState};

pub use config::{Config, ConfigError, LoggingConfig};
