//! Quotehub REST API
//!
//! HTTP API layer, built with Axum.
//!
//! # Endpoints
//!
//! ## Quotes
//! - `GET /quotes` - List quotes (filter: `tags`, `author_id`; `search`; `ordering`)
//! - `POST /quotes` - Create a quote (broadcasts a notification)
//! - `GET /quotes/:id` - Get a quote
//! - `PUT/PATCH /quotes/:id` - Update a quote
//! - `DELETE /quotes/:id` - Delete a quote
//! - `GET /quotes/:id/tags` - The quote's tags
//!
//! ## Tags
//! - `GET/POST /tags`, `GET/PUT/PATCH/DELETE /tags/:id`
//!
//! ## Authors
//! - `GET/POST /authors`, `GET/PUT/PATCH/DELETE /authors/:id`
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! ## WebSocket
//! - `GET /ws/notifications` (configurable) - Notification room
//!
//! # Example
//!
//! ```rust,ignore
//! use quotehub::api::{serve, AppState};
//! use quotehub::config::Config;
//! use quotehub::store::QuoteStore;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let store = Arc::new(QuoteStore::open(Path::new(&config.store.db_path))?);
//!     let state = AppState::new(store, config.clone());
//!     serve(state, &config.api).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod pagination;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{http::HeaderValue, routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::ApiConfig;
use crate::notify::notifications_handler;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let ws_path = state.config.notifications.ws_path.clone();
    let cors = cors_layer(&state.config.api.cors_origins);

    let entity_routes = Router::new()
        // Quote routes
        .route(
            "/quotes",
            get(routes::quotes::list_quotes).post(routes::quotes::create_quote),
        )
        .route(
            "/quotes/:quote_id",
            get(routes::quotes::get_quote)
                .put(routes::quotes::put_quote)
                .patch(routes::quotes::patch_quote)
                .delete(routes::quotes::delete_quote),
        )
        .route("/quotes/:quote_id/tags", get(routes::quotes::get_quote_tags))
        // Tag routes
        .route(
            "/tags",
            get(routes::tags::list_tags).post(routes::tags::create_tag),
        )
        .route(
            "/tags/:tag_id",
            get(routes::tags::get_tag)
                .put(routes::tags::update_tag)
                .patch(routes::tags::update_tag)
                .delete(routes::tags::delete_tag),
        )
        // Author routes
        .route(
            "/authors",
            get(routes::authors::list_authors).post(routes::authors::create_author),
        )
        .route(
            "/authors/:author_id",
            get(routes::authors::get_author)
                .put(routes::authors::put_author)
                .patch(routes::authors::patch_author)
                .delete(routes::authors::delete_author),
        )
        // WebSocket route
        .route(&ws_path, get(notifications_handler));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .merge(entity_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let parsed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
    CorsLayer::new()
        .allow_origin(parsed)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Quotehub API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Quotehub API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::notify::{NotificationRoom, ServerMessage};
    use crate::store::{NewQuote, QuoteStore};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tokio::sync::mpsc;
    use tower::util::ServiceExt;
    use uuid::Uuid;

    struct TestApp {
        app: Router,
        store: Arc<QuoteStore>,
        room: Arc<NotificationRoom>,
    }

    fn create_test_app() -> TestApp {
        let store = Arc::new(QuoteStore::open_in_memory().unwrap());
        let state = AppState::new(Arc::clone(&store), Config::default());
        let room = Arc::clone(&state.room);
        let app = build_router(state);
        TestApp { app, store, room }
    }

    async fn request(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn create_author(app: &Router) -> Value {
        let (status, body) = request(
            app,
            "POST",
            "/authors",
            Some(json!({
                "first_name": "John",
                "last_name": "Doe",
                "birth_date": "1990-01-01"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        body
    }

    #[tokio::test]
    async fn test_health_live() {
        let t = create_test_app();
        let (status, _) = request(&t.app, "GET", "/health/live", None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let t = create_test_app();
        let (status, body) = request(&t.app, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["room_members"], 0);
    }

    #[tokio::test]
    async fn test_create_and_get_author() {
        let t = create_test_app();
        let author = create_author(&t.app).await;
        assert_eq!(author["full_name"], "John Doe");
        assert_eq!(author["birth_date"], "1990-01-01");
        assert!(author["death_date"].is_null());

        let uri = format!("/authors/{}", author["id"].as_str().unwrap());
        let (status, body) = request(&t.app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["full_name"], "John Doe");
    }

    #[tokio::test]
    async fn test_duplicate_author_keyed_on_non_field_errors() {
        let t = create_test_app();
        create_author(&t.app).await;

        let (status, body) = request(
            &t.app,
            "POST",
            "/authors",
            Some(json!({
                "first_name": "John",
                "last_name": "Doe",
                "birth_date": "1990-01-01"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["errors"]["non_field_errors"].is_array());
    }

    #[tokio::test]
    async fn test_duplicate_tag_keyed_on_name() {
        let t = create_test_app();
        let (status, _) = request(&t.app, "POST", "/tags", Some(json!({"name": "wisdom"}))).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) =
            request(&t.app, "POST", "/tags", Some(json!({"name": "wisdom"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["errors"]["name"].is_array());
    }

    #[tokio::test]
    async fn test_retrieve_unknown_ids_are_404() {
        let t = create_test_app();

        // Not a UUID at all
        let (status, _) = request(&t.app, "GET", "/quotes/non-existent", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        // Valid UUID, no such row
        let uri = format!("/authors/{}", Uuid::new_v4());
        let (status, _) = request(&t.app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_short_quote_rejected_and_not_persisted() {
        let t = create_test_app();
        let author = create_author(&t.app).await;

        let (status, body) = request(
            &t.app,
            "POST",
            "/quotes",
            Some(json!({
                "text": "two words",
                "author_id": author["id"]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["errors"]["text"].is_array());

        let (_, body) = request(&t.app, "GET", "/quotes", None).await;
        assert_eq!(body["count"], 0);
    }

    #[tokio::test]
    async fn test_quote_with_unknown_author_keyed_on_author_id() {
        let t = create_test_app();
        let (status, body) = request(
            &t.app,
            "POST",
            "/quotes",
            Some(json!({
                "text": "a perfectly valid quote",
                "author_id": Uuid::new_v4()
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["errors"]["author_id"].is_array());
    }

    #[tokio::test]
    async fn test_list_envelope_and_pagination() {
        let t = create_test_app();
        let author = create_author(&t.app).await;
        let author_id: Uuid = author["id"].as_str().unwrap().parse().unwrap();

        for i in 0..15 {
            t.store
                .create_quote(NewQuote {
                    text: format!("quote number {} here", i),
                    author_id,
                    tags: Vec::new(),
                })
                .await
                .unwrap();
        }

        let (status, body) = request(&t.app, "GET", "/quotes", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 15);
        // Default page size from config
        assert_eq!(body["results"].as_array().unwrap().len(), 10);
        assert!(body["next"].as_str().unwrap().contains("page=2"));
        assert!(body["previous"].is_null());

        let (_, body) = request(&t.app, "GET", "/quotes?page=2", None).await;
        assert_eq!(body["results"].as_array().unwrap().len(), 5);
        assert!(body["next"].is_null());
        assert!(body["previous"].as_str().unwrap().contains("page=1"));
    }

    #[tokio::test]
    async fn test_quote_filtering() {
        let t = create_test_app();
        let author = create_author(&t.app).await;
        let author_id: Uuid = author["id"].as_str().unwrap().parse().unwrap();

        let tag_a = t.store.create_tag("alpha").await.unwrap();
        let tag_b = t.store.create_tag("beta").await.unwrap();

        t.store
            .create_quote(NewQuote {
                text: "first tagged quote here".to_string(),
                author_id,
                tags: vec![tag_a.id],
            })
            .await
            .unwrap();
        t.store
            .create_quote(NewQuote {
                text: "second tagged quote here".to_string(),
                author_id,
                tags: vec![tag_b.id],
            })
            .await
            .unwrap();
        t.store
            .create_quote(NewQuote {
                text: "untagged quote text here".to_string(),
                author_id,
                tags: Vec::new(),
            })
            .await
            .unwrap();

        // Comma list matches any of the given tags
        let uri = format!("/quotes?tags={},{}", tag_a.id, tag_b.id);
        let (_, body) = request(&t.app, "GET", &uri, None).await;
        assert_eq!(body["count"], 2);

        let uri = format!("/quotes?tags={}", tag_a.id);
        let (_, body) = request(&t.app, "GET", &uri, None).await;
        assert_eq!(body["count"], 1);

        // Undeclared parameters never affect the result
        let (_, body) = request(&t.app, "GET", "/quotes?text=nonsense", None).await;
        assert_eq!(body["count"], 3);

        // Exact author match
        let uri = format!("/quotes?author_id={}", author_id);
        let (_, body) = request(&t.app, "GET", &uri, None).await;
        assert_eq!(body["count"], 3);
    }

    #[tokio::test]
    async fn test_ordering_param_validated() {
        let t = create_test_app();
        let (status, body) = request(&t.app, "GET", "/quotes?ordering=id", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["errors"]["ordering"].is_array());

        let (status, _) = request(&t.app, "GET", "/quotes?ordering=-created_at", None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_delete_author_cascades_via_api() {
        let t = create_test_app();
        let author = create_author(&t.app).await;
        let author_id: Uuid = author["id"].as_str().unwrap().parse().unwrap();

        let quote = t
            .store
            .create_quote(NewQuote {
                text: "soon to be gone".to_string(),
                author_id,
                tags: Vec::new(),
            })
            .await
            .unwrap();

        let uri = format!("/authors/{}", author_id);
        let (status, _) = request(&t.app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let uri = format!("/quotes/{}", quote.id);
        let (status, _) = request(&t.app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_quote_tags_endpoint() {
        let t = create_test_app();
        let author = create_author(&t.app).await;

        let tag = t.store.create_tag("stoicism").await.unwrap();
        let (status, quote) = request(
            &t.app,
            "POST",
            "/quotes",
            Some(json!({
                "text": "a quote with a tag",
                "author_id": author["id"],
                "tags": [tag.id]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            quote["tags_url"],
            format!("/quotes/{}/tags", quote["id"].as_str().unwrap())
        );

        let (status, body) =
            request(&t.app, "GET", quote["tags_url"].as_str().unwrap(), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["name"], "stoicism");
    }

    #[tokio::test]
    async fn test_quote_creation_broadcasts_notification() {
        let t = create_test_app();
        let author = create_author(&t.app).await;

        // One member present at creation time, one that left before it
        let (tx, mut rx) = mpsc::unbounded_channel();
        t.room.join(tx).await.unwrap();

        let (gone_tx, mut gone_rx) = mpsc::unbounded_channel();
        let gone = t.room.join(gone_tx).await.unwrap();
        t.room.leave(&gone).await;

        let (status, body) = request(
            &t.app,
            "POST",
            "/quotes",
            Some(json!({
                "text": "the quote worth announcing",
                "author_id": author["id"]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let msg = rx.try_recv().expect("member should receive the event");
        let payload = serde_json::to_value(&msg).unwrap();
        assert_eq!(payload["type"], "notification");
        assert_eq!(payload["text"], "Created new quote");
        assert_eq!(payload["quote_id"], body["id"]);

        // Exactly one event, and none for the departed member
        assert!(rx.try_recv().is_err());
        assert!(gone_rx.try_recv().is_err());

        // Updates do not notify
        let uri = format!("/quotes/{}", body["id"].as_str().unwrap());
        let (status, _) = request(
            &t.app,
            "PATCH",
            &uri,
            Some(json!({"text": "an updated quote text"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_put_requires_full_payload() {
        let t = create_test_app();
        let author = create_author(&t.app).await;
        let (_, quote) = request(
            &t.app,
            "POST",
            "/quotes",
            Some(json!({
                "text": "original text right here",
                "author_id": author["id"]
            })),
        )
        .await;

        let uri = format!("/quotes/{}", quote["id"].as_str().unwrap());
        let (status, body) = request(
            &t.app,
            "PUT",
            &uri,
            Some(json!({"text": "only text given here"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["errors"]["author_id"].is_array());

        let (status, _) = request(
            &t.app,
            "PUT",
            &uri,
            Some(json!({
                "text": "full replacement text here",
                "author_id": author["id"]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_search_quotes() {
        let t = create_test_app();
        let author = create_author(&t.app).await;
        let author_id: Uuid = author["id"].as_str().unwrap().parse().unwrap();

        for text in ["the owl of minerva", "a road less travelled"] {
            t.store
                .create_quote(NewQuote {
                    text: text.to_string(),
                    author_id,
                    tags: Vec::new(),
                })
                .await
                .unwrap();
        }

        let (_, body) = request(&t.app, "GET", "/quotes?search=minerva", None).await;
        assert_eq!(body["count"], 1);

        // Author name matches all of their quotes
        let (_, body) = request(&t.app, "GET", "/quotes?search=Doe", None).await;
        assert_eq!(body["count"], 2);
    }
}
