//! Quote Routes
//!
//! CRUD endpoints for quotes, plus the per-quote tag listing.
//!
//! - GET /quotes - List quotes (filterable, searchable, orderable)
//! - POST /quotes - Create a quote (fires the creation notification)
//! - GET /quotes/:quote_id - Get a specific quote
//! - PUT/PATCH /quotes/:quote_id - Update a quote
//! - DELETE /quotes/:quote_id - Delete a quote
//! - GET /quotes/:quote_id/tags - List the quote's tags
//!
//! Filterable parameters are declared here: `tags` (comma-separated tag
//! ids, matches any) and `author_id` (exact). Anything else in the query
//! string is ignored by the filter layer.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::collections::HashMap;
use std::sync::Arc;

use crate::api::dto::{CreateQuoteRequest, QuoteResponse, TagResponse, UpdateQuoteRequest};
use crate::api::error::{ApiError, ApiResult};
use crate::api::pagination::{Page, Pagination};
use crate::api::routes::parse_id;
use crate::api::state::AppState;
use crate::store::{ListFilter, NewQuote, QuoteListQuery, QuoteOrdering, QuoteUpdate};

/// Declared filterable parameters for the quote listing
pub const QUOTE_LIST_FILTER: ListFilter =
    ListFilter::new(&[("tags", "tag_id"), ("author_id", "author_id")]);

/// GET /quotes
///
/// List quotes, newest first by default. `ordering` accepts `created_at`
/// and `-created_at`; `search` matches id, text and author names.
pub async fn list_quotes(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<Page<QuoteResponse>>> {
    let pagination = Pagination::from_params(
        &params,
        state.config.api.page_size,
        state.config.api.max_page_size,
    )?;

    let ordering = match params.get("ordering") {
        Some(raw) => QuoteOrdering::parse(raw).ok_or_else(|| {
            ApiError::validation("ordering", "Choose one of: created_at, -created_at.")
        })?,
        None => QuoteOrdering::default(),
    };

    let (quotes, count) = state
        .store
        .list_quotes(&QuoteListQuery {
            filters: QUOTE_LIST_FILTER.collect(&params),
            search: params.get("search").cloned(),
            ordering,
            limit: pagination.limit(),
            offset: pagination.offset(),
        })
        .await?;

    let results = quotes.iter().map(QuoteResponse::from).collect();
    Ok(Json(pagination.paginate("/quotes", &params, count, results)))
}

/// POST /quotes
///
/// Creates the quote and then fires the post-commit notification hook.
/// Notification delivery is best-effort and never fails the request.
pub async fn create_quote(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateQuoteRequest>,
) -> ApiResult<(StatusCode, Json<QuoteResponse>)> {
    let quote = state
        .store
        .create_quote(NewQuote {
            text: req.text,
            author_id: req.author_id,
            tags: req.tags,
        })
        .await?;

    // Post-commit: the write is durable before anyone is told about it
    state.on_quote_created.quote_created(&quote).await;

    Ok((StatusCode::CREATED, Json(QuoteResponse::from(&quote))))
}

/// GET /quotes/:quote_id
pub async fn get_quote(
    State(state): State<Arc<AppState>>,
    Path(quote_id): Path<String>,
) -> ApiResult<Json<QuoteResponse>> {
    let id = parse_id("Quote", &quote_id)?;
    let quote = state.store.get_quote(id).await?;
    Ok(Json(QuoteResponse::from(&quote)))
}

/// PUT /quotes/:quote_id
///
/// Full update: text and author are required.
pub async fn put_quote(
    State(state): State<Arc<AppState>>,
    Path(quote_id): Path<String>,
    Json(req): Json<UpdateQuoteRequest>,
) -> ApiResult<Json<QuoteResponse>> {
    if req.text.is_none() {
        return Err(ApiError::validation("text", "This field is required."));
    }
    if req.author_id.is_none() {
        return Err(ApiError::validation("author_id", "This field is required."));
    }
    apply_update(&state, &quote_id, req).await
}

/// PATCH /quotes/:quote_id
///
/// Partial update: absent fields are left unchanged. No notification is
/// fired on update.
pub async fn patch_quote(
    State(state): State<Arc<AppState>>,
    Path(quote_id): Path<String>,
    Json(req): Json<UpdateQuoteRequest>,
) -> ApiResult<Json<QuoteResponse>> {
    apply_update(&state, &quote_id, req).await
}

async fn apply_update(
    state: &AppState,
    quote_id: &str,
    req: UpdateQuoteRequest,
) -> ApiResult<Json<QuoteResponse>> {
    let id = parse_id("Quote", quote_id)?;
    let quote = state
        .store
        .update_quote(
            id,
            QuoteUpdate {
                text: req.text,
                author_id: req.author_id,
                tags: req.tags,
            },
        )
        .await?;

    Ok(Json(QuoteResponse::from(&quote)))
}

/// DELETE /quotes/:quote_id
pub async fn delete_quote(
    State(state): State<Arc<AppState>>,
    Path(quote_id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id("Quote", &quote_id)?;
    state.store.delete_quote(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /quotes/:quote_id/tags
///
/// The tags attached to one quote, ordered by name. Unpaginated: the tag
/// set of a single quote is small by construction.
pub async fn get_quote_tags(
    State(state): State<Arc<AppState>>,
    Path(quote_id): Path<String>,
) -> ApiResult<Json<Vec<TagResponse>>> {
    let id = parse_id("Quote", &quote_id)?;
    let tags = state.store.quote_tags(id).await?;
    Ok(Json(tags.iter().map(TagResponse::from).collect()))
}
