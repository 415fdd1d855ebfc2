//! Tag Routes
//!
//! CRUD endpoints for tags.
//!
//! - GET /tags - List tags (searchable)
//! - POST /tags - Create a tag
//! - GET /tags/:tag_id - Get a specific tag
//! - PUT/PATCH /tags/:tag_id - Rename a tag
//! - DELETE /tags/:tag_id - Delete a tag (quotes keep existing)

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::collections::HashMap;
use std::sync::Arc;

use crate::api::dto::{TagRequest, TagResponse};
use crate::api::error::ApiResult;
use crate::api::pagination::{Page, Pagination};
use crate::api::routes::parse_id;
use crate::api::state::AppState;
use crate::store::ListQuery;

/// GET /tags
///
/// List tags ordered by name. Supports `search` across id and name.
pub async fn list_tags(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<Page<TagResponse>>> {
    let pagination = Pagination::from_params(
        &params,
        state.config.api.page_size,
        state.config.api.max_page_size,
    )?;

    let (tags, count) = state
        .store
        .list_tags(&ListQuery {
            search: params.get("search").cloned(),
            limit: pagination.limit(),
            offset: pagination.offset(),
        })
        .await?;

    let results = tags.iter().map(TagResponse::from).collect();
    Ok(Json(pagination.paginate("/tags", &params, count, results)))
}

/// POST /tags
pub async fn create_tag(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TagRequest>,
) -> ApiResult<(StatusCode, Json<TagResponse>)> {
    let tag = state.store.create_tag(&req.name).await?;
    Ok((StatusCode::CREATED, Json(TagResponse::from(&tag))))
}

/// GET /tags/:tag_id
pub async fn get_tag(
    State(state): State<Arc<AppState>>,
    Path(tag_id): Path<String>,
) -> ApiResult<Json<TagResponse>> {
    let id = parse_id("Tag", &tag_id)?;
    let tag = state.store.get_tag(id).await?;
    Ok(Json(TagResponse::from(&tag)))
}

/// PUT/PATCH /tags/:tag_id
///
/// A tag has a single mutable field, so full and partial update coincide.
pub async fn update_tag(
    State(state): State<Arc<AppState>>,
    Path(tag_id): Path<String>,
    Json(req): Json<TagRequest>,
) -> ApiResult<Json<TagResponse>> {
    let id = parse_id("Tag", &tag_id)?;
    let tag = state.store.update_tag(id, &req.name).await?;
    Ok(Json(TagResponse::from(&tag)))
}

/// DELETE /tags/:tag_id
///
/// Quotes referencing the tag are untouched.
pub async fn delete_tag(
    State(state): State<Arc<AppState>>,
    Path(tag_id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id("Tag", &tag_id)?;
    state.store.delete_tag(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
