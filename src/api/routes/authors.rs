//! Author Routes
//!
//! CRUD endpoints for authors.
//!
//! - GET /authors - List authors (searchable)
//! - POST /authors - Create an author
//! - GET /authors/:author_id - Get a specific author
//! - PUT/PATCH /authors/:author_id - Update an author
//! - DELETE /authors/:author_id - Delete an author (quotes cascade)

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::collections::HashMap;
use std::sync::Arc;

use crate::api::dto::{AuthorResponse, CreateAuthorRequest, UpdateAuthorRequest};
use crate::api::error::{ApiError, ApiResult};
use crate::api::pagination::{Page, Pagination};
use crate::api::routes::parse_id;
use crate::api::state::AppState;
use crate::store::{AuthorUpdate, ListQuery, NewAuthor};

/// GET /authors
///
/// List authors ordered by id. Supports `search` across id and names.
pub async fn list_authors(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<Page<AuthorResponse>>> {
    let pagination = Pagination::from_params(
        &params,
        state.config.api.page_size,
        state.config.api.max_page_size,
    )?;

    let (authors, count) = state
        .store
        .list_authors(&ListQuery {
            search: params.get("search").cloned(),
            limit: pagination.limit(),
            offset: pagination.offset(),
        })
        .await?;

    let results = authors.iter().map(AuthorResponse::from).collect();
    Ok(Json(pagination.paginate("/authors", &params, count, results)))
}

/// POST /authors
pub async fn create_author(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateAuthorRequest>,
) -> ApiResult<(StatusCode, Json<AuthorResponse>)> {
    let author = state
        .store
        .create_author(NewAuthor {
            first_name: req.first_name,
            last_name: req.last_name,
            birth_date: req.birth_date,
            death_date: req.death_date,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(AuthorResponse::from(&author))))
}

/// GET /authors/:author_id
pub async fn get_author(
    State(state): State<Arc<AppState>>,
    Path(author_id): Path<String>,
) -> ApiResult<Json<AuthorResponse>> {
    let id = parse_id("Author", &author_id)?;
    let author = state.store.get_author(id).await?;
    Ok(Json(AuthorResponse::from(&author)))
}

/// PUT /authors/:author_id
///
/// Full update: the required fields must all be present.
pub async fn put_author(
    State(state): State<Arc<AppState>>,
    Path(author_id): Path<String>,
    Json(req): Json<UpdateAuthorRequest>,
) -> ApiResult<Json<AuthorResponse>> {
    if req.first_name.is_none() {
        return Err(ApiError::validation("first_name", "This field is required."));
    }
    if req.birth_date.is_none() {
        return Err(ApiError::validation("birth_date", "This field is required."));
    }
    apply_update(&state, &author_id, req).await
}

/// PATCH /authors/:author_id
///
/// Partial update: absent fields are left unchanged.
pub async fn patch_author(
    State(state): State<Arc<AppState>>,
    Path(author_id): Path<String>,
    Json(req): Json<UpdateAuthorRequest>,
) -> ApiResult<Json<AuthorResponse>> {
    apply_update(&state, &author_id, req).await
}

async fn apply_update(
    state: &AppState,
    author_id: &str,
    req: UpdateAuthorRequest,
) -> ApiResult<Json<AuthorResponse>> {
    let id = parse_id("Author", author_id)?;
    let author = state
        .store
        .update_author(
            id,
            AuthorUpdate {
                first_name: req.first_name,
                last_name: req.last_name,
                birth_date: req.birth_date,
                death_date: req.death_date,
            },
        )
        .await?;

    Ok(Json(AuthorResponse::from(&author)))
}

/// DELETE /authors/:author_id
///
/// Deletes the author and, by cascade, all of their quotes.
pub async fn delete_author(
    State(state): State<Arc<AppState>>,
    Path(author_id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id("Author", &author_id)?;
    state.store.delete_author(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
