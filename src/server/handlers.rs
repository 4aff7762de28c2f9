//! REST handlers for the item API.
//!
//! | Method   | Path                | Description                        |
//! |----------|---------------------|------------------------------------|
//! | `POST`   | `/api/items`        | Create an item                     |
//! | `GET`    | `/api/items/{id}`   | Fetch a single item                |
//! | `PUT`    | `/api/items/{id}`   | Replace an item's mutable fields   |
//! | `DELETE` | `/api/items/{id}`   | Hard-delete an item                |
//! | `GET`    | `/api/items`        | Filter/sort/paginate the catalog   |
//! | `GET`    | `/api/items/export` | Full unfiltered collection         |
//!
//! Handlers stay thin: extract parameters, call the service, map the
//! result onto status codes. Store calls are synchronous and bounded
//! (one lock, one small file write), so they run inline.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

use crate::model::ItemDraft;
use crate::server::error::ApiError;
use crate::server::AppState;

/// Query parameters for `GET /api/items`.
#[derive(Debug, serde::Deserialize)]
pub struct ListParams {
    /// Free-text filter over name and description.
    pub q: Option<String>,
    /// Sort specification, `field,direction` (e.g. `price,desc`).
    pub sort: Option<String>,
    /// Zero-based page index.
    #[serde(default)]
    pub page: i64,
    /// Page size.
    #[serde(default = "default_size")]
    pub size: i64,
}

fn default_size() -> i64 {
    10
}

/// `POST /api/items` -- create an item, 201 with a Location header.
pub async fn create_item(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<ItemDraft>,
) -> Result<impl IntoResponse, ApiError> {
    let item = state.service.create(draft)?;
    let location = format!("/api/items/{}", item.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(item),
    ))
}

/// `GET /api/items/{id}` -- single item or 404.
pub async fn get_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, ApiError> {
    let item = state.service.get(id)?.ok_or(ApiError::NotFound(id))?;
    Ok(Json(item))
}

/// `PUT /api/items/{id}` -- replace name/description/price, or 404.
pub async fn update_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Json(draft): Json<ItemDraft>,
) -> Result<impl IntoResponse, ApiError> {
    let item = state
        .service
        .update(id, draft)?
        .ok_or(ApiError::NotFound(id))?;
    Ok(Json(item))
}

/// `DELETE /api/items/{id}` -- 204 on removal, 404 otherwise.
pub async fn delete_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, ApiError> {
    if state.service.delete(id)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(id))
    }
}

/// `GET /api/items` -- `{items, page, size, total}` envelope.
pub async fn list_items(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, ApiError> {
    let page = state.service.list(
        params.q.as_deref(),
        params.sort.as_deref(),
        params.page,
        params.size,
    )?;
    Ok(Json(page))
}

/// `GET /api/items/export` -- the whole collection, unfiltered.
pub async fn export_items(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let items = state.service.export_all()?;
    Ok(Json(items))
}
