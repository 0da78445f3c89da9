//! Handlers for the watchlist endpoints: add, remove, and paginated list.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;
use watchlist_core::error::CoreError;
use watchlist_core::watchlist::{parse_page, ContentType};

use crate::error::{AppError, AppResult};
use crate::identity::UserId;
use crate::service::WatchlistService;
use crate::state::AppState;

/// Fixed client-facing message for any malformed add payload.
const INVALID_PAYLOAD: &str = "Invalid contentId or contentType.";

// ---------------------------------------------------------------------------
// Request / response payloads
// ---------------------------------------------------------------------------

/// Body of `POST /api/v1/list`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddItemRequest {
    #[validate(length(min = 1))]
    pub content_id: String,
    /// Validated against [`ContentType`] in the handler so a bad value maps
    /// to a 400, not a serde-level rejection.
    pub content_type: String,
}

/// Body returned by the add and remove endpoints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationResponse {
    pub message: &'static str,
    pub content_id: String,
}

/// Query parameters for `GET /api/v1/list`.
///
/// `page` is kept as a raw string: an unparsable value silently falls back
/// to page 1 instead of rejecting the request.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub page: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/list
///
/// Add a content reference to the caller's watchlist.
/// 201 when a new entry was stored, 200 when it was already present (no-op).
pub async fn add_item(
    UserId(user_id): UserId,
    State(state): State<AppState>,
    payload: Result<Json<AddItemRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    // Malformed or missing body fields are a 400 before any store access.
    let Json(input) = payload.map_err(|_| AppError::BadRequest(INVALID_PAYLOAD.into()))?;
    input
        .validate()
        .map_err(|_| AppError::BadRequest(INVALID_PAYLOAD.into()))?;
    let content_type: ContentType = input
        .content_type
        .parse()
        .map_err(|_| AppError::BadRequest(INVALID_PAYLOAD.into()))?;

    let added =
        WatchlistService::add(&state.pool, &user_id, &input.content_id, content_type).await?;

    if !added {
        return Ok((
            StatusCode::OK,
            Json(MutationResponse {
                message: "Item was already in the watchlist.",
                content_id: input.content_id,
            }),
        ));
    }

    tracing::info!(
        user_id = %user_id,
        content_id = %input.content_id,
        content_type = %content_type,
        "Watchlist entry added"
    );

    Ok((
        StatusCode::CREATED,
        Json(MutationResponse {
            message: "Item added to the watchlist.",
            content_id: input.content_id,
        }),
    ))
}

/// DELETE /api/v1/list/{content_id}
///
/// Remove a content reference from the caller's watchlist.
/// 404 when no matching entry exists -- a normal outcome, not a failure.
pub async fn remove_item(
    UserId(user_id): UserId,
    State(state): State<AppState>,
    Path(content_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let removed = WatchlistService::remove(&state.pool, &user_id, &content_id).await?;

    if !removed {
        return Err(CoreError::NotFound {
            entity: "watchlist entry",
            id: content_id,
        }
        .into());
    }

    tracing::info!(
        user_id = %user_id,
        content_id = %content_id,
        "Watchlist entry removed"
    );

    Ok(Json(MutationResponse {
        message: "Item removed from the watchlist.",
        content_id,
    }))
}

/// GET /api/v1/list?page=N
///
/// One page of the caller's watchlist, most recently added first.
pub async fn list_items(
    UserId(user_id): UserId,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let page = parse_page(params.page.as_deref());
    let page_view = WatchlistService::list(&state.pool, &user_id, page).await?;
    Ok(Json(page_view))
}
