pub mod health;
pub mod watchlist;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /list                POST add item, GET list items (paginated)
/// /list/{content_id}   DELETE remove item
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/list", watchlist::router())
}
