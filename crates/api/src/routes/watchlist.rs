//! Route definitions for the watchlist, mounted at `/list`.
//!
//! ```text
//! POST   /               -> add_item
//! GET    /               -> list_items
//! DELETE /{content_id}   -> remove_item
//! ```

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::watchlist;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(watchlist::list_items).post(watchlist::add_item),
        )
        .route("/{content_id}", delete(watchlist::remove_item))
}
