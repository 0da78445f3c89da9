//! Watchlist entry row model.

use serde::Serialize;
use sqlx::FromRow;
use watchlist_core::types::{DbId, Timestamp};
use watchlist_core::watchlist::SavedItem;

/// A row from the `watchlist_entries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WatchlistEntry {
    pub id: DbId,
    pub user_id: String,
    pub content_id: String,
    pub content_type: String,
    pub added_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<WatchlistEntry> for SavedItem {
    /// Drop the row bookkeeping fields; only the published item shape
    /// leaves the service.
    fn from(row: WatchlistEntry) -> Self {
        SavedItem {
            content_id: row.content_id,
            content_type: row.content_type,
            added_at: row.added_at,
        }
    }
}
