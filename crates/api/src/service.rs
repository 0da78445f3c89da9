//! The list service: business rules over the store.
//!
//! Duplicate prevention, sort-then-paginate, and empty-state handling live
//! here; handlers only validate payload shape and map results to responses.

use watchlist_core::watchlist::{paginate, ContentType, Page, SavedItem};
use watchlist_db::repositories::WatchlistRepo;
use watchlist_db::DbPool;

/// Operations on a user's watchlist.
pub struct WatchlistService;

impl WatchlistService {
    /// Add a content reference to the user's list.
    ///
    /// Returns `true` iff a new entry was stored; `false` means the entry
    /// was already present and nothing was written. At most one store write
    /// happens per call, and uniqueness is the store constraint's job, so
    /// concurrent adds of the same pair cannot produce duplicates.
    pub async fn add(
        pool: &DbPool,
        user_id: &str,
        content_id: &str,
        content_type: ContentType,
    ) -> Result<bool, sqlx::Error> {
        WatchlistRepo::add_entry(pool, user_id, content_id, content_type).await
    }

    /// Remove a content reference from the user's list.
    ///
    /// Returns `true` iff an entry was actually removed. An absent entry is
    /// a normal `false` outcome, not an error.
    pub async fn remove(
        pool: &DbPool,
        user_id: &str,
        content_id: &str,
    ) -> Result<bool, sqlx::Error> {
        WatchlistRepo::remove_entry(pool, user_id, content_id).await
    }

    /// Fetch one page of the user's list, most recently added first.
    ///
    /// A user with no entries gets the empty page shape (zero totals); a
    /// page past the end gets empty `items` with the page echoed back.
    pub async fn list(pool: &DbPool, user_id: &str, page: i64) -> Result<Page, sqlx::Error> {
        let rows = WatchlistRepo::entries_for_user(pool, user_id).await?;
        let entries: Vec<SavedItem> = rows.into_iter().map(SavedItem::from).collect();
        Ok(paginate(entries, page))
    }
}
