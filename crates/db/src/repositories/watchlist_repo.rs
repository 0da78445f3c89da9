//! Repository for the `watchlist_entries` table.
//!
//! All three operations are single round trips. Add relies on the
//! `uq_watchlist_entries_user_content` unique constraint for duplicate
//! prevention, so there is no check-then-write sequence to race.

use sqlx::PgPool;
use watchlist_core::watchlist::ContentType;

use crate::models::watchlist_entry::WatchlistEntry;

/// Column list for `watchlist_entries` queries.
const COLUMNS: &str = "\
    id, user_id, content_id, content_type, \
    added_at, created_at, updated_at";

/// Provides data access for per-user watchlists.
pub struct WatchlistRepo;

impl WatchlistRepo {
    /// Atomic insert-if-absent.
    ///
    /// `added_at` is assigned by the database at insertion time. Returns
    /// `true` iff a row was inserted; a duplicate `(user_id, content_id)`
    /// is a conflict no-op and returns `false`.
    pub async fn add_entry(
        pool: &PgPool,
        user_id: &str,
        content_id: &str,
        content_type: ContentType,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO watchlist_entries (user_id, content_id, content_type) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (user_id, content_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(content_id)
        .bind(content_type.as_str())
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete the entry matching `(user_id, content_id)`.
    ///
    /// Returns `true` iff a row was actually deleted, `false` when nothing
    /// matched (including the user having no entries at all).
    pub async fn remove_entry(
        pool: &PgPool,
        user_id: &str,
        content_id: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM watchlist_entries \
             WHERE user_id = $1 AND content_id = $2",
        )
        .bind(user_id)
        .bind(content_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Fetch every entry for a user, in insertion (`id`) order.
    ///
    /// Sorting for presentation is the service's job; the fixed fetch order
    /// only makes the service's stable sort deterministic on ties.
    pub async fn entries_for_user(
        pool: &PgPool,
        user_id: &str,
    ) -> Result<Vec<WatchlistEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM watchlist_entries \
             WHERE user_id = $1 \
             ORDER BY id"
        );
        sqlx::query_as::<_, WatchlistEntry>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
