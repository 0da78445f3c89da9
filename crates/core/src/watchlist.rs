//! Watchlist domain types and the sort-then-paginate rules.
//!
//! The per-user list is small (at most a few hundred entries), so listing is
//! an in-memory sort and slice over everything the store returns for the
//! user. Keeping that computation here, free of database types, lets the
//! pagination contract be tested without a running Postgres.

use serde::Serialize;

use crate::types::Timestamp;

/// Fixed page size for list responses.
pub const PAGE_SIZE: i64 = 20;

/// Kind of content a saved entry refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Movie,
    TVShow,
}

impl ContentType {
    /// Canonical string form, as stored and as accepted on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Movie => "Movie",
            ContentType::TVShow => "TVShow",
        }
    }
}

impl std::str::FromStr for ContentType {
    type Err = String;

    /// Case-sensitive: only the two published values are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Movie" => Ok(ContentType::Movie),
            "TVShow" => Ok(ContentType::TVShow),
            other => Err(format!("contentType must be Movie or TVShow, got '{other}'")),
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One saved content reference, as returned by list responses.
///
/// `content_type` stays a plain string on the read path; the store's CHECK
/// constraint guarantees it is one of the [`ContentType`] values.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedItem {
    pub content_id: String,
    pub content_type: String,
    pub added_at: Timestamp,
}

/// One page of a user's watchlist.
///
/// Serializes to the published `{items, totalItems, totalPages, currentPage}`
/// shape.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub items: Vec<SavedItem>,
    pub total_items: i64,
    pub total_pages: i64,
    pub current_page: i64,
}

/// Parse a raw `page` query value.
///
/// Anything that is not a positive integer (absent, unparsable, zero,
/// negative) silently falls back to page 1. The fallback is a deliberate,
/// observable contract of the list endpoint, not an error.
pub fn parse_page(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|p| *p >= 1)
        .unwrap_or(1)
}

/// Sort entries by `added_at` descending and slice out the requested page.
///
/// A page past the end yields an empty `items` array; `current_page` echoes
/// the requested page either way, without clamping. Ties on `added_at` keep
/// their input order (the sort is stable), so the result is deterministic
/// within a single call.
pub fn paginate(mut entries: Vec<SavedItem>, page: i64) -> Page {
    let page = page.max(1);

    // Most recently added first.
    entries.sort_by(|a, b| b.added_at.cmp(&a.added_at));

    let total_items = entries.len() as i64;
    let total_pages = (total_items + PAGE_SIZE - 1) / PAGE_SIZE;

    let items = if page > total_pages {
        Vec::new()
    } else {
        let start = ((page - 1) * PAGE_SIZE) as usize;
        entries
            .into_iter()
            .skip(start)
            .take(PAGE_SIZE as usize)
            .collect()
    };

    Page {
        items,
        total_items,
        total_pages,
        current_page: page,
    }
}
