//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod watchlist_repo;

pub use watchlist_repo::WatchlistRepo;
