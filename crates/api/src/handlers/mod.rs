//! Request handlers.
//!
//! Handlers validate payload shape, delegate to [`crate::service`], and map
//! results to response codes. Errors surface via [`crate::error::AppError`].

pub mod watchlist;
