//! Domain logic for the watchlist service.
//!
//! Dependency-light by design: no database or HTTP types here, so the
//! pagination rules and validation logic are unit-testable in isolation.

pub mod error;
pub mod types;
pub mod watchlist;
