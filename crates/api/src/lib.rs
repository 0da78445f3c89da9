//! Watchlist API server library.
//!
//! Exposes the core building blocks (config, state, error handling, routes,
//! the list service) so integration tests and the binary entrypoint can both
//! access them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod identity;
pub mod routes;
pub mod service;
pub mod state;
