//! Caller identity.
//!
//! How a user id is derived (sessions, tokens) is outside this service; the
//! id is treated as an externally-supplied opaque string. Requests may carry
//! it in the `x-user-id` header; otherwise the configured default applies,
//! so the extractor never rejects.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::state::AppState;

/// Name of the header carrying the caller's user id.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Extractor for the caller's user id.
#[derive(Debug, Clone)]
pub struct UserId(pub String);

impl FromRequestParts<AppState> for UserId {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .unwrap_or_else(|| state.config.default_user_id.clone());

        Ok(UserId(user_id))
    }
}
