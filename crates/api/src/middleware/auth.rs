//! # Session Resolution
//!
//! Every engine entry point takes the caller explicitly. This extractor turns
//! the `Authorization: Bearer <token>` header into that caller by asking the
//! session store. A missing, malformed or unknown token yields no caller;
//! the engine then answers `401 Unauthorized`.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
};
use campussync_core::models::user::Principal;
use tracing::warn;

use crate::{ApiState, middleware::error_handling::AppError};

/// The resolved caller of the current request, if any.
#[derive(Debug, Clone)]
pub struct CurrentPrincipal(pub Option<Principal>);

/// Extracts the token from a `Bearer` authorization header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();

    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

#[async_trait]
impl FromRequestParts<Arc<ApiState>> for CurrentPrincipal {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<ApiState>,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = bearer_token(&parts.headers) else {
            return Ok(CurrentPrincipal(None));
        };

        let principal = state.sessions.resolve_session(token).await?;
        if principal.is_none() {
            warn!("Rejected unknown or expired session token");
        }

        Ok(CurrentPrincipal(principal))
    }
}
