//! Authentication middleware
//!
//! Gate for protected routes: pulls the bearer token from the
//! `Authorization` header, verifies it with the pre-computed JWT service
//! from AppState and records the caller on the request.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use events_shared::AuthError;
use tracing::debug;

/// Authenticated caller, attached to the request by `require_auth`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: i32,
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .copied()
            .ok_or(ApiError::Auth(AuthError::MissingToken))
    }
}

/// Token from an `Authorization: Bearer <token>` header
///
/// The scheme is matched case-insensitively. Any other header shape counts
/// as no token attached.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    scheme
        .eq_ignore_ascii_case("Bearer")
        .then(|| token.trim())
}

/// Middleware for protected route groups
///
/// Rejects with 401 before the handler runs on any verification failure.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user_id = state.jwt().verify(bearer_token(request.headers()))?;

    debug!(user_id, "Request authenticated");
    request.extensions_mut().insert(AuthUser { user_id });

    Ok(next.run(request).await)
}
