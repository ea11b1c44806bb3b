//! Authentication routes
//!
//! Provides endpoints for user signup and login, plus a protected probe
//! route for checking a token.
//!
//! Password hashing runs on the blocking thread pool, so a slow derivation
//! does not hold up other requests.

use crate::auth::{require_auth, AuthUser};
use crate::error::ApiResult;
use crate::services::AuthService;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};
use events_shared::{JSend, LoginRequest, PublicUser, SignupRequest, TokenResponse};

/// Create auth routes
pub fn auth_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route(
            "/protected",
            get(protected).route_layer(middleware::from_fn_with_state(state, require_auth)),
        )
}

/// Register a new user
///
/// POST /api/v1/auth/signup
#[utoipa::path(
    post,
    path = "/api/v1/auth/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "JSend success carrying the new user", body = PublicUser),
        (status = 400, description = "Missing field, invalid email or email already taken"),
    ),
    tag = "auth",
)]
pub(crate) async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<JSend<PublicUser>>)> {
    let Json(req) = payload?;
    let user = AuthService::signup(state.users(), req.email, req.password).await?;
    Ok((StatusCode::CREATED, Json(JSend::success(user))))
}

/// Login with email and password
///
/// POST /api/v1/auth/login
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "JSend success carrying an access token", body = TokenResponse),
        (status = 400, description = "Missing email or password"),
        (status = 401, description = "Invalid credentials"),
        (status = 404, description = "No user with that email"),
    ),
    tag = "auth",
)]
pub(crate) async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<JSend<TokenResponse>>> {
    let Json(req) = payload?;
    let token = AuthService::login(state.users(), state.jwt(), req.email, req.password).await?;
    Ok(Json(JSend::success(TokenResponse { token })))
}

/// GET /api/v1/auth/protected
///
/// Requires valid Bearer token in Authorization header.
#[utoipa::path(
    get,
    path = "/api/v1/auth/protected",
    responses(
        (status = 200, description = "JSend success with \"Access granted\""),
        (status = 401, description = "Missing, expired, forged or malformed token"),
    ),
    security(("bearerAuth" = [])),
    tag = "auth",
)]
pub(crate) async fn protected(_auth: AuthUser) -> Json<JSend<String>> {
    Json(JSend::success("Access granted".to_string()))
}
