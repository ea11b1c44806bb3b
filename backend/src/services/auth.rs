//! Auth service for signup and login
//!
//! # Performance Optimizations
//!
//! - Password hashing/verification runs on blocking thread pool
//! - JWT service is passed by reference (pre-computed keys)

use crate::auth::{JwtService, PasswordService};
use crate::error::ApiError;
use crate::repositories::{NewUser, UserStore};
use events_shared::validation::non_empty;
use events_shared::PublicUser;
use tracing::{info, warn};

/// Auth service for authentication operations
pub struct AuthService;

impl AuthService {
    /// Register a new user
    ///
    /// Store validation failures (bad email format, taken email) are passed
    /// through unchanged. The result never carries password material.
    pub async fn signup(
        users: &dyn UserStore,
        email: Option<String>,
        password: Option<String>,
    ) -> Result<PublicUser, ApiError> {
        let (email, password) = required(email, password)?;

        // Hash password on blocking thread pool (CPU-intensive)
        let credential = PasswordService::hash_async(password)
            .await
            .map_err(ApiError::Internal)?;

        let user = users.create(NewUser { email, credential }).await?;

        info!(user_id = user.id, "User signed up");
        Ok(PublicUser {
            id: user.id,
            email: user.email,
        })
    }

    /// Login with email and password, returning an access token
    ///
    /// A token is only issued once the user is found and the password
    /// verified; any earlier failure returns without side effects.
    pub async fn login(
        users: &dyn UserStore,
        jwt_service: &JwtService,
        email: Option<String>,
        password: Option<String>,
    ) -> Result<String, ApiError> {
        let (email, password) = required(email, password)?;

        let user = users
            .find_by_email(&email)
            .await?
            .ok_or(ApiError::UserNotFound)?;

        let credential = user.credential().map_err(ApiError::Internal)?;

        // Verify password on blocking thread pool (CPU-intensive)
        let valid = PasswordService::verify_async(password, credential)
            .await
            .map_err(ApiError::Internal)?;

        if !valid {
            warn!(user_id = user.id, "Login rejected: invalid credentials");
            return Err(ApiError::InvalidCredentials);
        }

        let token = jwt_service.issue(user.id).map_err(ApiError::Internal)?;

        info!(user_id = user.id, "User logged in");
        Ok(token)
    }
}

fn required(
    email: Option<String>,
    password: Option<String>,
) -> Result<(String, String), ApiError> {
    match (non_empty(email), non_empty(password)) {
        (Some(email), Some(password)) => Ok((email, password)),
        _ => Err(ApiError::MissingFields),
    }
}
