//! API request and response types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JSend response envelope
///
/// Successful responses carry `data`, client errors carry a `data` message,
/// server errors carry a `message` only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum JSend<T> {
    Success { data: T },
    Fail { data: T },
    Error { message: String },
}

impl<T> JSend<T> {
    pub fn success(data: T) -> Self {
        JSend::Success { data }
    }
}

impl JSend<String> {
    pub fn fail(message: impl Into<String>) -> Self {
        JSend::Fail {
            data: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        JSend::Error {
            message: message.into(),
        }
    }
}

/// Login request
///
/// Fields are optional so that a missing field reaches the handler and is
/// reported with the API's own message rather than a deserialization error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Signup request
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SignupRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Public projection of a user, never carries password material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PublicUser {
    pub id: i32,
    pub email: String,
}

/// Login response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

/// Event create/update payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventPayload {
    /// Only meaningful on update, must match the path id
    pub id: Option<i32>,
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub location: Option<String>,
    pub event_type_id: Option<i32>,
    /// Only meaningful on update, must match the caller
    pub user_id: Option<i32>,
}
