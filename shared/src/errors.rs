//! Error types shared across the Events application

use thiserror::Error;

/// Bearer token verification failures
///
/// Every way a token can fail verification maps to exactly one of these
/// kinds. The `Display` text is the message returned to API clients.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("No token attached")]
    MissingToken,

    #[error("Token has expired")]
    TokenExpired,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Malformed token")]
    MalformedToken,
}
