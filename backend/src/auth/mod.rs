//! Authentication module
//!
//! Provides JWT bearer authentication with PBKDF2 password hashing.

mod jwt;
mod middleware;
mod password;

pub use jwt::{Claims, JwtService};
pub use middleware::{bearer_token, require_auth, AuthUser};
pub use password::{Credential, PasswordService, HASH_LEN, PBKDF2_ITERATIONS, SALT_LEN};
