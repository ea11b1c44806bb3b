//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! the stores and the auth primitives.

pub mod auth;
pub mod event;

pub use auth::AuthService;
pub use event::EventService;
