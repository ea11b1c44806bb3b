//! Database repositories
//!
//! Provides the storage collaborators used by the services. Each store is a
//! trait with a PostgreSQL implementation; records are validated with their
//! `validator` rules before any SQL runs, and constraint violations come back
//! as typed `StoreError`s.

pub mod event;
#[cfg(test)]
pub mod memory;
pub mod user;

use events_shared::validation::{error_messages, FieldOrder};
use thiserror::Error;
use validator::Validate;

pub use event::{EventDetail, EventRecord, EventRepository, EventStore, NewEvent};
pub use user::{NewUser, UserRecord, UserRepository, UserStore};

/// Storage layer failures
#[derive(Error, Debug)]
pub enum StoreError {
    /// One message per failed field rule
    #[error("Validation failed: {}", .0.join(","))]
    Validation(Vec<String>),

    #[error("{0}")]
    Uniqueness(String),

    #[error("Invalid foreign key")]
    ForeignKey,

    #[error("Database error")]
    Database(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return StoreError::Uniqueness(unique_message(db_err.constraint()));
            }
            if db_err.is_foreign_key_violation() {
                return StoreError::ForeignKey;
            }
        }
        StoreError::Database(err)
    }
}

fn unique_message(constraint: Option<&str>) -> String {
    match constraint {
        Some("users_email_key") => user::EMAIL_TAKEN_MESSAGE.to_string(),
        _ => "Value must be unique".to_string(),
    }
}

/// Run a record's field rules, reporting failures in column order
pub fn validate_record<T: Validate + FieldOrder>(record: &T) -> Result<(), StoreError> {
    record
        .validate()
        .map_err(|errors| StoreError::Validation(error_messages(&errors, T::FIELDS)))
}
