//! User repository for database operations

use super::{validate_record, StoreError};
use crate::auth::Credential;
use anyhow::Result;
use async_trait::async_trait;
use events_shared::validation::FieldOrder;
use sqlx::PgPool;
use validator::Validate;

pub(crate) const EMAIL_TAKEN_MESSAGE: &str = "email must be unique";

/// User record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: i32,
    pub email: String,
    pub encrypted_password: Vec<u8>,
    pub salt: Vec<u8>,
}

impl UserRecord {
    /// Stored credential, rejected if the columns have the wrong sizes
    pub fn credential(&self) -> Result<Credential> {
        Credential::from_parts(&self.salt, &self.encrypted_password)
    }
}

/// Input for creating a user
#[derive(Debug, Clone, Validate)]
pub struct NewUser {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub credential: Credential,
}

impl FieldOrder for NewUser {
    const FIELDS: &'static [&'static str] = &["email"];
}

/// Storage collaborator for users
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError>;

    /// Fails with `Validation` for a malformed email and `Uniqueness` for a
    /// taken one
    async fn create(&self, user: NewUser) -> Result<UserRecord, StoreError>;
}

/// PostgreSQL user store
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, email, encrypted_password, salt
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn create(&self, user: NewUser) -> Result<UserRecord, StoreError> {
        validate_record(&user)?;

        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (email, encrypted_password, salt)
            VALUES ($1, $2, $3)
            RETURNING id, email, encrypted_password, salt
            "#,
        )
        .bind(&user.email)
        .bind(user.credential.hash())
        .bind(user.credential.salt())
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }
}
