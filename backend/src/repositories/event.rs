//! Event repository for database operations

use super::{validate_record, StoreError};
use async_trait::async_trait;
use chrono::NaiveDate;
use events_shared::validation::{validate_future_date, FieldOrder};
use serde::Serialize;
use sqlx::PgPool;
use utoipa::ToSchema;
use validator::Validate;

/// Event record from database
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub id: i32,
    pub title: String,
    pub date: NaiveDate,
    pub location: Option<String>,
    pub event_type_id: i32,
    pub user_id: i32,
}

/// Event with its type flattened to the type name
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventDetail {
    pub id: i32,
    pub title: String,
    pub date: NaiveDate,
    pub location: Option<String>,
    pub event_type: String,
    pub user_id: i32,
}

/// Input for creating or updating an event
#[derive(Debug, Clone, Validate)]
pub struct NewEvent {
    #[validate(length(min = 3, max = 255, message = "Title must be at least 3 characters long"))]
    pub title: String,
    #[validate(custom(function = "validate_future_date"))]
    pub date: NaiveDate,
    pub location: Option<String>,
    pub event_type_id: i32,
    pub user_id: i32,
}

impl FieldOrder for NewEvent {
    const FIELDS: &'static [&'static str] =
        &["title", "date", "location", "event_type_id", "user_id"];
}

/// Storage collaborator for events
#[async_trait]
pub trait EventStore: Send + Sync {
    async fn list_all(&self) -> Result<Vec<EventRecord>, StoreError>;

    async fn list_for_user(&self, user_id: i32) -> Result<Vec<EventRecord>, StoreError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<EventRecord>, StoreError>;

    async fn find_detail_by_id(&self, id: i32) -> Result<Option<EventDetail>, StoreError>;

    /// Fails with `ForeignKey` for an unknown event type or owner
    async fn create(&self, event: NewEvent) -> Result<EventRecord, StoreError>;

    /// Returns the number of rows updated (0 when the id is unknown)
    async fn update(&self, id: i32, event: NewEvent) -> Result<u64, StoreError>;
}

/// PostgreSQL event store
#[derive(Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventStore for EventRepository {
    async fn list_all(&self) -> Result<Vec<EventRecord>, StoreError> {
        let events = sqlx::query_as::<_, EventRecord>(
            r#"
            SELECT id, title, date, location, event_type_id, user_id
            FROM events
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    async fn list_for_user(&self, user_id: i32) -> Result<Vec<EventRecord>, StoreError> {
        let events = sqlx::query_as::<_, EventRecord>(
            r#"
            SELECT id, title, date, location, event_type_id, user_id
            FROM events
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<EventRecord>, StoreError> {
        let event = sqlx::query_as::<_, EventRecord>(
            r#"
            SELECT id, title, date, location, event_type_id, user_id
            FROM events
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }

    async fn find_detail_by_id(&self, id: i32) -> Result<Option<EventDetail>, StoreError> {
        let event = sqlx::query_as::<_, EventDetail>(
            r#"
            SELECT e.id, e.title, e.date, e.location, t.name AS event_type, e.user_id
            FROM events e
            JOIN event_types t ON t.id = e.event_type_id
            WHERE e.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }

    async fn create(&self, event: NewEvent) -> Result<EventRecord, StoreError> {
        validate_record(&event)?;

        let record = sqlx::query_as::<_, EventRecord>(
            r#"
            INSERT INTO events (title, date, location, event_type_id, user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, date, location, event_type_id, user_id
            "#,
        )
        .bind(&event.title)
        .bind(event.date)
        .bind(&event.location)
        .bind(event.event_type_id)
        .bind(event.user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    async fn update(&self, id: i32, event: NewEvent) -> Result<u64, StoreError> {
        validate_record(&event)?;

        let result = sqlx::query(
            r#"
            UPDATE events SET
                title = $2,
                date = $3,
                location = $4,
                event_type_id = $5
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&event.title)
        .bind(event.date)
        .bind(&event.location)
        .bind(event.event_type_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
