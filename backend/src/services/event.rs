//! Event service
//!
//! Listing, lookup, creation and owner-only updates of events.

use crate::error::ApiError;
use crate::repositories::{EventDetail, EventRecord, EventStore, NewEvent, StoreError};
use events_shared::EventPayload;
use tracing::info;

const NO_SUCH_EVENT: &str = "No event with that ID exists";
const NOT_OWNER: &str = "You can only update your own events";

/// Event service for business logic
pub struct EventService;

impl EventService {
    pub async fn list_all(events: &dyn EventStore) -> Result<Vec<EventRecord>, ApiError> {
        Ok(events.list_all().await?)
    }

    pub async fn list_for_user(
        events: &dyn EventStore,
        user_id: i32,
    ) -> Result<Vec<EventRecord>, ApiError> {
        Ok(events.list_for_user(user_id).await?)
    }

    pub async fn get(events: &dyn EventStore, id: i32) -> Result<EventDetail, ApiError> {
        events
            .find_detail_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(NO_SUCH_EVENT.to_string()))
    }

    /// Create an event owned by `user_id`
    ///
    /// Any `userId` in the payload is ignored.
    pub async fn create(
        events: &dyn EventStore,
        user_id: i32,
        payload: EventPayload,
    ) -> Result<EventRecord, ApiError> {
        let new_event = new_event(payload, user_id)?;
        let event = events.create(new_event).await?;

        info!(event_id = event.id, user_id, "Event created");
        Ok(event)
    }

    /// Replace an event's fields
    ///
    /// The payload must repeat the path id and name the caller as owner, and
    /// the stored event must belong to the caller.
    pub async fn update(
        events: &dyn EventStore,
        user_id: i32,
        path_id: i32,
        payload: EventPayload,
    ) -> Result<(), ApiError> {
        if payload.id != Some(path_id) {
            return Err(ApiError::BadRequest(
                "Path ID does not match payload ID".to_string(),
            ));
        }

        if payload.user_id != Some(user_id) {
            return Err(ApiError::Forbidden(NOT_OWNER.to_string()));
        }

        let existing = events
            .find_by_id(path_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(NO_SUCH_EVENT.to_string()))?;

        if existing.user_id != user_id {
            return Err(ApiError::Forbidden(NOT_OWNER.to_string()));
        }

        let rows = events.update(path_id, new_event(payload, user_id)?).await?;
        if rows == 0 {
            return Err(ApiError::NotFound(NO_SUCH_EVENT.to_string()));
        }

        info!(event_id = path_id, user_id, "Event updated");
        Ok(())
    }
}

/// Check required fields and build the record to store
fn new_event(payload: EventPayload, user_id: i32) -> Result<NewEvent, StoreError> {
    let mut missing = Vec::new();
    if payload.title.is_none() {
        missing.push("Event.title cannot be null".to_string());
    }
    if payload.date.is_none() {
        missing.push("Event.date cannot be null".to_string());
    }
    if payload.event_type_id.is_none() {
        missing.push("Event.eventTypeId cannot be null".to_string());
    }

    match (payload.title, payload.date, payload.event_type_id) {
        (Some(title), Some(date), Some(event_type_id)) => Ok(NewEvent {
            title,
            date,
            location: payload.location,
            event_type_id,
            user_id,
        }),
        _ => Err(StoreError::Validation(missing)),
    }
}
