//! In-memory stores for router and service tests
//!
//! Mirrors the PostgreSQL schema's rules: the same field validation, unique
//! emails, and foreign keys onto the seeded event types and existing users.

use super::{
    user::EMAIL_TAKEN_MESSAGE, validate_record, EventDetail, EventRecord, EventStore, NewEvent,
    NewUser, StoreError, UserRecord, UserStore,
};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// Event types seeded by the bootstrap migration
pub const EVENT_TYPES: [(i32, &str); 4] = [
    (1, "Conference"),
    (2, "Meetup"),
    (3, "Workshop"),
    (4, "Seminar"),
];

#[derive(Default)]
struct Tables {
    users: BTreeMap<i32, UserRecord>,
    events: BTreeMap<i32, EventRecord>,
    next_user_id: i32,
    next_event_id: i32,
}

impl Tables {
    fn check_event_keys(&self, event: &NewEvent) -> Result<(), StoreError> {
        let type_known = EVENT_TYPES.iter().any(|(id, _)| *id == event.event_type_id);
        if !type_known || !self.users.contains_key(&event.user_id) {
            return Err(StoreError::ForeignKey);
        }
        Ok(())
    }
}

/// Store backing both users and events
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an event directly, bypassing validation (for seeding past dates)
    pub async fn seed_event(&self, mut event: EventRecord) -> EventRecord {
        let mut tables = self.tables.write().await;
        tables.next_event_id = tables.next_event_id.max(event.id);
        if event.id == 0 {
            tables.next_event_id += 1;
            event.id = tables.next_event_id;
        }
        tables.events.insert(event.id, event.clone());
        event
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|u| u.email == email).cloned())
    }

    async fn create(&self, user: NewUser) -> Result<UserRecord, StoreError> {
        validate_record(&user)?;

        // Check and insert under one write lock so uniqueness is atomic
        let mut tables = self.tables.write().await;
        if tables.users.values().any(|u| u.email == user.email) {
            return Err(StoreError::Uniqueness(EMAIL_TAKEN_MESSAGE.to_string()));
        }

        tables.next_user_id += 1;
        let record = UserRecord {
            id: tables.next_user_id,
            email: user.email,
            encrypted_password: user.credential.hash().to_vec(),
            salt: user.credential.salt().to_vec(),
        };
        tables.users.insert(record.id, record.clone());
        Ok(record)
    }
}

#[async_trait]
impl EventStore for MemoryStore {
    async fn list_all(&self) -> Result<Vec<EventRecord>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.events.values().cloned().collect())
    }

    async fn list_for_user(&self, user_id: i32) -> Result<Vec<EventRecord>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .events
            .values()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<EventRecord>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.events.get(&id).cloned())
    }

    async fn find_detail_by_id(&self, id: i32) -> Result<Option<EventDetail>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.events.get(&id).and_then(|e| {
            EVENT_TYPES
                .iter()
                .find(|(type_id, _)| *type_id == e.event_type_id)
                .map(|(_, name)| EventDetail {
                    id: e.id,
                    title: e.title.clone(),
                    date: e.date,
                    location: e.location.clone(),
                    event_type: name.to_string(),
                    user_id: e.user_id,
                })
        }))
    }

    async fn create(&self, event: NewEvent) -> Result<EventRecord, StoreError> {
        validate_record(&event)?;

        let mut tables = self.tables.write().await;
        tables.check_event_keys(&event)?;

        tables.next_event_id += 1;
        let record = EventRecord {
            id: tables.next_event_id,
            title: event.title,
            date: event.date,
            location: event.location,
            event_type_id: event.event_type_id,
            user_id: event.user_id,
        };
        tables.events.insert(record.id, record.clone());
        Ok(record)
    }

    async fn update(&self, id: i32, event: NewEvent) -> Result<u64, StoreError> {
        validate_record(&event)?;

        let mut tables = self.tables.write().await;
        tables.check_event_keys(&event)?;

        match tables.events.get_mut(&id) {
            Some(existing) => {
                existing.title = event.title;
                existing.date = event.date;
                existing.location = event.location;
                existing.event_type_id = event.event_type_id;
                Ok(1)
            }
            None => Ok(0),
        }
    }
}
