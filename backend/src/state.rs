//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! All fields are created once at startup and are read-only during request
//! handling; cloning only bumps reference counts.

use crate::auth::JwtService;
use crate::config::AppConfig;
use crate::repositories::{EventRepository, EventStore, UserRepository, UserStore};
use sqlx::PgPool;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (health checks)
    pub db: PgPool,
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Pre-initialized JWT service with cached keys
    pub jwt: JwtService,
    pub users: Arc<dyn UserStore>,
    pub events: Arc<dyn EventStore>,
}

impl AppState {
    /// Create application state backed by PostgreSQL stores
    ///
    /// Derives the JWT keys from the configured secret, so call it once at
    /// startup.
    pub fn new(db: PgPool, config: AppConfig) -> Self {
        let users = Arc::new(UserRepository::new(db.clone()));
        let events = Arc::new(EventRepository::new(db.clone()));
        Self::with_stores(db, users, events, config)
    }

    /// Create application state with explicit stores
    pub fn with_stores(
        db: PgPool,
        users: Arc<dyn UserStore>,
        events: Arc<dyn EventStore>,
        config: AppConfig,
    ) -> Self {
        let jwt = JwtService::new(&config.jwt.secret, config.jwt.access_token_expiry_secs);

        Self {
            db,
            config: Arc::new(config),
            jwt,
            users,
            events,
        }
    }

    /// Get a reference to the database pool
    #[inline]
    pub fn db(&self) -> &PgPool {
        &self.db
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get a reference to the JWT service
    #[inline]
    pub fn jwt(&self) -> &JwtService {
        &self.jwt
    }

    #[inline]
    pub fn users(&self) -> &dyn UserStore {
        self.users.as_ref()
    }

    #[inline]
    pub fn events(&self) -> &dyn EventStore {
        self.events.as_ref()
    }
}
