//! Application state shared across all request handlers.
//!
//! `AppState` is initialized once during startup and cloned into each handler through
//! Axum's state extraction. Every field is cheap to clone.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::bot::NotificationBridge;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Messaging provider used for notifications and group chats.
    pub bridge: Arc<dyn NotificationBridge>,

    /// Application base URL, appended to notification texts.
    pub app_url: String,
}

impl AppState {
    pub fn new(db: DatabaseConnection, bridge: Arc<dyn NotificationBridge>, app_url: String) -> Self {
        Self {
            db,
            bridge,
            app_url,
        }
    }
}
