//! Event factory for creating test event entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test events inside a club.
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    club_id: i32,
    owner_id: i64,
    name: String,
    chat_id: Option<i64>,
    event_date: Option<DateTime<Utc>>,
    latitude: f64,
    longitude: f64,
}

impl<'a> EventFactory<'a> {
    /// Creates a new EventFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Event {id}"`
    /// - location: `(55.75, 37.61)`
    /// - event_date: a week from now
    /// - chat_id: `None` (chat pending)
    pub fn new(db: &'a DatabaseConnection, club_id: i32, owner_id: i64) -> Self {
        let id = next_id();
        Self {
            db,
            club_id,
            owner_id,
            name: format!("Event {}", id),
            chat_id: None,
            event_date: None,
            latitude: 55.75,
            longitude: 37.61,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn chat_id(mut self, chat_id: i64) -> Self {
        self.chat_id = Some(chat_id);
        self
    }

    pub fn event_date(mut self, event_date: DateTime<Utc>) -> Self {
        self.event_date = Some(event_date);
        self
    }

    pub fn location(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    /// Builds and inserts the event entity into the database.
    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        let now = Utc::now();
        entity::event::ActiveModel {
            club_id: ActiveValue::Set(self.club_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(String::new()),
            avatar_url: ActiveValue::Set("/static/events/default.jpeg".to_string()),
            owner_id: ActiveValue::Set(self.owner_id),
            chat_id: ActiveValue::Set(self.chat_id),
            participants_count: ActiveValue::Set(0),
            spectators_count: ActiveValue::Set(0),
            event_date: ActiveValue::Set(self.event_date.unwrap_or(now + Duration::days(7))),
            latitude: ActiveValue::Set(self.latitude),
            longitude: ActiveValue::Set(self.longitude),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an event with default values in `club_id`, owned by `owner_id`.
pub async fn create_event(
    db: &DatabaseConnection,
    club_id: i32,
    owner_id: i64,
) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db, club_id, owner_id).build().await
}
