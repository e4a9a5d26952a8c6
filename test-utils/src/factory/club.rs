//! Club factory for creating test club entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test clubs.
///
/// The created club has no membership rows; pair it with
/// `member::add_club_member` or use `helpers::create_club_with_admin`.
pub struct ClubFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i64,
    name: String,
    description: String,
    chat_id: Option<i64>,
}

impl<'a> ClubFactory<'a> {
    /// Creates a new ClubFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Club {id}"`
    /// - description: `"Description {id}"`
    /// - chat_id: `None` (chat pending)
    pub fn new(db: &'a DatabaseConnection, owner_id: i64) -> Self {
        let id = next_id();
        Self {
            db,
            owner_id,
            name: format!("Club {}", id),
            description: format!("Description {}", id),
            chat_id: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn chat_id(mut self, chat_id: i64) -> Self {
        self.chat_id = Some(chat_id);
        self
    }

    /// Builds and inserts the club entity into the database.
    pub async fn build(self) -> Result<entity::club::Model, DbErr> {
        entity::club::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            avatar_url: ActiveValue::Set("/static/clubs/default.jpeg".to_string()),
            owner_id: ActiveValue::Set(self.owner_id),
            chat_id: ActiveValue::Set(self.chat_id),
            participants_count: ActiveValue::Set(0),
            subscribers_count: ActiveValue::Set(0),
            events_count: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a club with default values owned by `owner_id`.
pub async fn create_club(
    db: &DatabaseConnection,
    owner_id: i64,
) -> Result<entity::club::Model, DbErr> {
    ClubFactory::new(db, owner_id).build().await
}
