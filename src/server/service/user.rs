//! User registration, lookup and profile listings.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{club::ClubRepository, event::EventRepository, user::UserRepository},
    error::AppError,
    model::{
        club::Club,
        cursor::Cursor,
        event::Event,
        membership::MembershipStatus,
        user::{UpsertUserParam, User},
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a user or refreshes their profile.
    ///
    /// # Returns
    /// - `Ok(User)` - The stored user
    /// - `Err(AppError::BadRequest)` - Empty name
    /// - `Err(AppError::DbErr)` - Database error during upsert
    pub async fn signup(&self, param: UpsertUserParam) -> Result<User, AppError> {
        if param.name.trim().is_empty() {
            return Err(AppError::BadRequest("Name must not be empty".to_string()));
        }

        let user = UserRepository::new(self.db).upsert(param).await?;

        tracing::debug!("Upserted user {}", user.id);

        Ok(user)
    }

    /// Retrieves a user by id.
    pub async fn get(&self, user_id: i64) -> Result<Option<User>, AppError> {
        let user = UserRepository::new(self.db).find_by_id(user_id).await?;
        Ok(user)
    }

    /// Clubs where the user holds `status`. Unknown users hold nothing.
    pub async fn clubs_of(
        &self,
        user_id: i64,
        status: MembershipStatus,
        cursor: &Cursor,
    ) -> Result<Vec<Club>, AppError> {
        let clubs = ClubRepository::new(self.db)
            .get_by_member(user_id, status, cursor)
            .await?;
        Ok(clubs)
    }

    /// Events where the user holds `status`. Unknown users hold nothing.
    pub async fn events_of(
        &self,
        user_id: i64,
        status: MembershipStatus,
        cursor: &Cursor,
    ) -> Result<Vec<Event>, AppError> {
        let events = EventRepository::new(self.db)
            .get_by_member(user_id, status, cursor)
            .await?;
        Ok(events)
    }
}
