//! User data repository for database operations.

use crate::server::model::user::{UpsertUserParam, User};
use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a user or refreshes the profile fields of an existing one.
    ///
    /// `created_at` is only written on first insert.
    ///
    /// # Arguments
    /// - `param` - Profile data keyed by the user's external id
    ///
    /// # Returns
    /// - `Ok(User)` - The created or updated user
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertUserParam) -> Result<User, DbErr> {
        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            id: ActiveValue::Set(param.id),
            name: ActiveValue::Set(param.name),
            surname: ActiveValue::Set(param.surname),
            avatar_url: ActiveValue::Set(param.avatar_url),
            created_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::Id)
                .update_columns([
                    entity::user::Column::Name,
                    entity::user::Column::Surname,
                    entity::user::Column::AvatarUrl,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }
}
