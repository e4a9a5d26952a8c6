//! Operations shared by clubs and events that are not membership transitions.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::group::GroupRepository,
    error::AppError,
    model::group::{EntityKind, MAX_NAME_CHARS},
    service::authorization::AuthorizationGate,
};

/// Rejects names that are empty or too long to title a group chat.
pub fn validate_name(kind: EntityKind, name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::BadRequest(format!("The {kind} name must not be empty")));
    }
    if name.chars().count() > MAX_NAME_CHARS {
        return Err(AppError::BadRequest(format!(
            "The {kind} name must be at most {MAX_NAME_CHARS} characters"
        )));
    }

    Ok(())
}

pub struct GroupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Replaces the avatar url. Owner only.
    pub async fn update_avatar(
        &self,
        kind: EntityKind,
        entity_id: i32,
        acting_user_id: i64,
        avatar_url: String,
    ) -> Result<(), AppError> {
        let avatar_url = avatar_url.trim();
        if avatar_url.is_empty() {
            return Err(AppError::BadRequest("Avatar url must not be empty".to_string()));
        }

        AuthorizationGate::new(self.db)
            .require_owner(kind, entity_id, acting_user_id)
            .await?;

        GroupRepository::new(self.db)
            .set_avatar(kind, entity_id, avatar_url)
            .await?;

        Ok(())
    }
}
