//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::user::{SignupDto, UserDto};

/// A registered user, identified by their external (Discord) id.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub avatar_url: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            surname: self.surname,
            avatar_url: self.avatar_url,
        }
    }

    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            surname: entity.surname,
            avatar_url: entity.avatar_url,
            created_at: entity.created_at,
        }
    }
}

/// Public card of a member, as returned by roster listings.
#[derive(Debug, Clone, PartialEq)]
pub struct UserSummary {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub avatar_url: String,
}

impl UserSummary {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            surname: self.surname,
            avatar_url: self.avatar_url,
        }
    }

    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            surname: entity.surname,
            avatar_url: entity.avatar_url,
        }
    }
}

/// Parameters for registering a user or refreshing their profile.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub avatar_url: String,
}

impl UpsertUserParam {
    pub fn from_dto(dto: SignupDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            surname: dto.surname,
            avatar_url: dto.avatar_url.unwrap_or_default(),
        }
    }
}
