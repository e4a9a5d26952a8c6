//! Club domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::club::{ClubDetailDto, ClubDto, CreateClubDto, TagDto},
    server::model::{
        cursor::Cursor,
        group::EntityKind,
        membership::MembershipStatus,
    },
};

/// Avatar assigned to clubs created without one.
pub const DEFAULT_CLUB_AVATAR: &str = "/static/clubs/default.jpeg";

#[derive(Debug, Clone, PartialEq)]
pub struct Club {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub avatar_url: String,
    pub owner_id: i64,
    pub chat_id: Option<i64>,
    pub tags: Vec<String>,
    pub participants_count: i32,
    pub subscribers_count: i32,
    pub events_count: i32,
    pub created_at: DateTime<Utc>,
}

impl Club {
    pub fn from_entity(entity: entity::club::Model, tags: Vec<String>) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            avatar_url: entity.avatar_url,
            owner_id: entity.owner_id,
            chat_id: entity.chat_id,
            tags,
            participants_count: entity.participants_count,
            subscribers_count: entity.subscribers_count,
            events_count: entity.events_count,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ClubDto {
        ClubDto {
            id: self.id,
            name: self.name,
            description: self.description,
            avatar_url: self.avatar_url,
            owner_id: self.owner_id,
            tags: self.tags,
            participants_count: self.participants_count,
            subscribers_count: self.subscribers_count,
            events_count: self.events_count,
            chat_pending: self.chat_id.is_none(),
            created_at: self.created_at,
        }
    }
}

/// A club together with the viewer's status on it.
#[derive(Debug, Clone, PartialEq)]
pub struct ClubDetail {
    pub club: Club,
    pub viewer_status: Option<MembershipStatus>,
}

impl ClubDetail {
    pub fn into_dto(self) -> ClubDetailDto {
        ClubDetailDto {
            club: self.club.into_dto(),
            user_status: MembershipStatus::render(self.viewer_status, EntityKind::Club)
                .to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateClubParams {
    pub owner_id: i64,
    pub name: String,
    pub description: String,
    pub avatar_url: String,
    pub tags: Vec<String>,
}

impl CreateClubParams {
    /// Builds creation parameters, trimming and deduplicating tag names.
    pub fn from_dto(owner_id: i64, dto: CreateClubDto) -> Self {
        let mut tags: Vec<String> = dto
            .tags
            .into_iter()
            .map(|tag| tag.trim().to_string())
            .filter(|tag| !tag.is_empty())
            .collect();
        tags.sort();
        tags.dedup();

        Self {
            owner_id,
            name: dto.name.trim().to_string(),
            description: dto.description,
            avatar_url: dto
                .avatar_url
                .unwrap_or_else(|| DEFAULT_CLUB_AVATAR.to_string()),
            tags,
        }
    }
}

/// Club listing filter: substring on the name or any tag name.
#[derive(Debug, Clone, Default)]
pub struct ClubQuery {
    pub cursor: Cursor,
    pub query: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub id: i32,
    pub name: String,
    pub usage_count: i32,
}

impl Tag {
    pub fn from_entity(entity: entity::tag::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            usage_count: entity.usage_count,
        }
    }

    pub fn into_dto(self) -> TagDto {
        TagDto {
            id: self.id,
            name: self.name,
            usage_count: self.usage_count,
        }
    }
}
