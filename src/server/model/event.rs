//! Event domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::event::{CreateEventDto, EventDetailDto, EventDto},
    server::model::{cursor::Cursor, group::EntityKind, membership::MembershipStatus},
};

/// Avatar assigned to events created without one.
pub const DEFAULT_EVENT_AVATAR: &str = "/static/events/default.jpeg";

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i32,
    pub club_id: i32,
    pub name: String,
    pub description: String,
    pub avatar_url: String,
    pub owner_id: i64,
    pub chat_id: Option<i64>,
    pub participants_count: i32,
    pub spectators_count: i32,
    pub event_date: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
}

impl Event {
    pub fn from_entity(entity: entity::event::Model) -> Self {
        Self {
            id: entity.id,
            club_id: entity.club_id,
            name: entity.name,
            description: entity.description,
            avatar_url: entity.avatar_url,
            owner_id: entity.owner_id,
            chat_id: entity.chat_id,
            participants_count: entity.participants_count,
            spectators_count: entity.spectators_count,
            event_date: entity.event_date,
            latitude: entity.latitude,
            longitude: entity.longitude,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> EventDto {
        EventDto {
            id: self.id,
            club_id: self.club_id,
            name: self.name,
            description: self.description,
            avatar_url: self.avatar_url,
            owner_id: self.owner_id,
            participants_count: self.participants_count,
            spectators_count: self.spectators_count,
            event_date: self.event_date,
            latitude: self.latitude,
            longitude: self.longitude,
            chat_pending: self.chat_id.is_none(),
            created_at: self.created_at,
        }
    }
}

/// An event together with the viewer's status on it.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDetail {
    pub event: Event,
    pub viewer_status: Option<MembershipStatus>,
}

impl EventDetail {
    pub fn into_dto(self) -> EventDetailDto {
        EventDetailDto {
            event: self.event.into_dto(),
            user_status: MembershipStatus::render(self.viewer_status, EntityKind::Event)
                .to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateEventParams {
    pub owner_id: i64,
    pub club_id: i32,
    pub name: String,
    pub description: String,
    pub avatar_url: String,
    pub event_date: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
}

impl CreateEventParams {
    pub fn from_dto(owner_id: i64, dto: CreateEventDto) -> Self {
        Self {
            owner_id,
            club_id: dto.club_id,
            name: dto.name.trim().to_string(),
            description: dto.description,
            avatar_url: dto
                .avatar_url
                .unwrap_or_else(|| DEFAULT_EVENT_AVATAR.to_string()),
            event_date: dto.event_date,
            latitude: dto.latitude,
            longitude: dto.longitude,
        }
    }
}

/// Geographic bounding box, inclusive on all sides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub min_lat: f64,
    pub min_lng: f64,
    pub max_lat: f64,
    pub max_lng: f64,
}

impl GeoBounds {
    /// Builds bounds only when all four coordinates are present.
    pub fn from_parts(
        min_lat: Option<f64>,
        min_lng: Option<f64>,
        max_lat: Option<f64>,
        max_lng: Option<f64>,
    ) -> Option<Self> {
        Some(Self {
            min_lat: min_lat?,
            min_lng: min_lng?,
            max_lat: max_lat?,
            max_lng: max_lng?,
        })
    }
}

/// Event listing filter: substring on the name and an optional bounding box.
#[derive(Debug, Clone, Default)]
pub struct EventQuery {
    pub cursor: Cursor,
    pub query: Option<String>,
    pub bounds: Option<GeoBounds>,
}
