use super::RecordingBridge;
use crate::server::{
    error::{auth::AuthError, AppError},
    model::{event::CreateEventParams, group::EntityKind, membership::MembershipStatus},
    service::event::EventService,
};
use chrono::{Duration, Utc};
use entity::club_member::ClubMemberStatus;
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};


fn event_params(owner_id: i64, club_id: i32) -> CreateEventParams {
    CreateEventParams {
        owner_id,
        club_id,
        name: "Night run".to_string(),
        description: "Meet at the parking lot".to_string(),
        avatar_url: "/static/events/default.jpeg".to_string(),
        event_date: Utc::now() + Duration::days(7),
        latitude: 55.75,
        longitude: 37.62,
    }
}
