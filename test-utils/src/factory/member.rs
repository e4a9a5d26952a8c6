//! Membership row factories.

use entity::{club_member::ClubMemberStatus, event_member::EventMemberStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a club membership row with the given status.
pub async fn add_club_member(
    db: &DatabaseConnection,
    club_id: i32,
    user_id: i64,
    status: ClubMemberStatus,
) -> Result<entity::club_member::Model, DbErr> {
    entity::club_member::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        club_id: ActiveValue::Set(club_id),
        status: ActiveValue::Set(status),
    }
    .insert(db)
    .await
}

/// Inserts an event membership row with the given status.
pub async fn add_event_member(
    db: &DatabaseConnection,
    event_id: i32,
    user_id: i64,
    status: EventMemberStatus,
) -> Result<entity::event_member::Model, DbErr> {
    entity::event_member::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        event_id: ActiveValue::Set(event_id),
        status: ActiveValue::Set(status),
    }
    .insert(db)
    .await
}
