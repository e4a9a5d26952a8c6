//! Shared helper utilities for factory methods.

use entity::{club_member::ClubMemberStatus, event_member::EventMemberStatus};
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique ids in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an owner and a club with the owner holding the admin membership.
///
/// # Returns
/// - `Ok((owner, club))` - The created user and club
/// - `Err(DbErr)` - Database error during creation
pub async fn create_club_with_admin(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::club::Model), DbErr> {
    let owner = crate::factory::user::create_user(db).await?;
    let club = crate::factory::club::create_club(db, owner.id).await?;
    crate::factory::member::add_club_member(db, club.id, owner.id, ClubMemberStatus::Admin)
        .await?;

    Ok((owner, club))
}

/// Creates an owner, a club and an event in it, with the owner as admin of both.
///
/// # Returns
/// - `Ok((owner, club, event))` - The created user, club and event
/// - `Err(DbErr)` - Database error during creation
pub async fn create_event_with_admin(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::club::Model,
        entity::event::Model,
    ),
    DbErr,
> {
    let (owner, club) = create_club_with_admin(db).await?;
    let event = crate::factory::event::create_event(db, club.id, owner.id).await?;
    crate::factory::member::add_event_member(db, event.id, owner.id, EventMemberStatus::Admin)
        .await?;

    Ok((owner, club, event))
}
