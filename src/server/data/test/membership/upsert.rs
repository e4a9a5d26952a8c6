use super::*;

/// Tests inserting a new membership row.
///
/// Verifies that upserting for a user without a row creates one with the
/// kind-specific follower status.
///
/// Expected: Ok with a single `subscriber` row
#[tokio::test]
async fn creates_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, club) = factory::helpers::create_club_with_admin(db).await?;
    let user = factory::create_user(db).await?;

    let repo = MembershipRepository::new(db);
    repo.upsert(EntityKind::Club, club.id, user.id, MembershipStatus::Follower)
        .await?;

    let row = entity::prelude::ClubMember::find_by_id((user.id, club.id))
        .one(db)
        .await?
        .unwrap();
    assert_eq!(row.status, ClubMemberStatus::Subscriber);

    Ok(())
}

/// Tests that a second upsert for the same pair replaces the status.
///
/// Verifies the (user, entity) pair never holds more than one row.
///
/// Expected: Ok with exactly one row holding the latest status
#[tokio::test]
async fn replaces_status_without_duplicating() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _club, event) = factory::helpers::create_event_with_admin(db).await?;
    let user = factory::create_user(db).await?;

    let repo = MembershipRepository::new(db);
    repo.upsert(
        EntityKind::Event,
        event.id,
        user.id,
        MembershipStatus::ParticipantRequest,
    )
    .await?;
    repo.upsert(
        EntityKind::Event,
        event.id,
        user.id,
        MembershipStatus::Participant,
    )
    .await?;

    let rows = entity::prelude::EventMember::find()
        .all(db)
        .await?
        .into_iter()
        .filter(|row| row.user_id == user.id)
        .collect::<Vec<_>>();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].status, EventMemberStatus::Participant);

    Ok(())
}
