use super::*;

/// Tests that only the owner may delete a club.
///
/// Expected: Err(AuthError::AccessDenied) and the club kept
#[tokio::test]
async fn denies_non_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let bridge = RecordingBridge::new();

    let (_owner, club) = factory::helpers::create_club_with_admin(db).await?;
    let participant = factory::create_user(db).await?;
    factory::add_club_member(db, club.id, participant.id, ClubMemberStatus::Participant).await?;

    let service = MembershipService::new(db, &bridge, APP_URL);
    let result = service
        .delete_entity(EntityKind::Club, club.id, participant.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert_eq!(entity::prelude::Club::find().count(db).await?, 1);

    Ok(())
}

/// Tests deleting an event as its owner.
///
/// Expected: Ok with the event gone and the club's events_count refreshed
#[tokio::test]
async fn deletes_event_and_refreshes_club() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let bridge = RecordingBridge::new();

    let (owner, club, event) = factory::helpers::create_event_with_admin(db).await?;
    let spectator = factory::create_user(db).await?;
    factory::add_event_member(db, event.id, spectator.id, EventMemberStatus::Spectator).await?;
    entity::prelude::Club::update(entity::club::ActiveModel {
        id: sea_orm::ActiveValue::Unchanged(club.id),
        events_count: sea_orm::ActiveValue::Set(1),
        ..Default::default()
    })
    .exec(db)
    .await?;

    let service = MembershipService::new(db, &bridge, APP_URL);
    service
        .delete_entity(EntityKind::Event, event.id, owner.id)
        .await?;

    assert_eq!(entity::prelude::Event::find().count(db).await?, 0);
    assert_eq!(entity::prelude::EventMember::find().count(db).await?, 0);
    let club = entity::prelude::Club::find_by_id(club.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(club.events_count, 0);

    Ok(())
}

/// Tests deleting a missing club.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn not_found_for_missing_club() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let bridge = RecordingBridge::new();

    let user = factory::create_user(db).await?;

    let service = MembershipService::new(db, &bridge, APP_URL);
    let result = service.delete_entity(EntityKind::Club, 404, user.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
