use super::*;

/// Tests deleting a club removes its events and every membership row.
///
/// Expected: Ok(true) with no clubs, events or member rows left
#[tokio::test]
async fn deletes_club_with_events_and_members() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, club, event) = factory::helpers::create_event_with_admin(db).await?;
    let user = factory::create_user(db).await?;
    factory::add_club_member(db, club.id, user.id, ClubMemberStatus::Subscriber).await?;
    factory::add_event_member(db, event.id, user.id, EventMemberStatus::Spectator).await?;

    let deleted = GroupRepository::new(db)
        .delete(EntityKind::Club, club.id)
        .await?;

    assert!(deleted);
    assert_eq!(entity::prelude::Club::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Event::find().count(db).await?, 0);
    assert_eq!(entity::prelude::ClubMember::find().count(db).await?, 0);
    assert_eq!(entity::prelude::EventMember::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting an event leaves its club untouched.
///
/// Expected: Ok(true), club and club membership remain
#[tokio::test]
async fn deletes_event_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, club, event) = factory::helpers::create_event_with_admin(db).await?;

    let deleted = GroupRepository::new(db)
        .delete(EntityKind::Event, event.id)
        .await?;

    assert!(deleted);
    assert!(entity::prelude::Club::find_by_id(club.id)
        .one(db)
        .await?
        .is_some());
    assert_eq!(entity::prelude::ClubMember::find().count(db).await?, 1);
    assert_eq!(entity::prelude::EventMember::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting a missing entity.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_entity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = GroupRepository::new(db)
        .delete(EntityKind::Event, 404)
        .await?;

    assert!(!deleted);

    Ok(())
}
