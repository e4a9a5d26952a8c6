use super::*;

/// Tests listing the events a user spectates.
///
/// Expected: Ok with the spectated event only
#[tokio::test]
async fn lists_spectated_events() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, club, administered) = factory::helpers::create_event_with_admin(db).await?;
    let watched = factory::create_event(db, club.id, owner.id).await?;
    let user = factory::create_user(db).await?;
    factory::add_event_member(db, watched.id, user.id, EventMemberStatus::Spectator).await?;
    factory::add_event_member(db, administered.id, user.id, EventMemberStatus::ParticipantRequest)
        .await?;

    let events = UserService::new(db)
        .events_of(user.id, MembershipStatus::Follower, &Cursor::default())
        .await?;

    let ids: Vec<_> = events.iter().map(|event| event.id).collect();
    assert_eq!(ids, vec![watched.id]);

    Ok(())
}
