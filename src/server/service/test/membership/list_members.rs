use super::*;

/// Tests listing pending requests without a session.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn requests_need_a_viewer() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let bridge = RecordingBridge::new();

    let (_owner, club) = factory::helpers::create_club_with_admin(db).await?;

    let service = MembershipService::new(db, &bridge, APP_URL);
    let result = service
        .list_members(
            EntityKind::Club,
            club.id,
            None,
            MembershipStatus::ParticipantRequest,
            &Cursor::default(),
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests listing pending requests as a participant.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn requests_hidden_from_non_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let bridge = RecordingBridge::new();

    let (_owner, _club, event) = factory::helpers::create_event_with_admin(db).await?;
    let participant = factory::create_user(db).await?;
    factory::add_event_member(db, event.id, participant.id, EventMemberStatus::Participant)
        .await?;

    let service = MembershipService::new(db, &bridge, APP_URL);
    let result = service
        .list_members(
            EntityKind::Event,
            event.id,
            Some(participant.id),
            MembershipStatus::ParticipantRequest,
            &Cursor::default(),
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests the admin listing pending requests.
///
/// Expected: Ok with the requester only
#[tokio::test]
async fn admin_lists_requests() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let bridge = RecordingBridge::new();

    let (owner, club) = factory::helpers::create_club_with_admin(db).await?;
    let requester = factory::create_user(db).await?;
    factory::add_club_member(
        db,
        club.id,
        requester.id,
        ClubMemberStatus::ParticipantRequest,
    )
    .await?;

    let service = MembershipService::new(db, &bridge, APP_URL);
    let users = service
        .list_members(
            EntityKind::Club,
            club.id,
            Some(owner.id),
            MembershipStatus::ParticipantRequest,
            &Cursor::default(),
        )
        .await?;

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, requester.id);

    Ok(())
}

/// Tests that public listings work for anonymous viewers.
///
/// Expected: Ok with the subscriber
#[tokio::test]
async fn anonymous_lists_subscribers() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let bridge = RecordingBridge::new();

    let (_owner, club) = factory::helpers::create_club_with_admin(db).await?;
    let subscriber = factory::create_user(db).await?;
    factory::add_club_member(db, club.id, subscriber.id, ClubMemberStatus::Subscriber).await?;

    let service = MembershipService::new(db, &bridge, APP_URL);
    let users = service
        .list_members(
            EntityKind::Club,
            club.id,
            None,
            MembershipStatus::Follower,
            &Cursor::default(),
        )
        .await?;

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, subscriber.id);

    Ok(())
}
