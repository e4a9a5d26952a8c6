use super::*;

/// Tests approving a pending request.
///
/// Expected: Ok(Participant), counters updated and the requester notified
#[tokio::test]
async fn approve_promotes_to_participant() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let bridge = RecordingBridge::new();

    let (owner, club) = factory::helpers::create_club_with_admin(db).await?;
    let user = factory::create_user(db).await?;
    factory::add_club_member(db, club.id, user.id, ClubMemberStatus::ParticipantRequest)
        .await?;

    let service = MembershipService::new(db, &bridge, APP_URL);
    let status = service
        .resolve_request(EntityKind::Club, club.id, owner.id, user.id, Decision::Approve)
        .await?;

    assert_eq!(status, MembershipStatus::Participant);
    assert_eq!(club_counts(db, club.id).await?, (2, 0));
    assert_eq!(
        bridge.notifications(),
        vec![(
            user.id,
            format!("The administrator accepted you into {}: {}", club.name, APP_URL)
        )]
    );

    Ok(())
}

/// Tests that rejecting keeps the requester as a subscriber.
///
/// The row is downgraded, never deleted.
///
/// Expected: Ok(Follower) with the row rendered as `subscriber`
#[tokio::test]
async fn reject_downgrades_request_to_follower() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let bridge = RecordingBridge::new();

    let (owner, club) = factory::helpers::create_club_with_admin(db).await?;
    let user = factory::create_user(db).await?;
    factory::add_club_member(db, club.id, user.id, ClubMemberStatus::ParticipantRequest)
        .await?;

    let service = MembershipService::new(db, &bridge, APP_URL);
    service
        .resolve_request(EntityKind::Club, club.id, owner.id, user.id, Decision::Reject)
        .await?;

    let row = entity::prelude::ClubMember::find_by_id((user.id, club.id))
        .one(db)
        .await?
        .unwrap();
    assert_eq!(row.status, ClubMemberStatus::Subscriber);
    assert_eq!(club_counts(db, club.id).await?, (1, 1));
    assert_eq!(
        bridge.notifications(),
        vec![(
            user.id,
            format!(
                "Unfortunately the administrator declined your request to participate in {}: {}",
                club.name, APP_URL
            )
        )]
    );

    Ok(())
}

/// Tests that rejecting an event request leaves a spectator.
///
/// Expected: Ok with the row stored as `spectator`
#[tokio::test]
async fn reject_on_event_leaves_spectator() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let bridge = RecordingBridge::new();

    let (owner, _club, event) = factory::helpers::create_event_with_admin(db).await?;
    let user = factory::create_user(db).await?;
    factory::add_event_member(db, event.id, user.id, EventMemberStatus::ParticipantRequest)
        .await?;

    let service = MembershipService::new(db, &bridge, APP_URL);
    service
        .resolve_request(EntityKind::Event, event.id, owner.id, user.id, Decision::Reject)
        .await?;

    let row = entity::prelude::EventMember::find_by_id((user.id, event.id))
        .one(db)
        .await?
        .unwrap();
    assert_eq!(row.status, EventMemberStatus::Spectator);

    Ok(())
}

/// Tests that only the admin may resolve requests.
///
/// Expected: Err(AuthError::AccessDenied) and the target keeps its request
#[tokio::test]
async fn denies_non_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let bridge = RecordingBridge::new();

    let (_owner, club) = factory::helpers::create_club_with_admin(db).await?;
    let participant = factory::create_user(db).await?;
    let requester = factory::create_user(db).await?;
    factory::add_club_member(db, club.id, participant.id, ClubMemberStatus::Participant).await?;
    factory::add_club_member(
        db,
        club.id,
        requester.id,
        ClubMemberStatus::ParticipantRequest,
    )
    .await?;

    let service = MembershipService::new(db, &bridge, APP_URL);
    let result = service
        .resolve_request(
            EntityKind::Club,
            club.id,
            participant.id,
            requester.id,
            Decision::Approve,
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert_eq!(
        service.get_status(EntityKind::Club, club.id, requester.id).await?,
        Some(MembershipStatus::ParticipantRequest)
    );
    assert!(bridge.notifications().is_empty());

    Ok(())
}

/// Tests resolving a target without a pending request.
///
/// Expected: Err(MembershipError::NotRequested) for a subscriber
#[tokio::test]
async fn conflicts_without_pending_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let bridge = RecordingBridge::new();

    let (owner, club) = factory::helpers::create_club_with_admin(db).await?;
    let user = factory::create_user(db).await?;
    factory::add_club_member(db, club.id, user.id, ClubMemberStatus::Subscriber).await?;

    let service = MembershipService::new(db, &bridge, APP_URL);
    let result = service
        .resolve_request(EntityKind::Club, club.id, owner.id, user.id, Decision::Approve)
        .await;

    assert!(matches!(
        result,
        Err(AppError::MembershipErr(MembershipError::NotRequested { .. }))
    ));

    Ok(())
}

/// Tests resolving a target that has no membership row.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn not_found_without_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let bridge = RecordingBridge::new();

    let (owner, club) = factory::helpers::create_club_with_admin(db).await?;
    let stranger = factory::create_user(db).await?;

    let service = MembershipService::new(db, &bridge, APP_URL);
    let result = service
        .resolve_request(
            EntityKind::Club,
            club.id,
            owner.id,
            stranger.id,
            Decision::Reject,
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests approving while the requester cannot be notified.
///
/// The decision is committed before the notification is sent.
///
/// Expected: Err(AppError::BridgeErr) with the target already participating and counters refreshed
#[tokio::test]
async fn keeps_approval_when_notification_fails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let bridge = RecordingBridge::failing();

    let (owner, club) = factory::helpers::create_club_with_admin(db).await?;
    let user = factory::create_user(db).await?;
    factory::add_club_member(db, club.id, user.id, ClubMemberStatus::ParticipantRequest)
        .await?;

    let service = MembershipService::new(db, &bridge, APP_URL);
    let result = service
        .resolve_request(EntityKind::Club, club.id, owner.id, user.id, Decision::Approve)
        .await;

    assert!(matches!(result, Err(AppError::BridgeErr(_))));
    assert_eq!(
        service.get_status(EntityKind::Club, club.id, user.id).await?,
        Some(MembershipStatus::Participant)
    );
    assert_eq!(club_counts(db, club.id).await?, (2, 0));

    Ok(())
}

/// Tests rejecting an event request while the requester cannot be notified.
///
/// Expected: Err(AppError::BridgeErr) with the target already a spectator and counters refreshed
#[tokio::test]
async fn keeps_rejection_when_notification_fails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let bridge = RecordingBridge::failing();

    let (owner, _club, event) = factory::helpers::create_event_with_admin(db).await?;
    let user = factory::create_user(db).await?;
    factory::add_event_member(db, event.id, user.id, EventMemberStatus::ParticipantRequest)
        .await?;

    let service = MembershipService::new(db, &bridge, APP_URL);
    let result = service
        .resolve_request(EntityKind::Event, event.id, owner.id, user.id, Decision::Reject)
        .await;

    assert!(matches!(result, Err(AppError::BridgeErr(_))));
    assert_eq!(
        service.get_status(EntityKind::Event, event.id, user.id).await?,
        Some(MembershipStatus::Follower)
    );

    let event = entity::prelude::Event::find_by_id(event.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(event.participants_count, 1);
    assert_eq!(event.spectators_count, 1);

    Ok(())
}
