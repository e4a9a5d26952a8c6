use super::*;

/// Tests leaving a club as a participant.
///
/// Expected: Ok with the row removed and participants_count back to 1
#[tokio::test]
async fn removes_row_and_refreshes_counts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let bridge = RecordingBridge::new();

    let (_owner, club) = factory::helpers::create_club_with_admin(db).await?;
    let user = factory::create_user(db).await?;
    factory::add_club_member(db, club.id, user.id, ClubMemberStatus::Participant).await?;

    let service = MembershipService::new(db, &bridge, APP_URL);
    service.leave(EntityKind::Club, club.id, user.id).await?;

    assert_eq!(
        service.get_status(EntityKind::Club, club.id, user.id).await?,
        None
    );
    assert_eq!(club_counts(db, club.id).await?, (1, 0));

    Ok(())
}

/// Tests leaving without a membership row.
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

    let (_owner, _club, event) = factory::helpers::create_event_with_admin(db).await?;
    let stranger = factory::create_user(db).await?;

    let service = MembershipService::new(db, &bridge, APP_URL);
    let result = service.leave(EntityKind::Event, event.id, stranger.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that the admin cannot leave.
///
/// Expected: Err(MembershipError::AdminCannotLeave) and the admin row kept
#[tokio::test]
async fn admin_cannot_leave() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let bridge = RecordingBridge::new();

    let (owner, club) = factory::helpers::create_club_with_admin(db).await?;

    let service = MembershipService::new(db, &bridge, APP_URL);
    let result = service.leave(EntityKind::Club, club.id, owner.id).await;

    assert!(matches!(
        result,
        Err(AppError::MembershipErr(MembershipError::AdminCannotLeave { .. }))
    ));
    assert_eq!(
        service.get_status(EntityKind::Club, club.id, owner.id).await?,
        Some(MembershipStatus::Admin)
    );

    Ok(())
}
