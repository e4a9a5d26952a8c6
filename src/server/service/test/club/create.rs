use super::*;
use crate::server::data::membership::MembershipRepository;

/// Tests creating a club with a working bridge.
///
/// Expected: Ok with the creator as admin, one participant and a provisioned chat
#[tokio::test]
async fn creates_club_with_admin_and_chat() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let bridge = RecordingBridge::new();

    let owner = factory::create_user(db).await?;

    let club = ClubService::new(db, &bridge)
        .create(club_params(owner.id, "Turbo", &["drift"]))
        .await?;

    assert_eq!(club.owner_id, owner.id);
    assert_eq!(club.participants_count, 1);
    assert_eq!(club.subscribers_count, 0);
    assert_eq!(club.chat_id, Some(9000));
    assert_eq!(club.tags, vec!["drift".to_string()]);

    let status = MembershipRepository::new(db)
        .get_status(EntityKind::Club, club.id, owner.id)
        .await?;
    assert_eq!(status, Some(MembershipStatus::Admin));

    Ok(())
}

/// Tests creating a club while the bridge is down.
///
/// Expected: Ok with the club stored and its chat pending
#[tokio::test]
async fn leaves_chat_pending_when_bridge_fails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let bridge = RecordingBridge::failing();

    let owner = factory::create_user(db).await?;

    let club = ClubService::new(db, &bridge)
        .create(club_params(owner.id, "Turbo", &[]))
        .await?;

    assert_eq!(club.chat_id, None);
    assert!(entity::prelude::Club::find_by_id(club.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests that tag usage counts every club carrying the tag.
///
/// Expected: Ok with "drift" used twice and "jdm" once
#[tokio::test]
async fn counts_tag_usage_across_clubs() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let bridge = RecordingBridge::new();

    let owner = factory::create_user(db).await?;
    let service = ClubService::new(db, &bridge);
    service
        .create(club_params(owner.id, "Turbo", &["drift", "jdm"]))
        .await?;
    service
        .create(club_params(owner.id, "Sideways", &["drift"]))
        .await?;

    let tags = service.tags().await?;

    assert_eq!(tags.len(), 2);
    assert_eq!(tags[0].name, "drift");
    assert_eq!(tags[0].usage_count, 2);
    assert_eq!(tags[1].name, "jdm");
    assert_eq!(tags[1].usage_count, 1);

    Ok(())
}

/// Tests creating a club without a name.
///
/// Expected: Err(AppError::BadRequest) and nothing stored
#[tokio::test]
async fn rejects_empty_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let bridge = RecordingBridge::new();

    let owner = factory::create_user(db).await?;

    let result = ClubService::new(db, &bridge)
        .create(club_params(owner.id, "", &[]))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(entity::prelude::Club::find().all(db).await?.is_empty());

    Ok(())
}

/// Tests creating a club whose name cannot title a chat channel.
///
/// Expected: Err(AppError::BadRequest) and nothing stored
#[tokio::test]
async fn rejects_overlong_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let bridge = RecordingBridge::new();

    let owner = factory::create_user(db).await?;
    let name = "x".repeat(101);

    let result = ClubService::new(db, &bridge)
        .create(club_params(owner.id, &name, &[]))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(entity::prelude::Club::find().all(db).await?.is_empty());

    let name = "ж".repeat(100);
    let club = ClubService::new(db, &bridge)
        .create(club_params(owner.id, &name, &[]))
        .await?;
    assert_eq!(club.name, name);

    Ok(())
}
