use super::*;

/// Tests requesting a chat link while the chat is still pending.
///
/// Expected: Err(ChatError::NoChat)
#[tokio::test]
async fn no_chat_while_pending() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let bridge = RecordingBridge::new();

    let (owner, club) = factory::helpers::create_club_with_admin(db).await?;

    let service = MembershipService::new(db, &bridge, APP_URL);
    let result = service.chat_link(EntityKind::Club, club.id, owner.id).await;

    assert!(matches!(
        result,
        Err(AppError::ChatErr(ChatError::NoChat(EntityKind::Club)))
    ));

    Ok(())
}

/// Tests that subscribers do not get the chat link.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_subscriber() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let bridge = RecordingBridge::new();

    let owner = factory::create_user(db).await?;
    let club = factory::club::ClubFactory::new(db, owner.id)
        .chat_id(55)
        .build()
        .await?;
    let subscriber = factory::create_user(db).await?;
    factory::add_club_member(db, club.id, subscriber.id, ClubMemberStatus::Subscriber).await?;

    let service = MembershipService::new(db, &bridge, APP_URL);
    let result = service
        .chat_link(EntityKind::Club, club.id, subscriber.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that participants get an invite to the provisioned chat.
///
/// Expected: Ok with the invite for the stored chat id
#[tokio::test]
async fn participant_gets_invite() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let bridge = RecordingBridge::new();

    let (owner, club) = factory::helpers::create_club_with_admin(db).await?;
    let event = factory::event::EventFactory::new(db, club.id, owner.id)
        .chat_id(77)
        .build()
        .await?;
    let participant = factory::create_user(db).await?;
    factory::add_event_member(db, event.id, participant.id, EventMemberStatus::Participant)
        .await?;

    let service = MembershipService::new(db, &bridge, APP_URL);
    let link = service
        .chat_link(EntityKind::Event, event.id, participant.id)
        .await?;

    assert_eq!(link, "https://discord.gg/chat-77");

    Ok(())
}
