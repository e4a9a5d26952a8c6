use super::*;

/// Tests that an event resolves with its parent club.
///
/// Expected: Ok(Some(Group)) carrying the club id and pending chat
#[tokio::test]
async fn finds_event_with_parent_club() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, club, event) = factory::helpers::create_event_with_admin(db).await?;

    let group = GroupRepository::new(db)
        .find(EntityKind::Event, event.id)
        .await?
        .unwrap();

    assert_eq!(group.kind, EntityKind::Event);
    assert_eq!(group.owner_id, owner.id);
    assert_eq!(group.parent_club_id, Some(club.id));
    assert_eq!(group.chat_id, None);

    Ok(())
}

/// Tests lookup of a missing club.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_club() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = GroupRepository::new(db).find(EntityKind::Club, 404).await?;

    assert!(group.is_none());

    Ok(())
}
