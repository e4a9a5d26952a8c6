use super::*;

/// Tests listing the events of one club.
///
/// Expected: Ok with the club's events newest first, other clubs excluded
#[tokio::test]
async fn lists_events_of_club() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, club) = factory::helpers::create_club_with_admin(db).await?;
    let other = factory::create_club(db, owner.id).await?;
    let first = factory::create_event(db, club.id, owner.id).await?;
    factory::create_event(db, other.id, owner.id).await?;
    let second = factory::create_event(db, club.id, owner.id).await?;

    let events = EventRepository::new(db)
        .get_by_club(club.id, &Cursor::default())
        .await?;

    let ids: Vec<_> = events.iter().map(|event| event.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    Ok(())
}
