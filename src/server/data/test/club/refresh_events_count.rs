use super::*;

/// Tests recomputing the event counter of a club.
///
/// Expected: events_count equals the number of the club's events
#[tokio::test]
async fn counts_club_events() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, club) = factory::helpers::create_club_with_admin(db).await?;
    let other = factory::create_club(db, owner.id).await?;
    factory::create_event(db, club.id, owner.id).await?;
    factory::create_event(db, club.id, owner.id).await?;
    factory::create_event(db, other.id, owner.id).await?;

    ClubRepository::new(db).refresh_events_count(club.id).await?;

    let club = entity::prelude::Club::find_by_id(club.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(club.events_count, 2);

    Ok(())
}
