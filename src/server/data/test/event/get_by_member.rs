use super::*;
use chrono::{Duration, Utc};

/// Tests listing the events a user participates in.
///
/// Expected: Ok with the latest event date first, spectated events excluded
#[tokio::test]
async fn lists_events_by_date_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, club) = factory::helpers::create_club_with_admin(db).await?;
    let user = factory::create_user(db).await?;
    let now = Utc::now();
    let later = factory::event::EventFactory::new(db, club.id, owner.id)
        .event_date(now + Duration::days(30))
        .build()
        .await?;
    let sooner = factory::event::EventFactory::new(db, club.id, owner.id)
        .event_date(now + Duration::days(2))
        .build()
        .await?;
    let watched = factory::create_event(db, club.id, owner.id).await?;

    factory::add_event_member(db, sooner.id, user.id, EventMemberStatus::Participant).await?;
    factory::add_event_member(db, later.id, user.id, EventMemberStatus::Participant).await?;
    factory::add_event_member(db, watched.id, user.id, EventMemberStatus::Spectator).await?;

    let events = EventRepository::new(db)
        .get_by_member(user.id, MembershipStatus::Participant, &Cursor::default())
        .await?;

    let ids: Vec<_> = events.iter().map(|event| event.id).collect();
    assert_eq!(ids, vec![later.id, sooner.id]);

    Ok(())
}
