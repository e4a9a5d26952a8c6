use super::*;

/// Tests deleting an existing membership row.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_existing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, club) = factory::helpers::create_club_with_admin(db).await?;
    let user = factory::create_user(db).await?;
    factory::add_club_member(db, club.id, user.id, ClubMemberStatus::Subscriber).await?;

    let repo = MembershipRepository::new(db);
    let deleted = repo.delete(EntityKind::Club, club.id, user.id).await?;

    assert!(deleted);
    assert_eq!(repo.get_status(EntityKind::Club, club.id, user.id).await?, None);

    Ok(())
}

/// Tests deleting a row that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, club) = factory::helpers::create_club_with_admin(db).await?;
    let user = factory::create_user(db).await?;

    let repo = MembershipRepository::new(db);
    let deleted = repo.delete(EntityKind::Club, club.id, user.id).await?;

    assert!(!deleted);

    Ok(())
}

/// Tests deleting every membership row of an entity.
///
/// Expected: Ok(2) and no rows left for the club
#[tokio::test]
async fn deletes_all_rows_of_entity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, club) = factory::helpers::create_club_with_admin(db).await?;
    let user = factory::create_user(db).await?;
    factory::add_club_member(db, club.id, user.id, ClubMemberStatus::Participant).await?;

    let repo = MembershipRepository::new(db);
    let deleted = repo.delete_all(EntityKind::Club, club.id).await?;

    assert_eq!(deleted, 2);
    assert_eq!(entity::prelude::ClubMember::find().count(db).await?, 0);

    Ok(())
}
