use super::*;

/// Tests that clubs are listed newest first.
///
/// Expected: Ok with ids in descending order
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let first = factory::create_club(db, owner.id).await?;
    let second = factory::create_club(db, owner.id).await?;

    let clubs = ClubRepository::new(db)
        .get_paginated(&ClubQuery::default())
        .await?;

    let ids: Vec<_> = clubs.iter().map(|club| club.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    Ok(())
}

/// Tests that the query matches either the club name or one of its tags.
///
/// Expected: Ok with the name match and the tag match, not the unrelated club
#[tokio::test]
async fn matches_name_or_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let repo = ClubRepository::new(db);

    let by_name = repo.create(&club_params(owner.id, "Rally Crew")).await?;
    let by_tag = repo.create(&club_params(owner.id, "Gravel Friends")).await?;
    repo.attach_tags(by_tag.id, &["rally".to_string()]).await?;
    repo.create(&club_params(owner.id, "Track Day")).await?;

    let clubs = repo
        .get_paginated(&ClubQuery {
            cursor: Cursor::default(),
            query: Some("ally".to_string()),
        })
        .await?;

    let ids: Vec<_> = clubs.iter().map(|club| club.id).collect();
    assert_eq!(ids, vec![by_tag.id, by_name.id]);
    assert_eq!(clubs[0].tags, vec!["rally".to_string()]);

    Ok(())
}

/// Tests the limit and the `id_lte` bound.
///
/// Expected: Ok with a single club, the newest that is not above the bound
#[tokio::test]
async fn applies_cursor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let first = factory::create_club(db, owner.id).await?;
    let second = factory::create_club(db, owner.id).await?;
    factory::create_club(db, owner.id).await?;

    let clubs = ClubRepository::new(db)
        .get_paginated(&ClubQuery {
            cursor: Cursor::new(None, Some(second.id as i64), Some(1)),
            query: None,
        })
        .await?;

    assert_eq!(clubs.len(), 1);
    assert_eq!(clubs[0].id, second.id);
    assert_ne!(clubs[0].id, first.id);

    Ok(())
}
