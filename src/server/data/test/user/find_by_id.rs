use super::*;

/// Tests finding a stored user and a missing one.
///
/// Expected: Some for the stored id, None otherwise
#[tokio::test]
async fn finds_user_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.upsert(UpsertUserParam {
        id: 7,
        name: "Anna".to_string(),
        surname: "Ivanova".to_string(),
        avatar_url: String::new(),
    })
    .await?;

    assert_eq!(repo.find_by_id(7).await?.map(|user| user.name), Some("Anna".to_string()));
    assert!(repo.find_by_id(8).await?.is_none());

    Ok(())
}
