use super::*;

/// Tests resolving an anonymous viewer.
///
/// Expected: Ok(None)
#[tokio::test]
async fn none_without_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = AuthGuard::new(db, session).optional_user().await?;

    assert!(user.is_none());

    Ok(())
}

/// Tests resolving a logged in viewer.
///
/// Expected: Ok(Some(User))
#[tokio::test]
async fn resolves_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let stored = factory::user::UserFactory::new(db)
        .name("Nikita")
        .build()
        .await?;
    AuthSession::new(session).set_user_id(stored.id).await?;

    let user = AuthGuard::new(db, session).optional_user().await?;

    assert_eq!(user.map(|user| user.name), Some("Nikita".to_string()));

    Ok(())
}

/// Tests that a session pointing at a deleted user reads as anonymous.
///
/// Expected: Ok(None)
#[tokio::test]
async fn deleted_user_reads_as_anonymous() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(777).await?;

    let user = AuthGuard::new(db, session).optional_user().await?;

    assert!(user.is_none());

    Ok(())
}
