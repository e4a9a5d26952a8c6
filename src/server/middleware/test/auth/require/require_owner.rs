use super::*;

/// Tests the recorded owner passing the owner check.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_to_owner() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (owner, _club, event) = factory::helpers::create_event_with_admin(db).await?;

    AuthSession::new(session).set_user_id(owner.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let user = auth_guard
        .require(&[Permission::Owner(EntityKind::Event, event.id)])
        .await?;

    assert_eq!(user.id, owner.id);

    Ok(())
}

/// Tests that an admin membership alone does not make a user the owner.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn admin_without_ownership_is_denied() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let owner = factory::create_user(db).await?;
    let club = factory::create_club(db, owner.id).await?;
    let admin = factory::create_user(db).await?;
    factory::add_club_member(db, club.id, admin.id, ClubMemberStatus::Admin).await?;

    AuthSession::new(session).set_user_id(admin.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard
        .require(&[Permission::Owner(EntityKind::Club, club.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
