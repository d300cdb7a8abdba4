use super::*;

/// Tests an allowed role passes the guard.
///
/// Expected: Ok(User) matching the session user
#[tokio::test]
async fn grants_access_to_allowed_role() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_subscription_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let owner = factory::user::create_user_with_role(db, "OWNER").await?;
    AuthSession::new(session)
        .sign_in(owner.id, Role::Owner, None)
        .await?;

    let user = AuthGuard::new(db, session).require(&[Role::Owner]).await?;

    assert_eq!(user.id, owner.id);
    assert_eq!(user.role, Role::Owner);

    Ok(())
}

/// Tests an empty role list admits any signed-in user.
///
/// Expected: Ok(User)
#[tokio::test]
async fn empty_role_list_grants_any_role() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_subscription_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let member = factory::user::create_user_with_role(db, "MEMBER").await?;
    AuthSession::new(session)
        .sign_in(member.id, Role::Member, None)
        .await?;

    let user = AuthGuard::new(db, session).require(&[]).await?;

    assert_eq!(user.id, member.id);

    Ok(())
}

/// Tests a request without a session user is rejected.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn rejects_missing_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_subscription_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a session pointing at a soft-deleted user is rejected.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_deleted_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_subscription_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .role("OWNER")
        .deleted(true)
        .build()
        .await?;
    AuthSession::new(session)
        .sign_in(user.id, Role::Owner, None)
        .await?;

    let result = AuthGuard::new(db, session).require(&[Role::Owner]).await;

    match result {
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(id))) => assert_eq!(id, user.id),
        other => panic!("Expected UserNotInDatabase, got: {:?}", other.map(|u| u.id)),
    }

    Ok(())
}

/// Tests a deactivated user is forbidden even with a matching role.
///
/// Expected: Err(AuthError::AccountDisabled)
#[tokio::test]
async fn rejects_inactive_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_subscription_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .role("OWNER")
        .active(false)
        .build()
        .await?;
    AuthSession::new(session)
        .sign_in(user.id, Role::Owner, None)
        .await?;

    let result = AuthGuard::new(db, session).require(&[Role::Owner]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccountDisabled(_)))
    ));

    Ok(())
}

/// Tests a role outside the allow-list is forbidden.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn rejects_disallowed_role() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_subscription_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let member = factory::user::create_user_with_role(db, "MEMBER").await?;
    AuthSession::new(session)
        .sign_in(member.id, Role::Member, None)
        .await?;

    let result = AuthGuard::new(db, session)
        .require(&[Role::Superadmin, Role::Owner])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(id, message))) => {
            assert_eq!(id, member.id);
            assert!(message.contains("MEMBER"));
        }
        other => panic!("Expected AccessDenied, got: {:?}", other.map(|u| u.id)),
    }

    Ok(())
}

/// Tests the guard trusts the database role over the session claim.
///
/// Expected: Err(AuthError::AccessDenied) for a member whose session claims OWNER
#[tokio::test]
async fn uses_database_role_not_session_claim() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_subscription_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let member = factory::user::create_user_with_role(db, "MEMBER").await?;
    AuthSession::new(session)
        .sign_in(member.id, Role::Owner, None)
        .await?;

    let result = AuthGuard::new(db, session).require(&[Role::Owner]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
