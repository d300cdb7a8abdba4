use super::*;

/// Tests toggling twice restores the original state.
///
/// Expected: false after the first toggle, true after the second
#[tokio::test]
async fn double_toggle_restores_state() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_subscription_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let repo = UserRepository::new(db);

    let toggled = repo.toggle_active(user.id).await?.unwrap();
    assert!(!toggled.is_active);

    let restored = repo.toggle_active(user.id).await?.unwrap();
    assert!(restored.is_active);

    Ok(())
}

/// Tests toggling a missing user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_subscription_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db).toggle_active(999).await?;

    assert!(result.is_none());

    Ok(())
}
