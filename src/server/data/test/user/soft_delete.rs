use super::*;

/// Tests a deleted user disappears from reads but keeps its email reserved.
///
/// Expected: find_by_id returns None, email_exists stays true
#[tokio::test]
async fn hides_user_but_reserves_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_subscription_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("gone@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    assert!(repo.soft_delete(user.id).await?);

    assert!(repo.find_by_id(user.id).await?.is_none());
    assert!(repo.find_by_email("gone@example.com").await?.is_none());
    assert!(repo.email_exists("gone@example.com").await?);

    Ok(())
}

/// Tests deleting twice only succeeds the first time.
///
/// Expected: true then false
#[tokio::test]
async fn second_delete_reports_missing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_subscription_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let repo = UserRepository::new(db);

    assert!(repo.soft_delete(user.id).await?);
    assert!(!repo.soft_delete(user.id).await?);

    Ok(())
}
