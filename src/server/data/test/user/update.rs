use super::*;

/// Tests a partial update only touches the given columns.
///
/// Expected: name and phone changed, email and password hash unchanged
#[tokio::test]
async fn applies_only_given_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_subscription_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let updated = UserRepository::new(db)
        .update(UpdateUserParams {
            id: user.id,
            name: Some("Renamed".to_string()),
            phone: Some("555-0100".to_string()),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.phone.as_deref(), Some("555-0100"));
    assert_eq!(updated.email, user.email);

    let stored = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.password_hash, user.password_hash);

    Ok(())
}

/// Tests updating a soft-deleted user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_deleted_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_subscription_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db).deleted(true).build().await?;

    let result = UserRepository::new(db)
        .update(UpdateUserParams {
            id: user.id,
            name: Some("Renamed".to_string()),
            ..Default::default()
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
