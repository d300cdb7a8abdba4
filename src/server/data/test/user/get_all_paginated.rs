use super::*;

/// Tests pagination across multiple pages.
///
/// Verifies the page holds `per_page` users and the counts cover every
/// non-deleted user.
///
/// Expected: Ok with 2 users per page, 5 total, 3 pages
#[tokio::test]
async fn returns_requested_page() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_subscription_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::user::create_user(db).await?;
    }

    let repo = UserRepository::new(db);

    let first = repo.get_all_paginated(None, 0, 2).await?;
    assert_eq!(first.users.len(), 2);
    assert_eq!(first.total, 5);
    assert_eq!(first.total_pages, 3);

    let last = repo.get_all_paginated(None, 2, 2).await?;
    assert_eq!(last.users.len(), 1);
    assert_eq!(last.page, 2);

    Ok(())
}

/// Tests the role filter and soft-delete filter together.
///
/// Expected: Ok with only the non-deleted owner
#[tokio::test]
async fn filters_by_role_and_skips_deleted() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_subscription_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user_with_role(db, "OWNER").await?;
    factory::user::UserFactory::new(db)
        .role("OWNER")
        .deleted(true)
        .build()
        .await?;
    factory::user::create_user_with_role(db, "MEMBER").await?;

    let page = UserRepository::new(db)
        .get_all_paginated(Some(Role::Owner), 0, 10)
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.users.len(), 1);
    assert_eq!(page.users[0].id, owner.id);

    Ok(())
}

/// Tests pagination over an empty table.
///
/// Expected: Ok with no users and zero counts
#[tokio::test]
async fn returns_empty_page_without_users() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_subscription_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let page = UserRepository::new(db).get_all_paginated(None, 0, 10).await?;

    assert!(page.users.is_empty());
    assert_eq!(page.total, 0);
    assert_eq!(page.total_pages, 0);

    Ok(())
}
