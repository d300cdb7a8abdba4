use super::*;
use crate::server::service::user::UserService;

/// Tests a superadmin cannot deactivate or delete themselves.
///
/// Expected: Err(AppError::BadRequest) for both
#[tokio::test]
async fn rejects_self_changes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_subscription_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_user_with_role(db, "SUPERADMIN").await?;
    let admin = load_user(db, admin.id).await?;
    let service = UserService::new(db);

    assert!(matches!(
        service.toggle_status(&admin, admin.id).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.delete(&admin, admin.id).await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}

/// Tests plans can only be assigned to owners.
///
/// Expected: Ok for an owner, BadRequest for a member, NotFound for a missing plan
#[tokio::test]
async fn assigns_plans_to_owners_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_subscription_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let plan = factory::subscription::create_subscription(db).await?;
    let owner = factory::user::create_user_with_role(db, "OWNER").await?;
    let member = factory::user::create_user_with_role(db, "MEMBER").await?;
    let service = UserService::new(db);

    let updated = service
        .assign_subscription(owner.id, Some(plan.id))
        .await?
        .unwrap();
    assert_eq!(updated.subscription_id, Some(plan.id));

    assert!(matches!(
        service.assign_subscription(member.id, Some(plan.id)).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.assign_subscription(owner.id, Some(9999)).await,
        Err(AppError::NotFound(_))
    ));

    let cleared = service.assign_subscription(owner.id, None).await?.unwrap();
    assert_eq!(cleared.subscription_id, None);

    Ok(())
}

/// Tests an oversized page request is clamped.
///
/// Expected: per_page capped at the maximum
#[tokio::test]
async fn clamps_page_size() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_subscription_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;

    let page = UserService::new(db).get_paginated(None, 0, 10_000).await?;

    assert_eq!(page.per_page, crate::server::service::user::MAX_PER_PAGE);
    assert_eq!(page.users.len(), 1);

    Ok(())
}
