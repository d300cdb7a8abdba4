use super::*;

/// Tests updating features replaces the whole link set.
///
/// Expected: only the new feature remains linked
#[tokio::test]
async fn replaces_feature_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_subscription_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let old = factory::subscription::create_feature(db).await?;
    let new = factory::subscription::create_feature(db).await?;

    let repo = SubscriptionRepository::new(db);
    let plan = repo.create(plan_params("Pro", 49.0, vec![old.id])).await?;

    let updated = repo
        .update(UpdateSubscriptionParams {
            feature_ids: Some(vec![new.id]),
            ..empty_update(plan.id)
        })
        .await?
        .unwrap();

    let ids: Vec<i32> = updated.features.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![new.id]);

    Ok(())
}

/// Tests omitting features keeps the existing links.
///
/// Expected: price changes, features unchanged
#[tokio::test]
async fn keeps_links_when_features_omitted() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_subscription_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let feature = factory::subscription::create_feature(db).await?;

    let repo = SubscriptionRepository::new(db);
    let plan = repo.create(plan_params("Pro", 49.0, vec![feature.id])).await?;

    let updated = repo
        .update(UpdateSubscriptionParams {
            monthly_price: Some(59.0),
            ..empty_update(plan.id)
        })
        .await?
        .unwrap();

    assert_eq!(updated.monthly_price, 59.0);
    assert_eq!(updated.features.len(), 1);

    Ok(())
}

/// Tests updating a missing plan.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_plan() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_subscription_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = SubscriptionRepository::new(db)
        .update(empty_update(404))
        .await?;

    assert!(result.is_none());

    Ok(())
}
