use super::*;

/// Tests creating a plan links its features.
///
/// Expected: Ok with both features attached
#[tokio::test]
async fn links_features() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_subscription_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::subscription::create_feature(db).await?;
    let b = factory::subscription::create_feature(db).await?;

    let plan = SubscriptionRepository::new(db)
        .create(plan_params("Pro", 49.0, vec![a.id, b.id]))
        .await?;

    let ids: Vec<i32> = plan.features.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![a.id, b.id]);
    assert!(plan.is_active);

    Ok(())
}
