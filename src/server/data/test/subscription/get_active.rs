use super::*;

/// Tests the public plan list hides inactive and deleted plans.
///
/// Expected: active plans only, cheapest first
#[tokio::test]
async fn lists_active_plans_by_price() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_subscription_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SubscriptionRepository::new(db);
    let pro = repo.create(plan_params("Pro", 99.0, vec![])).await?;
    let basic = repo.create(plan_params("Basic", 19.0, vec![])).await?;
    let paused = repo.create(plan_params("Paused", 5.0, vec![])).await?;
    let gone = repo.create(plan_params("Gone", 1.0, vec![])).await?;

    repo.toggle_active(paused.id).await?;
    repo.soft_delete(gone.id).await?;

    let active: Vec<i32> = repo.get_active().await?.iter().map(|p| p.id).collect();
    assert_eq!(active, vec![basic.id, pro.id]);

    let all = repo.get_all().await?;
    assert_eq!(all.len(), 3);
    assert_eq!(repo.count_active().await?, 2);

    Ok(())
}
