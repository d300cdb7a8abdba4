use super::*;

/// Tests creating a gym for an owner.
///
/// Expected: Ok with an active gym owned by the owner
#[tokio::test]
async fn creates_active_gym() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _plan) = factory::helpers::create_owner_with_subscription(db).await?;

    let gym = GymRepository::new(db)
        .create(CreateGymParams {
            owner_id: owner.id,
            name: "Iron Temple".to_string(),
            address: Some("1 Main St".to_string()),
            phone: None,
            email: None,
        })
        .await?;

    assert_eq!(gym.owner_id, owner.id);
    assert_eq!(gym.name, "Iron Temple");
    assert!(gym.is_active);

    let ids = GymRepository::new(db).get_ids_by_owner(owner.id).await?;
    assert_eq!(ids, vec![gym.id]);

    Ok(())
}
