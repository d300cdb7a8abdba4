use super::*;

/// Tests another owner cannot read or change a gym.
///
/// Expected: find_owned, update and toggle_active all return None
#[tokio::test]
async fn scopes_writes_to_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _plan, gym) = factory::helpers::create_gym_with_owner(db).await?;
    let (intruder, _) = factory::helpers::create_owner_with_subscription(db).await?;

    let repo = GymRepository::new(db);

    assert!(repo.find_owned(gym.id, intruder.id).await?.is_none());
    assert!(repo.toggle_active(gym.id, intruder.id).await?.is_none());
    assert!(!repo.soft_delete(gym.id, intruder.id).await?);

    let updated = repo
        .update(UpdateGymParams {
            id: gym.id,
            owner_id: intruder.id,
            name: Some("Hijacked".to_string()),
            address: None,
            phone: None,
            email: None,
        })
        .await?;
    assert!(updated.is_none());

    let stored = repo.find_by_id(gym.id).await?.unwrap();
    assert_eq!(stored.name, gym.name);
    assert!(stored.is_active);

    Ok(())
}

/// Tests toggling twice restores the original state.
///
/// Expected: inactive after one toggle, active after two
#[tokio::test]
async fn double_toggle_restores_state() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _plan, gym) = factory::helpers::create_gym_with_owner(db).await?;
    let repo = GymRepository::new(db);

    assert!(!repo.toggle_active(gym.id, owner.id).await?.unwrap().is_active);
    assert!(repo.toggle_active(gym.id, owner.id).await?.unwrap().is_active);

    Ok(())
}
