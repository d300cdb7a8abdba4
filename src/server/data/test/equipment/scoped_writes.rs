use super::*;

/// Tests writes outside the owner's gyms leave the row untouched.
///
/// Expected: update, toggle and delete all miss
#[tokio::test]
async fn ignores_equipment_outside_gyms() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _plan, gym) = factory::helpers::create_gym_with_owner(db).await?;
    let (_other, _other_plan, other_gym) = factory::helpers::create_gym_with_owner(db).await?;
    let item = factory::equipment::create_equipment(db, gym.id).await?;

    let repo = EquipmentRepository::new(db);
    let foreign = [other_gym.id];

    let updated = repo
        .update(
            UpdateEquipmentParams {
                id: item.id,
                name: Some("Stolen".to_string()),
                equipment_type: None,
                quantity: None,
                weight: None,
                image_url: None,
            },
            &foreign,
        )
        .await?;
    assert!(updated.is_none());
    assert!(repo.toggle_active(item.id, &foreign).await?.is_none());
    assert!(!repo.soft_delete(item.id, &foreign).await?);

    let stored = repo.find_in_gyms(item.id, &[gym.id]).await?.unwrap();
    assert_eq!(stored.name, item.name);
    assert!(stored.is_active);

    Ok(())
}

/// Tests updating equipment inside the owner's gyms.
///
/// Expected: the type and quantity change
#[tokio::test]
async fn updates_owned_equipment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _plan, gym) = factory::helpers::create_gym_with_owner(db).await?;
    let item = factory::equipment::create_equipment(db, gym.id).await?;

    let updated = EquipmentRepository::new(db)
        .update(
            UpdateEquipmentParams {
                id: item.id,
                name: None,
                equipment_type: Some(EquipmentType::Strength),
                quantity: Some(4),
                weight: None,
                image_url: None,
            },
            &[gym.id],
        )
        .await?
        .unwrap();

    assert_eq!(updated.equipment_type, EquipmentType::Strength);
    assert_eq!(updated.quantity, 4);

    Ok(())
}

/// Tests toggling owned equipment twice.
///
/// Expected: inactive after the first toggle, active again after the second
#[tokio::test]
async fn toggle_twice_restores_active() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _plan, gym) = factory::helpers::create_gym_with_owner(db).await?;
    let item = factory::equipment::create_equipment(db, gym.id).await?;

    let repo = EquipmentRepository::new(db);

    let toggled = repo.toggle_active(item.id, &[gym.id]).await?.unwrap();
    assert!(!toggled.is_active);

    let restored = repo.toggle_active(item.id, &[gym.id]).await?.unwrap();
    assert!(restored.is_active);

    Ok(())
}
