use super::*;

/// Tests unit totals sum quantities per type and skip deleted rows.
///
/// Expected: CARDIO 3, STRENGTH 5
#[tokio::test]
async fn sums_quantities_per_type() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _plan, gym) = factory::helpers::create_gym_with_owner(db).await?;

    factory::equipment::EquipmentFactory::new(db, gym.id)
        .quantity(2)
        .build()
        .await?;
    factory::equipment::EquipmentFactory::new(db, gym.id)
        .quantity(1)
        .build()
        .await?;
    factory::equipment::EquipmentFactory::new(db, gym.id)
        .equipment_type("STRENGTH")
        .quantity(5)
        .build()
        .await?;
    factory::equipment::EquipmentFactory::new(db, gym.id)
        .equipment_type("STRENGTH")
        .quantity(9)
        .deleted(true)
        .build()
        .await?;

    let units = EquipmentRepository::new(db).units_by_type(&[gym.id]).await?;

    assert_eq!(
        units,
        vec![(EquipmentType::Cardio, 3), (EquipmentType::Strength, 5)]
    );

    Ok(())
}
