use super::*;
use crate::{
    model::equipment::EquipmentType,
    server::{
        model::{
            equipment::CreateEquipmentParams,
            gym::CreateGymParams,
            member::{CreateMemberParams, NewFeeParams},
        },
        service::{
            equipment::EquipmentService,
            gym::GymService,
            member::MemberService,
            quota::{Quota, QuotaService},
        },
    },
};
use sea_orm::{EntityTrait, PaginatorTrait};

fn gym_params(owner_id: i32) -> CreateGymParams {
    CreateGymParams {
        owner_id,
        name: "Overflow Gym".to_string(),
        address: None,
        phone: None,
        email: None,
    }
}

fn member_params(gym_id: i32) -> CreateMemberParams {
    let now = Utc::now();

    CreateMemberParams {
        gym_id,
        name: "Late Joiner".to_string(),
        email: "late.joiner@example.com".to_string(),
        password_hash: "hash".to_string(),
        phone: None,
        address: None,
        fee: NewFeeParams {
            amount: 35.0,
            start_date: now,
            end_date: now + Duration::days(30),
        },
    }
}

fn equipment_params(gym_id: i32) -> CreateEquipmentParams {
    CreateEquipmentParams {
        gym_id,
        name: "Spare Rower".to_string(),
        equipment_type: EquipmentType::Cardio,
        quantity: 1,
        weight: None,
        image_url: None,
    }
}

/// Tests creating a gym past the plan limit.
///
/// Verifies the quota check runs before the insert, so no row is written.
///
/// Expected: Err(AppError::BadRequest) and the gym count unchanged
#[tokio::test]
async fn rejects_gym_over_quota() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let plan = factory::subscription::SubscriptionFactory::new(db)
        .quotas(1, 5, 5)
        .build()
        .await?;
    let owner = factory::user::UserFactory::new(db)
        .role("OWNER")
        .subscription_id(plan.id)
        .build()
        .await?;
    factory::gym::create_gym(db, owner.id).await?;
    let owner = load_user(db, owner.id).await?;

    let result = GymService::new(db).create(&owner, gym_params(owner.id)).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(entity::prelude::Gym::find().count(db).await?, 1);

    Ok(())
}

/// Tests an owner without a plan cannot create gyms.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn requires_subscription() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user_with_role(db, "OWNER").await?;
    let owner = load_user(db, owner.id).await?;

    let result = QuotaService::new(db)
        .ensure_available(&owner, Quota::Gyms)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests a deactivated plan blocks creation like a missing one.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_inactive_subscription() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let plan = factory::subscription::SubscriptionFactory::new(db)
        .active(false)
        .build()
        .await?;
    let owner = factory::user::UserFactory::new(db)
        .role("OWNER")
        .subscription_id(plan.id)
        .build()
        .await?;
    let owner = load_user(db, owner.id).await?;

    let result = QuotaService::new(db)
        .ensure_available(&owner, Quota::Equipment)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests member quota counts across all of the owner's gyms.
///
/// Expected: Ok below the limit, Err once the limit is reached
#[tokio::test]
async fn counts_members_across_gyms() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let plan = factory::subscription::SubscriptionFactory::new(db)
        .quotas(2, 2, 5)
        .build()
        .await?;
    let owner = factory::user::UserFactory::new(db)
        .role("OWNER")
        .subscription_id(plan.id)
        .build()
        .await?;
    let first = factory::gym::create_gym(db, owner.id).await?;
    let second = factory::gym::create_gym(db, owner.id).await?;
    let owner = load_user(db, owner.id).await?;

    let quota = QuotaService::new(db);

    factory::member::create_member(db, first.id).await?;
    quota.ensure_available(&owner, Quota::Members).await?;

    factory::member::create_member(db, second.id).await?;
    let result = quota.ensure_available(&owner, Quota::Members).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests adding a member past the plan limit.
///
/// Verifies the member, its user account and its first fee are all left unwritten.
///
/// Expected: Err(AppError::BadRequest) and member, user and fee counts unchanged
#[tokio::test]
async fn rejects_member_over_quota() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let plan = factory::subscription::SubscriptionFactory::new(db)
        .quotas(1, 1, 5)
        .build()
        .await?;
    let owner = factory::user::UserFactory::new(db)
        .role("OWNER")
        .subscription_id(plan.id)
        .build()
        .await?;
    let gym = factory::gym::create_gym(db, owner.id).await?;
    factory::member::create_member(db, gym.id).await?;
    let owner = load_user(db, owner.id).await?;

    let members = entity::prelude::Member::find().count(db).await?;
    let users = entity::prelude::User::find().count(db).await?;
    let fees = entity::prelude::MembershipFee::find().count(db).await?;

    let result = MemberService::new(db).create(&owner, member_params(gym.id)).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(entity::prelude::Member::find().count(db).await?, members);
    assert_eq!(entity::prelude::User::find().count(db).await?, users);
    assert_eq!(entity::prelude::MembershipFee::find().count(db).await?, fees);

    Ok(())
}

/// Tests adding equipment past the plan limit.
///
/// Expected: Err(AppError::BadRequest) and the equipment count unchanged
#[tokio::test]
async fn rejects_equipment_over_quota() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let plan = factory::subscription::SubscriptionFactory::new(db)
        .quotas(1, 5, 1)
        .build()
        .await?;
    let owner = factory::user::UserFactory::new(db)
        .role("OWNER")
        .subscription_id(plan.id)
        .build()
        .await?;
    let gym = factory::gym::create_gym(db, owner.id).await?;
    factory::equipment::create_equipment(db, gym.id).await?;
    let owner = load_user(db, owner.id).await?;

    let result = EquipmentService::new(db)
        .create(&owner, equipment_params(gym.id))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(entity::prelude::Equipment::find().count(db).await?, 1);

    Ok(())
}
