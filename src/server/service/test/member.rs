use super::*;
use crate::server::{
    model::member::{CreateMemberParams, NewFeeParams, UpdateMemberParams},
    service::member::MemberService,
};

fn member_params(gym_id: i32, email: &str) -> CreateMemberParams {
    let now = Utc::now();

    CreateMemberParams {
        gym_id,
        name: "Sam Squat".to_string(),
        email: email.to_string(),
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

/// Tests adding a member to another owner's gym.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_gym_of_other_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _plan, gym) = factory::helpers::create_gym_with_owner(db).await?;
    let (intruder, _) = factory::helpers::create_owner_with_subscription(db).await?;
    let intruder = load_user(db, intruder.id).await?;

    let result = MemberService::new(db)
        .create(&intruder, member_params(gym.id, "sam@example.com"))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests an email already used by a deleted account is still rejected.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_email_of_deleted_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _plan, gym) = factory::helpers::create_gym_with_owner(db).await?;
    factory::user::UserFactory::new(db)
        .email("reused@example.com")
        .deleted(true)
        .build()
        .await?;
    let owner = load_user(db, owner.id).await?;

    let result = MemberService::new(db)
        .create(&owner, member_params(gym.id, "reused@example.com"))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests updating a member to another account's email.
///
/// Expected: Err(AppError::BadRequest) and the email unchanged
#[tokio::test]
async fn rejects_duplicate_email_on_update() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _plan, gym) = factory::helpers::create_gym_with_owner(db).await?;
    let (user, member, _fee) = factory::member::create_member(db, gym.id).await?;
    let (other_user, _other, _fee) = factory::member::create_member(db, gym.id).await?;

    let service = MemberService::new(db);
    let result = service
        .update(
            owner.id,
            UpdateMemberParams {
                id: member.id,
                name: None,
                email: Some(other_user.email.clone()),
                phone: None,
                address: None,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let stored = service.get_owned(member.id, owner.id).await?.unwrap();
    assert_eq!(stored.user.email, user.email);

    Ok(())
}

/// Tests renewing appends a fee that becomes the latest.
///
/// Expected: two fees in history, renewal first
#[tokio::test]
async fn renew_appends_fee() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _plan, gym) = factory::helpers::create_gym_with_owner(db).await?;
    let (_user, member, fee) = factory::member::create_member(db, gym.id).await?;

    let service = MemberService::new(db);
    let renewal = service
        .renew(
            member.id,
            owner.id,
            NewFeeParams {
                amount: 35.0,
                start_date: fee.end_date,
                end_date: fee.end_date + Duration::days(30),
            },
        )
        .await?
        .unwrap();

    let history = service.fees(member.id, owner.id).await?.unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].id, renewal.id);

    Ok(())
}

/// Tests another owner cannot toggle, delete or renew a member.
///
/// Expected: None / false for every call
#[tokio::test]
async fn hides_member_from_other_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _plan, gym) = factory::helpers::create_gym_with_owner(db).await?;
    let (intruder, _) = factory::helpers::create_owner_with_subscription(db).await?;
    let (_user, member, _fee) = factory::member::create_member(db, gym.id).await?;

    let service = MemberService::new(db);

    assert!(service.toggle_status(member.id, intruder.id).await?.is_none());
    assert!(!service.delete(member.id, intruder.id).await?);
    assert!(service.fees(member.id, intruder.id).await?.is_none());

    Ok(())
}

/// Tests toggling a member's status twice.
///
/// Expected: inactive after the first toggle, active again after the second
#[tokio::test]
async fn toggle_twice_restores_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _plan, gym) = factory::helpers::create_gym_with_owner(db).await?;
    let (_user, member, _fee) = factory::member::create_member(db, gym.id).await?;

    let service = MemberService::new(db);

    let toggled = service.toggle_status(member.id, owner.id).await?.unwrap();
    assert!(!toggled.is_active);

    let restored = service.toggle_status(member.id, owner.id).await?.unwrap();
    assert!(restored.is_active);

    Ok(())
}
