use super::*;
use crate::{
    model::user::Role,
    server::{
        config::SuperadminConfig,
        error::auth::AuthError,
        model::user::CreateUserParams,
        service::auth::AuthService,
        util::password,
    },
};

fn owner_params(email: &str, password: &str, subscription_id: Option<i32>) -> CreateUserParams {
    CreateUserParams {
        name: "Olive Owner".to_string(),
        email: email.to_string(),
        password_hash: password::hash_password(password).unwrap(),
        role: Role::Owner,
        phone: None,
        address: None,
        subscription_id,
    }
}

/// Tests signing up and then signing in with the same credentials.
///
/// Expected: sign-in returns the created owner
#[tokio::test]
async fn signs_up_and_signs_in() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_subscription_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let plan = factory::subscription::create_subscription(db).await?;
    let service = AuthService::new(db);

    let created = service
        .sign_up(owner_params("olive@example.com", "correct horse", Some(plan.id)))
        .await?;
    assert_eq!(created.role, Role::Owner);
    assert_eq!(created.subscription_id, Some(plan.id));

    let user = service.sign_in("Olive@Example.com", "correct horse").await?;
    assert_eq!(user.id, created.id);

    let wrong = service.sign_in("olive@example.com", "wrong password").await;
    assert!(matches!(
        wrong,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests signing up with a taken email or inactive plan.
///
/// Expected: Err(AppError::BadRequest) for both
#[tokio::test]
async fn rejects_taken_email_and_inactive_plan() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_subscription_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;
    let paused = factory::subscription::SubscriptionFactory::new(db)
        .active(false)
        .build()
        .await?;
    let service = AuthService::new(db);

    let taken = service
        .sign_up(owner_params("taken@example.com", "password123", None))
        .await;
    assert!(matches!(taken, Err(AppError::BadRequest(_))));

    let inactive = service
        .sign_up(owner_params("new@example.com", "password123", Some(paused.id)))
        .await;
    assert!(matches!(inactive, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests a deactivated account cannot sign in.
///
/// Expected: Err(AuthError::AccountDisabled)
#[tokio::test]
async fn rejects_disabled_account() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_subscription_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("off@example.com")
        .password_hash(password::hash_password("password123")?)
        .active(false)
        .build()
        .await?;

    let result = AuthService::new(db)
        .sign_in("off@example.com", "password123")
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccountDisabled(_)))
    ));

    Ok(())
}

/// Tests the configured superadmin is created only once.
///
/// Expected: true on the first call, false afterwards
#[tokio::test]
async fn creates_superadmin_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_subscription_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let config = SuperadminConfig {
        name: "Root".to_string(),
        email: "root@example.com".to_string(),
        password: "super-secret".to_string(),
    };
    let service = AuthService::new(db);

    assert!(service.ensure_superadmin(&config).await?);
    assert!(!service.ensure_superadmin(&config).await?);

    let admin = service.sign_in("root@example.com", "super-secret").await?;
    assert_eq!(admin.role, Role::Superadmin);

    Ok(())
}

/// Tests which gym a fresh session selects and which gyms may be selected.
///
/// Expected: the owner's first gym; a member may only pick their own gym
#[tokio::test]
async fn selects_gyms_by_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _plan, gym) = factory::helpers::create_gym_with_owner(db).await?;
    let (_other, _other_plan, other_gym) = factory::helpers::create_gym_with_owner(db).await?;
    let (member_user, _member, _fee) = factory::member::create_member(db, gym.id).await?;

    let owner = load_user(db, owner.id).await?;
    let member_user = load_user(db, member_user.id).await?;
    let service = AuthService::new(db);

    assert_eq!(service.default_gym(&owner).await?, Some(gym.id));
    assert_eq!(service.default_gym(&member_user).await?, Some(gym.id));

    assert!(service.can_select_gym(&owner, gym.id).await?);
    assert!(!service.can_select_gym(&owner, other_gym.id).await?);
    assert!(service.can_select_gym(&member_user, gym.id).await?);
    assert!(!service.can_select_gym(&member_user, other_gym.id).await?);

    Ok(())
}
