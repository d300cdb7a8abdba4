use super::*;

/// Tests creating a member writes the user, member and fee together.
///
/// Expected: Ok with a MEMBER user and a latest fee attached
#[tokio::test]
async fn creates_user_member_and_fee() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _plan, gym) = factory::helpers::create_gym_with_owner(db).await?;

    let member = MemberRepository::new(db)
        .create(member_params(gym.id, "jane@example.com"))
        .await?;

    assert_eq!(member.gym_id, gym.id);
    assert_eq!(member.user.email, "jane@example.com");
    assert_eq!(member.user.role, crate::model::user::Role::Member);
    let fee = member.latest_fee.unwrap();
    assert_eq!(fee.amount, 40.0);
    assert!(!fee.notified);

    Ok(())
}

/// Tests a failing user insert leaves no member or fee behind.
///
/// Verifies the unique email index aborts the transaction before the member
/// and fee rows are written.
///
/// Expected: Err and no new rows
#[tokio::test]
async fn rolls_back_on_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _plan, gym) = factory::helpers::create_gym_with_owner(db).await?;
    factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;

    let users_before = entity::prelude::User::find().count(db).await?;

    let result = MemberRepository::new(db)
        .create(member_params(gym.id, "taken@example.com"))
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::User::find().count(db).await?, users_before);
    assert_eq!(entity::prelude::Member::find().count(db).await?, 0);
    assert_eq!(entity::prelude::MembershipFee::find().count(db).await?, 0);

    Ok(())
}
