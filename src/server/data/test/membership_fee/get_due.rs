use super::*;

/// Tests only ended, un-notified fees of live members are due.
///
/// Expected: exactly the expired fee, with member and gym names attached
#[tokio::test]
async fn returns_expired_unnotified_fees() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc::now();

    let (_owner, _plan, gym) = factory::helpers::create_gym_with_owner(db).await?;

    let (user, _member, due_fee) = factory::member::MemberFactory::new(db, gym.id)
        .fee_end(now - Duration::days(1))
        .build()
        .await?;
    // Still running
    factory::member::create_member(db, gym.id).await?;
    // Already notified
    factory::member::MemberFactory::new(db, gym.id)
        .fee_end(now - Duration::days(2))
        .notified(true)
        .build()
        .await?;
    // Deleted member
    factory::member::MemberFactory::new(db, gym.id)
        .fee_end(now - Duration::days(3))
        .deleted(true)
        .build()
        .await?;

    let due = MembershipFeeRepository::new(db).get_due(now).await?;

    assert_eq!(due.len(), 1);
    assert_eq!(due[0].fee.id, due_fee.id);
    assert_eq!(due[0].member_email, user.email);
    assert_eq!(due[0].gym_name, gym.name);

    Ok(())
}

/// Tests a fee ending exactly now counts as due.
///
/// Expected: one due fee
#[tokio::test]
async fn includes_fee_ending_now() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc::now();

    let (_owner, _plan, gym) = factory::helpers::create_gym_with_owner(db).await?;
    factory::member::MemberFactory::new(db, gym.id)
        .fee_end(now)
        .build()
        .await?;

    let due = MembershipFeeRepository::new(db).get_due(now).await?;

    assert_eq!(due.len(), 1);

    Ok(())
}
