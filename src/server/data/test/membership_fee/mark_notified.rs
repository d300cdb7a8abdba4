use super::*;

/// Tests a fee is marked notified exactly once.
///
/// Expected: true, then false, and the fee is no longer due
#[tokio::test]
async fn marks_fee_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc::now();

    let (_owner, _plan, gym) = factory::helpers::create_gym_with_owner(db).await?;
    let (_user, member, fee) = factory::member::MemberFactory::new(db, gym.id)
        .fee_end(now - Duration::hours(1))
        .build()
        .await?;

    let repo = MembershipFeeRepository::new(db);

    assert!(repo.mark_notified(fee.id).await?);
    assert!(!repo.mark_notified(fee.id).await?);
    assert!(repo.get_due(now).await?.is_empty());

    let history = repo.get_by_member(member.id).await?;
    assert!(history[0].notified);
    assert!(history[0].is_expired);

    Ok(())
}
