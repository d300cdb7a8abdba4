use super::*;

/// Tests listing skips deleted members and other owners' gyms.
///
/// Expected: only the active member of the requested gym
#[tokio::test]
async fn returns_members_of_given_gyms_only() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _plan, gym) = factory::helpers::create_gym_with_owner(db).await?;
    let (_other_owner, _other_plan, other_gym) =
        factory::helpers::create_gym_with_owner(db).await?;

    let (_user, kept, _fee) = factory::member::create_member(db, gym.id).await?;
    factory::member::MemberFactory::new(db, gym.id)
        .deleted(true)
        .build()
        .await?;
    factory::member::create_member(db, other_gym.id).await?;

    let repo = MemberRepository::new(db);
    let members = repo.get_by_gyms(&[gym.id]).await?;

    assert_eq!(members.len(), 1);
    assert_eq!(members[0].id, kept.id);
    assert_eq!(repo.count_in_gyms(&[gym.id]).await?, 1);
    assert_eq!(repo.count_all().await?, 2);
    assert!(repo.get_by_gyms(&[]).await?.is_empty());

    Ok(())
}

/// Tests the latest fee is the one with the latest end date.
///
/// Expected: the renewal fee is attached after renewing
#[tokio::test]
async fn attaches_latest_fee() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _plan, gym) = factory::helpers::create_gym_with_owner(db).await?;
    let (_user, member, first_fee) = factory::member::create_member(db, gym.id).await?;

    let renewal = crate::server::data::membership_fee::MembershipFeeRepository::new(db)
        .create(
            member.id,
            NewFeeParams {
                amount: 60.0,
                start_date: first_fee.end_date,
                end_date: first_fee.end_date + Duration::days(30),
            },
        )
        .await?;

    let found = MemberRepository::new(db)
        .find_in_gyms(member.id, &[gym.id])
        .await?
        .unwrap();

    assert_eq!(found.latest_fee.unwrap().id, renewal.id);

    Ok(())
}

/// Tests a member outside the owner's gyms is not found.
///
/// Expected: Ok(None)
#[tokio::test]
async fn find_in_gyms_respects_scope() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _plan, gym) = factory::helpers::create_gym_with_owner(db).await?;
    let (_other_owner, _other_plan, other_gym) =
        factory::helpers::create_gym_with_owner(db).await?;
    let (_user, member, _fee) = factory::member::create_member(db, gym.id).await?;

    let found = MemberRepository::new(db)
        .find_in_gyms(member.id, &[other_gym.id])
        .await?;

    assert!(found.is_none());

    Ok(())
}
