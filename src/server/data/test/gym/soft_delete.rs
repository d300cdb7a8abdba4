use super::*;

/// Tests deleted gyms drop out of every read and count.
///
/// Expected: only the remaining gym is listed and counted
#[tokio::test]
async fn excludes_deleted_gyms() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _plan, kept) = factory::helpers::create_gym_with_owner(db).await?;
    let removed = factory::gym::create_gym(db, owner.id).await?;

    let repo = GymRepository::new(db);
    assert!(repo.soft_delete(removed.id, owner.id).await?);

    let gyms = repo.get_by_owner(owner.id).await?;
    assert_eq!(gyms.len(), 1);
    assert_eq!(gyms[0].id, kept.id);

    assert_eq!(repo.count_by_owner(owner.id).await?, 1);
    assert_eq!(repo.count_all().await?, 1);
    assert!(repo.find_by_id(removed.id).await?.is_none());

    Ok(())
}
