use super::*;

/// Tests todos are private to their user.
///
/// Expected: another user can neither toggle nor delete the todo
#[tokio::test]
async fn rejects_other_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let todo = factory::todo::create_todo(db, owner.id).await?;

    let repo = TodoRepository::new(db);

    assert!(repo.toggle_completed(todo.id, other.id).await?.is_none());
    assert!(!repo.soft_delete(todo.id, other.id).await?);
    assert!(repo.get_by_user(other.id).await?.is_empty());
    assert_eq!(repo.get_by_user(owner.id).await?.len(), 1);

    Ok(())
}

/// Tests toggling completion and deleting as the owner.
///
/// Expected: completed flips, deleted todo disappears from the list
#[tokio::test]
async fn toggles_and_deletes_own_todo() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let todo = factory::todo::create_todo(db, user.id).await?;
    factory::todo::create_todo_with(db, user.id, true, true).await?;

    let repo = TodoRepository::new(db);

    let toggled = repo.toggle_completed(todo.id, user.id).await?.unwrap();
    assert!(toggled.completed);

    assert_eq!(repo.get_by_user(user.id).await?.len(), 1);
    assert!(repo.soft_delete(todo.id, user.id).await?);
    assert!(repo.get_by_user(user.id).await?.is_empty());

    Ok(())
}

/// Tests toggling completion twice.
///
/// Expected: completed after the first toggle, open again after the second
#[tokio::test]
async fn toggle_twice_reopens_todo() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let todo = factory::todo::create_todo(db, user.id).await?;

    let repo = TodoRepository::new(db);

    assert!(repo.toggle_completed(todo.id, user.id).await?.unwrap().completed);
    assert!(!repo.toggle_completed(todo.id, user.id).await?.unwrap().completed);

    Ok(())
}
