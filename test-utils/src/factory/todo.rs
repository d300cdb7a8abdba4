//! Todo factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an open todo titled `"Todo {id}"` for the user.
pub async fn create_todo(db: &DatabaseConnection, user_id: i32) -> Result<entity::todo::Model, DbErr> {
    create_todo_with(db, user_id, false, false).await
}

/// Creates a todo with explicit completion and deletion flags.
pub async fn create_todo_with(
    db: &DatabaseConnection,
    user_id: i32,
    completed: bool,
    is_deleted: bool,
) -> Result<entity::todo::Model, DbErr> {
    let now = Utc::now();
    entity::todo::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        title: ActiveValue::Set(format!("Todo {}", next_id())),
        description: ActiveValue::Set(None),
        completed: ActiveValue::Set(completed),
        is_active: ActiveValue::Set(true),
        is_deleted: ActiveValue::Set(is_deleted),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
