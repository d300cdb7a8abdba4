use sea_orm::DatabaseConnection;

use crate::server::{
    data::todo::TodoRepository,
    error::AppError,
    model::todo::{CreateTodoParams, Todo, UpdateTodoParams},
};

pub struct TodoService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TodoService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateTodoParams) -> Result<Todo, AppError> {
        Ok(TodoRepository::new(self.db).create(params).await?)
    }

    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<Todo>, AppError> {
        Ok(TodoRepository::new(self.db).get_by_user(user_id).await?)
    }

    pub async fn update(&self, params: UpdateTodoParams) -> Result<Option<Todo>, AppError> {
        Ok(TodoRepository::new(self.db).update(params).await?)
    }

    /// Flips `completed` on one of the user's todos.
    pub async fn toggle_completed(&self, id: i32, user_id: i32) -> Result<Option<Todo>, AppError> {
        Ok(TodoRepository::new(self.db)
            .toggle_completed(id, user_id)
            .await?)
    }

    pub async fn delete(&self, id: i32, user_id: i32) -> Result<bool, AppError> {
        Ok(TodoRepository::new(self.db).soft_delete(id, user_id).await?)
    }
}
