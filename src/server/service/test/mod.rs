use crate::server::{data::user::UserRepository, error::AppError, model::user::User};
use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory};

mod auth;
mod member;
mod quota;
mod user;

/// Loads a factory-created user as a domain model.
async fn load_user(db: &DatabaseConnection, id: i32) -> Result<User, AppError> {
    UserRepository::new(db)
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("User"))
}
