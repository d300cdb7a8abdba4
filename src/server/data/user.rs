//! User data repository.
//!
//! Users of every role live in one table. Owners and superadmins are created here
//! directly; member users are created by `MemberRepository` inside its transaction.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::user::Role,
    server::{
        error::AppError,
        model::user::{CreateUserParams, PaginatedUsers, UpdateUserParams, User},
    },
};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a user.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::DbErr)` - Insert failed, including a duplicate email
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let now = Utc::now();

        let entity = entity::user::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            role: ActiveValue::Set(params.role.as_str().to_string()),
            phone: ActiveValue::Set(params.phone),
            address: ActiveValue::Set(params.address),
            subscription_id: ActiveValue::Set(params.subscription_id),
            is_active: ActiveValue::Set(true),
            is_deleted: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        User::from_entity(entity)
    }

    /// Finds a user that has not been soft-deleted.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find_by_id(id)
            .filter(entity::user::Column::IsDeleted.eq(false))
            .one(self.db)
            .await?;

        entity.map(User::from_entity).transpose()
    }

    /// Finds a non-deleted user by email. Emails are stored lowercased.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .filter(entity::user::Column::IsDeleted.eq(false))
            .one(self.db)
            .await?;

        entity.map(User::from_entity).transpose()
    }

    /// Checks whether any row, deleted or not, already uses the email.
    ///
    /// Soft-deleted users keep their row, so their email stays taken under the
    /// unique index.
    pub async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether a non-deleted user with the role exists.
    pub async fn role_exists(&self, role: Role) -> Result<bool, AppError> {
        Ok(self.count_by_role(role).await? > 0)
    }

    /// Counts non-deleted users holding the role.
    pub async fn count_by_role(&self, role: Role) -> Result<u64, AppError> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(role.as_str()))
            .filter(entity::user::Column::IsDeleted.eq(false))
            .count(self.db)
            .await?;

        Ok(count)
    }

    /// Gets non-deleted users one page at a time, newest first.
    ///
    /// # Arguments
    /// - `role` - Only return users with this role when set
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of users per page
    pub async fn get_all_paginated(
        &self,
        role: Option<Role>,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedUsers, AppError> {
        let mut query =
            entity::prelude::User::find().filter(entity::user::Column::IsDeleted.eq(false));

        if let Some(role) = role {
            query = query.filter(entity::user::Column::Role.eq(role.as_str()));
        }

        let paginator = query
            .order_by_desc(entity::user::Column::CreatedAt)
            .order_by_desc(entity::user::Column::Id)
            .paginate(self.db, per_page);

        let counts = paginator.num_items_and_pages().await?;
        let entities = paginator.fetch_page(page).await?;

        let users = entities
            .into_iter()
            .map(User::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PaginatedUsers {
            users,
            total: counts.number_of_items,
            page,
            per_page,
            total_pages: counts.number_of_pages,
        })
    }

    /// Applies a partial update. Returns `None` when the user does not exist.
    pub async fn update(&self, params: UpdateUserParams) -> Result<Option<User>, AppError> {
        let Some(entity) = entity::prelude::User::find_by_id(params.id)
            .filter(entity::user::Column::IsDeleted.eq(false))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model = entity.into_active_model();

        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(email) = params.email {
            active_model.email = ActiveValue::Set(email);
        }
        if let Some(phone) = params.phone {
            active_model.phone = ActiveValue::Set(Some(phone));
        }
        if let Some(address) = params.address {
            active_model.address = ActiveValue::Set(Some(address));
        }
        if let Some(password_hash) = params.password_hash {
            active_model.password_hash = ActiveValue::Set(password_hash);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(User::from_entity(entity)?))
    }

    /// Flips `is_active`. Returns `None` when the user does not exist.
    pub async fn toggle_active(&self, id: i32) -> Result<Option<User>, AppError> {
        let Some(entity) = entity::prelude::User::find_by_id(id)
            .filter(entity::user::Column::IsDeleted.eq(false))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let is_active = entity.is_active;
        let mut active_model = entity.into_active_model();
        active_model.is_active = ActiveValue::Set(!is_active);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(User::from_entity(entity)?))
    }

    /// Marks the user deleted.
    ///
    /// # Returns
    /// - `Ok(true)` - The user was deleted
    /// - `Ok(false)` - No non-deleted user with that ID
    pub async fn soft_delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::IsDeleted,
                sea_orm::sea_query::Expr::value(true),
            )
            .col_expr(
                entity::user::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .filter(entity::user::Column::Id.eq(id))
            .filter(entity::user::Column::IsDeleted.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Sets or clears the user's subscription plan.
    pub async fn set_subscription(
        &self,
        id: i32,
        subscription_id: Option<i32>,
    ) -> Result<Option<User>, AppError> {
        let Some(entity) = entity::prelude::User::find_by_id(id)
            .filter(entity::user::Column::IsDeleted.eq(false))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model = entity.into_active_model();
        active_model.subscription_id = ActiveValue::Set(subscription_id);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(User::from_entity(entity)?))
    }
}
