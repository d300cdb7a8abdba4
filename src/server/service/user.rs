//! Superadmin user administration.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::Role,
    server::{
        data::{subscription::SubscriptionRepository, user::UserRepository},
        error::AppError,
        model::user::{PaginatedUsers, User},
    },
};

/// Upper bound on the page size clients may request.
pub const MAX_PER_PAGE: u64 = 100;

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists users one page at a time, optionally filtered by role.
    pub async fn get_paginated(
        &self,
        role: Option<Role>,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedUsers, AppError> {
        let per_page = per_page.clamp(1, MAX_PER_PAGE);

        UserRepository::new(self.db)
            .get_all_paginated(role, page, per_page)
            .await
    }

    /// Flips a user's active flag.
    ///
    /// # Returns
    /// - `Ok(None)` - No such user
    /// - `Err(AppError::BadRequest)` - Superadmins cannot deactivate themselves
    pub async fn toggle_status(&self, actor: &User, id: i32) -> Result<Option<User>, AppError> {
        if actor.id == id {
            return Err(AppError::bad_request("You cannot change your own status"));
        }

        UserRepository::new(self.db).toggle_active(id).await
    }

    /// Soft-deletes a user. Superadmins cannot delete themselves.
    pub async fn delete(&self, actor: &User, id: i32) -> Result<bool, AppError> {
        if actor.id == id {
            return Err(AppError::bad_request("You cannot delete your own account"));
        }

        UserRepository::new(self.db).soft_delete(id).await
    }

    /// Assigns a plan to an owner, or clears it with `None`.
    ///
    /// # Returns
    /// - `Ok(None)` - No such user
    /// - `Err(AppError::BadRequest)` - The user is not an owner
    /// - `Err(AppError::NotFound)` - The plan does not exist
    pub async fn assign_subscription(
        &self,
        id: i32,
        subscription_id: Option<i32>,
    ) -> Result<Option<User>, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_id(id).await? else {
            return Ok(None);
        };

        if user.role != Role::Owner {
            return Err(AppError::bad_request(
                "Subscriptions can only be assigned to owners",
            ));
        }

        if let Some(subscription_id) = subscription_id {
            if SubscriptionRepository::new(self.db)
                .find_by_id(subscription_id)
                .await?
                .is_none()
            {
                return Err(AppError::not_found("Subscription"));
            }
        }

        user_repo.set_subscription(id, subscription_id).await
    }
}
