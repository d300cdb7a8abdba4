use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    model::user::Role,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        middleware::session::AuthSession,
        model::user::User,
    },
};

/// Per-request authentication and role check for API handlers.
///
/// The guard always reloads the user from the database, so a deactivated, deleted or
/// re-roled account loses access on its next request even with a live session.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Requires a signed-in, active user whose role is in `roles`.
    ///
    /// An empty `roles` slice admits any authenticated role.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AuthError::UserNotInSession)` - Not signed in (401)
    /// - `Err(AuthError::UserNotInDatabase)` - User missing or deleted (401)
    /// - `Err(AuthError::AccountDisabled)` - User deactivated (403)
    /// - `Err(AuthError::AccessDenied)` - Role not allowed (403)
    pub async fn require(&self, roles: &[Role]) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if !user.is_active {
            return Err(AuthError::AccountDisabled(user_id).into());
        }

        if !roles.is_empty() && !roles.contains(&user.role) {
            return Err(AuthError::AccessDenied(
                user_id,
                format!("role {} is not one of {:?}", user.role, roles),
            )
            .into());
        }

        Ok(user)
    }
}
