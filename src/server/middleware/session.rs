//! Type-safe session wrapper.
//!
//! The session carries three claims: the signed-in user's ID, their role, and the gym
//! currently selected in the dashboard. `AuthSession` is the only code that knows the
//! session keys, so handlers, the auth guard and the page guard all agree on them.

use tower_sessions::Session;

use crate::{model::user::Role, server::error::AppError};

const SESSION_AUTH_USER_ID: &str = "auth:user";
const SESSION_AUTH_ROLE: &str = "auth:role";
const SESSION_SELECTED_GYM_ID: &str = "auth:selected_gym";

pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Starts an authenticated session.
    ///
    /// Cycles the session ID first so a pre-login session ID cannot be reused, then
    /// stores the user's claims.
    ///
    /// # Returns
    /// - `Ok(())` - Claims stored
    /// - `Err(AppError::SessionErr(_))` - Failed to write to the session store
    pub async fn sign_in(
        &self,
        user_id: i32,
        role: Role,
        selected_gym_id: Option<i32>,
    ) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        self.session.insert(SESSION_AUTH_ROLE, role).await?;
        self.set_selected_gym_id(selected_gym_id).await
    }

    /// The signed-in user's ID, if any.
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_USER_ID).await?)
    }

    /// The role claim stored at sign-in, if any.
    pub async fn get_role(&self) -> Result<Option<Role>, AppError> {
        Ok(self.session.get::<Role>(SESSION_AUTH_ROLE).await?)
    }

    pub async fn get_selected_gym_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_SELECTED_GYM_ID).await?)
    }

    /// Stores or clears the selected gym claim.
    pub async fn set_selected_gym_id(&self, gym_id: Option<i32>) -> Result<(), AppError> {
        match gym_id {
            Some(gym_id) => {
                self.session.insert(SESSION_SELECTED_GYM_ID, gym_id).await?;
            }
            None => {
                self.session.remove::<i32>(SESSION_SELECTED_GYM_ID).await?;
            }
        }
        Ok(())
    }

    /// Ends the session, removing every claim.
    pub async fn clear(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}
