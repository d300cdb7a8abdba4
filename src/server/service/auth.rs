//! Email/password authentication and session claims.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::Role,
    server::{
        config::SuperadminConfig,
        data::{
            gym::GymRepository, member::MemberRepository, subscription::SubscriptionRepository,
            user::UserRepository,
        },
        error::{auth::AuthError, AppError},
        model::user::{CreateUserParams, UpdateUserParams, User},
        util::{password, validate},
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new owner.
    ///
    /// # Returns
    /// - `Ok(User)` - The created owner
    /// - `Err(AppError::BadRequest)` - Email taken, or the chosen plan is not available
    pub async fn sign_up(&self, params: CreateUserParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.email_exists(&params.email).await? {
            return Err(AppError::bad_request("Email is already registered"));
        }

        if let Some(subscription_id) = params.subscription_id {
            let plan = SubscriptionRepository::new(self.db)
                .find_by_id(subscription_id)
                .await?;

            if !plan.is_some_and(|plan| plan.is_active) {
                return Err(AppError::bad_request("Selected plan is not available"));
            }
        }

        user_repo.create(params).await
    }

    /// Checks credentials.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials match an active account
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    /// - `Err(AuthError::AccountDisabled)` - The account is deactivated
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<User, AppError> {
        let Ok(email) = validate::email(email) else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !password::verify_password(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        if !user.is_active {
            return Err(AuthError::AccountDisabled(user.id).into());
        }

        Ok(user)
    }

    /// The gym selected for a fresh session: the owner's first gym, or the member's gym.
    pub async fn default_gym(&self, user: &User) -> Result<Option<i32>, AppError> {
        match user.role {
            Role::Owner => Ok(GymRepository::new(self.db)
                .get_ids_by_owner(user.id)
                .await?
                .into_iter()
                .next()),
            Role::Member => Ok(MemberRepository::new(self.db)
                .find_by_user_id(user.id)
                .await?
                .map(|member| member.gym_id)),
            Role::Superadmin => Ok(None),
        }
    }

    /// Whether the user may select the gym in their session.
    ///
    /// Owners may select their own gyms, members only their gym, superadmins any gym.
    pub async fn can_select_gym(&self, user: &User, gym_id: i32) -> Result<bool, AppError> {
        let gym_repo = GymRepository::new(self.db);

        match user.role {
            Role::Owner => Ok(gym_repo.find_owned(gym_id, user.id).await?.is_some()),
            Role::Member => Ok(MemberRepository::new(self.db)
                .find_by_user_id(user.id)
                .await?
                .is_some_and(|member| member.gym_id == gym_id)),
            Role::Superadmin => Ok(gym_repo.find_by_id(gym_id).await?.is_some()),
        }
    }

    /// Applies a profile update to the signed-in user.
    pub async fn update_profile(&self, params: UpdateUserParams) -> Result<Option<User>, AppError> {
        UserRepository::new(self.db).update(params).await
    }

    /// Creates the configured superadmin when no superadmin exists yet.
    ///
    /// # Returns
    /// - `Ok(true)` - A superadmin was created
    /// - `Ok(false)` - One already exists, or the email is taken by another account
    pub async fn ensure_superadmin(&self, config: &SuperadminConfig) -> Result<bool, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.role_exists(Role::Superadmin).await? {
            return Ok(false);
        }

        let email = validate::email(&config.email)?;
        if user_repo.email_exists(&email).await? {
            tracing::warn!(
                "Cannot create superadmin: {} is already used by another account",
                email
            );
            return Ok(false);
        }

        password::validate_password(&config.password)?;

        user_repo
            .create(CreateUserParams {
                name: config.name.clone(),
                email,
                password_hash: password::hash_password(&config.password)?,
                role: Role::Superadmin,
                phone: None,
                address: None,
                subscription_id: None,
            })
            .await?;

        Ok(true)
    }
}
