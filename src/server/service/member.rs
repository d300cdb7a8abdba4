use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        gym::GymRepository, member::MemberRepository, membership_fee::MembershipFeeRepository,
        user::UserRepository,
    },
    error::AppError,
    model::{
        member::{CreateMemberParams, Member, MembershipFee, NewFeeParams, UpdateMemberParams},
        user::{UpdateUserParams, User},
    },
    service::quota::{Quota, QuotaService},
};

pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a member in one of the owner's gyms.
    ///
    /// # Returns
    /// - `Ok(Member)` - The member with its user and first fee
    /// - `Err(AppError::NotFound)` - The gym is missing or not owned
    /// - `Err(AppError::BadRequest)` - Email already registered, or member quota reached
    pub async fn create(&self, owner: &User, params: CreateMemberParams) -> Result<Member, AppError> {
        if GymRepository::new(self.db)
            .find_owned(params.gym_id, owner.id)
            .await?
            .is_none()
        {
            return Err(AppError::not_found("Gym"));
        }

        if UserRepository::new(self.db)
            .email_exists(&params.email)
            .await?
        {
            return Err(AppError::bad_request("Email is already registered"));
        }

        QuotaService::new(self.db)
            .ensure_available(owner, Quota::Members)
            .await?;

        MemberRepository::new(self.db).create(params).await
    }

    /// Gets members of the gyms in scope.
    pub async fn get_in_gyms(&self, gym_ids: &[i32]) -> Result<Vec<Member>, AppError> {
        MemberRepository::new(self.db).get_by_gyms(gym_ids).await
    }

    /// Gets one of the owner's members. Returns None if missing or not owned.
    pub async fn get_owned(&self, id: i32, owner_id: i32) -> Result<Option<Member>, AppError> {
        let gym_ids = GymRepository::new(self.db).get_ids_by_owner(owner_id).await?;

        MemberRepository::new(self.db).find_in_gyms(id, &gym_ids).await
    }

    /// Patches the member's user fields. Returns None if missing or not owned.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - The new email belongs to another account
    pub async fn update(
        &self,
        owner_id: i32,
        params: UpdateMemberParams,
    ) -> Result<Option<Member>, AppError> {
        let Some(member) = self.get_owned(params.id, owner_id).await? else {
            return Ok(None);
        };

        let user_repo = UserRepository::new(self.db);

        if let Some(email) = &params.email {
            if *email != member.user.email && user_repo.email_exists(email).await? {
                return Err(AppError::bad_request("Email is already registered"));
            }
        }

        user_repo
            .update(UpdateUserParams {
                id: member.user.id,
                name: params.name,
                email: params.email,
                phone: params.phone,
                address: params.address,
                password_hash: None,
            })
            .await?;

        self.get_owned(member.id, owner_id).await
    }

    /// Flips the member's active flag. Returns None if missing or not owned.
    pub async fn toggle_status(&self, id: i32, owner_id: i32) -> Result<Option<Member>, AppError> {
        let Some(member) = self.get_owned(id, owner_id).await? else {
            return Ok(None);
        };

        MemberRepository::new(self.db)
            .set_active(member.id, !member.is_active)
            .await?;

        self.get_owned(id, owner_id).await
    }

    /// Soft-deletes the member. Returns false if missing or not owned.
    pub async fn delete(&self, id: i32, owner_id: i32) -> Result<bool, AppError> {
        if self.get_owned(id, owner_id).await?.is_none() {
            return Ok(false);
        }

        MemberRepository::new(self.db).soft_delete(id).await
    }

    /// Fee history of one of the owner's members, latest period first.
    pub async fn fees(
        &self,
        id: i32,
        owner_id: i32,
    ) -> Result<Option<Vec<MembershipFee>>, AppError> {
        if self.get_owned(id, owner_id).await?.is_none() {
            return Ok(None);
        }

        Ok(Some(
            MembershipFeeRepository::new(self.db).get_by_member(id).await?,
        ))
    }

    /// Appends a fee period to one of the owner's members.
    pub async fn renew(
        &self,
        id: i32,
        owner_id: i32,
        params: NewFeeParams,
    ) -> Result<Option<MembershipFee>, AppError> {
        if self.get_owned(id, owner_id).await?.is_none() {
            return Ok(None);
        }

        Ok(Some(
            MembershipFeeRepository::new(self.db)
                .create(id, params)
                .await?,
        ))
    }
}
