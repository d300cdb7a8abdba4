//! Member data repository.
//!
//! A member row links a MEMBER user to a gym. Reads join the user and the latest
//! membership fee so callers always get a complete `Member`. Ownership is enforced by
//! passing the owner's gym IDs in.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::{
    model::user::Role,
    server::{
        data::membership_fee::MembershipFeeRepository,
        error::AppError,
        model::member::{CreateMemberParams, Member},
    },
};

pub struct MemberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the MEMBER user, the member row and the first fee in one transaction.
    ///
    /// Nothing is written unless all three inserts succeed.
    ///
    /// # Returns
    /// - `Ok(Member)` - The created member with its user and fee
    /// - `Err(AppError::DbErr)` - An insert failed and the transaction was rolled back
    pub async fn create(&self, params: CreateMemberParams) -> Result<Member, AppError> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let user = entity::user::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            role: ActiveValue::Set(Role::Member.as_str().to_string()),
            phone: ActiveValue::Set(params.phone),
            address: ActiveValue::Set(params.address),
            subscription_id: ActiveValue::Set(None),
            is_active: ActiveValue::Set(true),
            is_deleted: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let member = entity::member::ActiveModel {
            user_id: ActiveValue::Set(user.id),
            gym_id: ActiveValue::Set(params.gym_id),
            is_active: ActiveValue::Set(true),
            is_deleted: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let fee = entity::membership_fee::ActiveModel {
            member_id: ActiveValue::Set(member.id),
            amount: ActiveValue::Set(params.fee.amount),
            start_date: ActiveValue::Set(params.fee.start_date),
            end_date: ActiveValue::Set(params.fee.end_date),
            is_expired: ActiveValue::Set(params.fee.end_date <= now),
            notified: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Member::from_entities(member, user, Some(fee))
    }

    /// Gets non-deleted members of the given gyms with their latest fee, newest first.
    pub async fn get_by_gyms(&self, gym_ids: &[i32]) -> Result<Vec<Member>, AppError> {
        if gym_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = entity::prelude::Member::find()
            .find_also_related(entity::prelude::User)
            .filter(entity::member::Column::GymId.is_in(gym_ids.iter().copied()))
            .filter(entity::member::Column::IsDeleted.eq(false))
            .order_by_desc(entity::member::Column::CreatedAt)
            .order_by_desc(entity::member::Column::Id)
            .all(self.db)
            .await?;

        self.with_latest_fees(rows).await
    }

    /// Finds a non-deleted member that belongs to one of the given gyms.
    pub async fn find_in_gyms(&self, id: i32, gym_ids: &[i32]) -> Result<Option<Member>, AppError> {
        if gym_ids.is_empty() {
            return Ok(None);
        }

        let row = entity::prelude::Member::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .filter(entity::member::Column::GymId.is_in(gym_ids.iter().copied()))
            .filter(entity::member::Column::IsDeleted.eq(false))
            .one(self.db)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(self.with_latest_fees(vec![row]).await?.into_iter().next())
    }

    /// Finds the non-deleted member record of a MEMBER user.
    pub async fn find_by_user_id(&self, user_id: i32) -> Result<Option<Member>, AppError> {
        let row = entity::prelude::Member::find()
            .find_also_related(entity::prelude::User)
            .filter(entity::member::Column::UserId.eq(user_id))
            .filter(entity::member::Column::IsDeleted.eq(false))
            .order_by_desc(entity::member::Column::Id)
            .one(self.db)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(self.with_latest_fees(vec![row]).await?.into_iter().next())
    }

    /// Flips the member's `is_active`.
    pub async fn set_active(&self, id: i32, is_active: bool) -> Result<(), AppError> {
        entity::prelude::Member::update_many()
            .col_expr(
                entity::member::Column::IsActive,
                sea_orm::sea_query::Expr::value(is_active),
            )
            .col_expr(
                entity::member::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .filter(entity::member::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Marks the member deleted.
    ///
    /// # Returns
    /// - `Ok(true)` - The member was deleted
    /// - `Ok(false)` - Missing or already deleted
    pub async fn soft_delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Member::update_many()
            .col_expr(
                entity::member::Column::IsDeleted,
                sea_orm::sea_query::Expr::value(true),
            )
            .col_expr(
                entity::member::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .filter(entity::member::Column::Id.eq(id))
            .filter(entity::member::Column::IsDeleted.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Counts non-deleted members across the given gyms.
    pub async fn count_in_gyms(&self, gym_ids: &[i32]) -> Result<u64, AppError> {
        if gym_ids.is_empty() {
            return Ok(0);
        }

        let count = entity::prelude::Member::find()
            .filter(entity::member::Column::GymId.is_in(gym_ids.iter().copied()))
            .filter(entity::member::Column::IsDeleted.eq(false))
            .count(self.db)
            .await?;

        Ok(count)
    }

    /// Counts every non-deleted member.
    pub async fn count_all(&self) -> Result<u64, AppError> {
        let count = entity::prelude::Member::find()
            .filter(entity::member::Column::IsDeleted.eq(false))
            .count(self.db)
            .await?;

        Ok(count)
    }

    async fn with_latest_fees(
        &self,
        rows: Vec<(entity::member::Model, Option<entity::user::Model>)>,
    ) -> Result<Vec<Member>, AppError> {
        let member_ids: Vec<i32> = rows.iter().map(|(member, _)| member.id).collect();
        let mut latest = MembershipFeeRepository::new(self.db)
            .latest_entities_for_members(&member_ids)
            .await?;

        let mut members = Vec::with_capacity(rows.len());
        for (member, user) in rows {
            let Some(user) = user else {
                return Err(AppError::InternalError(format!(
                    "Member {} references missing user {}",
                    member.id, member.user_id
                )));
            };
            let fee = latest.remove(&member.id);
            members.push(Member::from_entities(member, user, fee)?);
        }

        Ok(members)
    }
}
