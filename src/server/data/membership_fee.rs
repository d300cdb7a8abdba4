//! Membership fee data repository.
//!
//! Fees are append-only: renewing a membership adds a row, and the row with the latest
//! end date is the member's current period. The expiry sweep reads due fees here and
//! marks them notified.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::member::{DueFee, MembershipFee, NewFeeParams},
};

pub struct MembershipFeeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MembershipFeeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a fee period to a member.
    pub async fn create(
        &self,
        member_id: i32,
        params: NewFeeParams,
    ) -> Result<MembershipFee, DbErr> {
        let now = Utc::now();

        let entity = entity::membership_fee::ActiveModel {
            member_id: ActiveValue::Set(member_id),
            amount: ActiveValue::Set(params.amount),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            is_expired: ActiveValue::Set(params.end_date <= now),
            notified: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(MembershipFee::from_entity(entity))
    }

    /// Gets a member's fee history, latest period first.
    pub async fn get_by_member(&self, member_id: i32) -> Result<Vec<MembershipFee>, DbErr> {
        let entities = entity::prelude::MembershipFee::find()
            .filter(entity::membership_fee::Column::MemberId.eq(member_id))
            .order_by_desc(entity::membership_fee::Column::EndDate)
            .order_by_desc(entity::membership_fee::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(MembershipFee::from_entity).collect())
    }

    /// Latest fee entity per member, keyed by member ID. Members without fees are absent.
    pub(super) async fn latest_entities_for_members(
        &self,
        member_ids: &[i32],
    ) -> Result<HashMap<i32, entity::membership_fee::Model>, DbErr> {
        if member_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let fees = entity::prelude::MembershipFee::find()
            .filter(entity::membership_fee::Column::MemberId.is_in(member_ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(latest_by_member(fees))
    }

    /// Sum of every fee amount recorded for the given members.
    pub async fn total_amount_for_members(&self, member_ids: &[i32]) -> Result<f64, DbErr> {
        if member_ids.is_empty() {
            return Ok(0.0);
        }

        let fees = entity::prelude::MembershipFee::find()
            .filter(entity::membership_fee::Column::MemberId.is_in(member_ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(fees.iter().map(|fee| fee.amount).sum())
    }

    /// Fees that ended at or before `now` and have not been notified yet, oldest first.
    ///
    /// Fees of deleted members, or members whose user is gone, are skipped.
    pub async fn get_due(&self, now: DateTime<Utc>) -> Result<Vec<DueFee>, AppError> {
        let rows = entity::prelude::MembershipFee::find()
            .find_also_related(entity::prelude::Member)
            .filter(entity::membership_fee::Column::EndDate.lte(now))
            .filter(entity::membership_fee::Column::Notified.eq(false))
            .filter(entity::member::Column::IsDeleted.eq(false))
            .order_by_asc(entity::membership_fee::Column::EndDate)
            .order_by_asc(entity::membership_fee::Column::Id)
            .all(self.db)
            .await?;

        let mut due = Vec::with_capacity(rows.len());
        for (fee, member) in rows {
            let Some(member) = member else {
                continue;
            };

            let user = entity::prelude::User::find_by_id(member.user_id)
                .filter(entity::user::Column::IsDeleted.eq(false))
                .one(self.db)
                .await?;
            let gym = entity::prelude::Gym::find_by_id(member.gym_id)
                .one(self.db)
                .await?;

            let (Some(user), Some(gym)) = (user, gym) else {
                continue;
            };

            due.push(DueFee {
                fee: MembershipFee::from_entity(fee),
                member_name: user.name,
                member_email: user.email,
                gym_name: gym.name,
            });
        }

        Ok(due)
    }

    /// Marks a fee notified and expired. Only a fee not yet notified is changed.
    ///
    /// # Returns
    /// - `Ok(true)` - The fee was marked
    /// - `Ok(false)` - The fee was already notified or does not exist
    pub async fn mark_notified(&self, fee_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::MembershipFee::update_many()
            .col_expr(
                entity::membership_fee::Column::Notified,
                sea_orm::sea_query::Expr::value(true),
            )
            .col_expr(
                entity::membership_fee::Column::IsExpired,
                sea_orm::sea_query::Expr::value(true),
            )
            .filter(entity::membership_fee::Column::Id.eq(fee_id))
            .filter(entity::membership_fee::Column::Notified.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

/// Groups fee rows by member, keeping the one with the latest end date.
fn latest_by_member(
    fees: Vec<entity::membership_fee::Model>,
) -> HashMap<i32, entity::membership_fee::Model> {
    let mut latest: HashMap<i32, entity::membership_fee::Model> = HashMap::new();

    for fee in fees {
        match latest.get(&fee.member_id) {
            Some(current)
                if (current.end_date, current.id) >= (fee.end_date, fee.id) => {}
            _ => {
                latest.insert(fee.member_id, fee);
            }
        }
    }

    latest
}
