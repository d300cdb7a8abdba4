//! Member factory.
//!
//! Creates the MEMBER user, the member row and one membership fee.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::user::UserFactory;

/// Factory for creating a member of a gym together with its first fee.
pub struct MemberFactory<'a> {
    db: &'a DatabaseConnection,
    gym_id: i32,
    fee_amount: f64,
    fee_start: DateTime<Utc>,
    fee_end: DateTime<Utc>,
    notified: bool,
    is_active: bool,
    is_deleted: bool,
}

impl<'a> MemberFactory<'a> {
    /// Defaults: a fee of 50.0 covering the last day through the next 30 days.
    pub fn new(db: &'a DatabaseConnection, gym_id: i32) -> Self {
        let now = Utc::now();
        Self {
            db,
            gym_id,
            fee_amount: 50.0,
            fee_start: now - Duration::days(1),
            fee_end: now + Duration::days(30),
            notified: false,
            is_active: true,
            is_deleted: false,
        }
    }

    pub fn fee_amount(mut self, amount: f64) -> Self {
        self.fee_amount = amount;
        self
    }

    /// Sets the end date of the initial fee; the start is moved 30 days before it.
    pub fn fee_end(mut self, end: DateTime<Utc>) -> Self {
        self.fee_start = end - Duration::days(30);
        self.fee_end = end;
        self
    }

    pub fn notified(mut self, notified: bool) -> Self {
        self.notified = notified;
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn deleted(mut self, is_deleted: bool) -> Self {
        self.is_deleted = is_deleted;
        self
    }

    /// Inserts the user, member and fee.
    ///
    /// # Returns
    /// - `Ok((user, member, fee))`
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(
        self,
    ) -> Result<
        (
            entity::user::Model,
            entity::member::Model,
            entity::membership_fee::Model,
        ),
        DbErr,
    > {
        let now = Utc::now();
        let user = UserFactory::new(self.db).role("MEMBER").build().await?;

        let member = entity::member::ActiveModel {
            user_id: ActiveValue::Set(user.id),
            gym_id: ActiveValue::Set(self.gym_id),
            is_active: ActiveValue::Set(self.is_active),
            is_deleted: ActiveValue::Set(self.is_deleted),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let fee = entity::membership_fee::ActiveModel {
            member_id: ActiveValue::Set(member.id),
            amount: ActiveValue::Set(self.fee_amount),
            start_date: ActiveValue::Set(self.fee_start),
            end_date: ActiveValue::Set(self.fee_end),
            is_expired: ActiveValue::Set(false),
            notified: ActiveValue::Set(self.notified),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok((user, member, fee))
    }
}

/// Creates an active member of the gym with a fee valid for the next 30 days.
pub async fn create_member(
    db: &DatabaseConnection,
    gym_id: i32,
) -> Result<
    (
        entity::user::Model,
        entity::member::Model,
        entity::membership_fee::Model,
    ),
    DbErr,
> {
    MemberFactory::new(db, gym_id).build().await
}
