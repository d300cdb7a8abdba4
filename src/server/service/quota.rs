//! Plan quota enforcement.
//!
//! Checks are count-then-compare against the owner's active subscription. Two
//! concurrent creates may both pass the check; that race is accepted.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        equipment::EquipmentRepository, gym::GymRepository, member::MemberRepository,
        subscription::SubscriptionRepository,
    },
    error::AppError,
    model::user::User,
};

/// The kinds of rows a plan limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quota {
    Gyms,
    Members,
    Equipment,
}

impl Quota {
    fn label(self) -> &'static str {
        match self {
            Self::Gyms => "gym",
            Self::Members => "member",
            Self::Equipment => "equipment",
        }
    }
}

pub struct QuotaService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QuotaService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Ensures the owner may create one more row of the given kind.
    ///
    /// Members and equipment are counted across all of the owner's gyms.
    ///
    /// # Returns
    /// - `Ok(())` - Below the plan limit
    /// - `Err(AppError::BadRequest)` - No active plan, or the limit is reached
    pub async fn ensure_available(&self, owner: &User, quota: Quota) -> Result<(), AppError> {
        let plan = match owner.subscription_id {
            Some(id) => SubscriptionRepository::new(self.db).find_by_id(id).await?,
            None => None,
        };

        let Some(plan) = plan.filter(|plan| plan.is_active) else {
            return Err(AppError::bad_request(
                "An active subscription is required to perform this action",
            ));
        };

        let (limit, used) = match quota {
            Quota::Gyms => (
                plan.max_gyms,
                GymRepository::new(self.db).count_by_owner(owner.id).await?,
            ),
            Quota::Members => {
                let gym_ids = GymRepository::new(self.db).get_ids_by_owner(owner.id).await?;
                (
                    plan.max_members,
                    MemberRepository::new(self.db).count_in_gyms(&gym_ids).await?,
                )
            }
            Quota::Equipment => {
                let gym_ids = GymRepository::new(self.db).get_ids_by_owner(owner.id).await?;
                (
                    plan.max_equipment,
                    EquipmentRepository::new(self.db)
                        .count_in_gyms(&gym_ids)
                        .await?,
                )
            }
        };

        if used >= u64::try_from(limit).unwrap_or(0) {
            return Err(AppError::bad_request(format!(
                "Your {} plan allows at most {} {} record(s)",
                plan.name,
                limit,
                quota.label()
            )));
        }

        Ok(())
    }
}
