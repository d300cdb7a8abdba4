//! Read-only aggregate queries for the superadmin dashboard.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter};

use crate::{model::user::Role, server::model::analytics::PlanUsage};

pub struct AnalyticsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnalyticsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Number of active, non-deleted owners on each non-deleted plan.
    ///
    /// Every plan is listed, including those with no owners.
    pub async fn plan_usage(&self) -> Result<Vec<PlanUsage>, DbErr> {
        let plans = entity::prelude::Subscription::find()
            .filter(entity::subscription::Column::IsDeleted.eq(false))
            .all(self.db)
            .await?;

        let mut usage = Vec::with_capacity(plans.len());
        for plan in plans {
            let owners = entity::prelude::User::find()
                .filter(entity::user::Column::SubscriptionId.eq(plan.id))
                .filter(entity::user::Column::Role.eq(Role::Owner.as_str()))
                .filter(entity::user::Column::IsActive.eq(true))
                .filter(entity::user::Column::IsDeleted.eq(false))
                .count(self.db)
                .await?;

            usage.push(PlanUsage {
                subscription_id: plan.id,
                name: plan.name,
                monthly_price: plan.monthly_price,
                owners,
            });
        }

        usage.sort_by(|a, b| {
            b.owners
                .cmp(&a.owners)
                .then_with(|| a.subscription_id.cmp(&b.subscription_id))
        });

        Ok(usage)
    }
}
