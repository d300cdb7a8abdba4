use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::{member::ExpiryStatus, user::Role},
    server::{
        data::{
            analytics::AnalyticsRepository, equipment::EquipmentRepository, gym::GymRepository,
            member::MemberRepository, membership_fee::MembershipFeeRepository,
            subscription::SubscriptionRepository, user::UserRepository,
        },
        error::AppError,
        model::{
            analytics::{AdminAnalytics, OwnerAnalytics},
            membership,
        },
    },
};

pub struct AnalyticsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnalyticsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Platform-wide totals.
    pub async fn admin(&self) -> Result<AdminAnalytics, AppError> {
        Ok(AdminAnalytics {
            total_owners: UserRepository::new(self.db)
                .count_by_role(Role::Owner)
                .await?,
            total_gyms: GymRepository::new(self.db).count_all().await?,
            total_members: MemberRepository::new(self.db).count_all().await?,
            total_equipment: EquipmentRepository::new(self.db).count_all().await?,
            active_subscriptions: SubscriptionRepository::new(self.db)
                .count_active()
                .await?,
            plans: AnalyticsRepository::new(self.db).plan_usage().await?,
        })
    }

    /// Totals for the gyms in scope.
    pub async fn owner(
        &self,
        gym_ids: &[i32],
        now: DateTime<Utc>,
    ) -> Result<OwnerAnalytics, AppError> {
        let members = MemberRepository::new(self.db).get_by_gyms(gym_ids).await?;
        let member_ids: Vec<i32> = members.iter().map(|m| m.id).collect();

        let mut expired = 0;
        let mut expiring_soon = 0;
        for fee in members.iter().filter_map(|m| m.latest_fee.as_ref()) {
            match membership::classify(fee.end_date, now) {
                ExpiryStatus::Expired => expired += 1,
                ExpiryStatus::ExpiringSoon => expiring_soon += 1,
                ExpiryStatus::Active => {}
            }
        }

        Ok(OwnerAnalytics {
            total_gyms: gym_ids.len() as u64,
            total_members: members.len() as u64,
            active_members: members.iter().filter(|m| m.is_active).count() as u64,
            expired_memberships: expired,
            expiring_soon_memberships: expiring_soon,
            equipment_by_type: EquipmentRepository::new(self.db)
                .units_by_type(gym_ids)
                .await?,
            total_fee_revenue: MembershipFeeRepository::new(self.db)
                .total_amount_for_members(&member_ids)
                .await?,
        })
    }
}
