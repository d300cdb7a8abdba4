use crate::model::{
    analytics::{AdminAnalyticsDto, EquipmentTypeCountDto, OwnerAnalyticsDto, PlanUsageDto},
    equipment::EquipmentType,
};

#[derive(Debug, Clone, PartialEq)]
pub struct PlanUsage {
    pub subscription_id: i32,
    pub name: String,
    pub monthly_price: f64,
    pub owners: u64,
}

/// Platform-wide figures for superadmins.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminAnalytics {
    pub total_owners: u64,
    pub total_gyms: u64,
    pub total_members: u64,
    pub total_equipment: u64,
    pub active_subscriptions: u64,
    pub plans: Vec<PlanUsage>,
}

impl AdminAnalytics {
    /// Sum of monthly prices over every subscribed owner.
    pub fn monthly_recurring_revenue(&self) -> f64 {
        self.plans
            .iter()
            .map(|p| p.monthly_price * p.owners as f64)
            .sum()
    }

    pub fn into_dto(self) -> AdminAnalyticsDto {
        let monthly_recurring_revenue = self.monthly_recurring_revenue();

        AdminAnalyticsDto {
            total_owners: self.total_owners,
            total_gyms: self.total_gyms,
            total_members: self.total_members,
            total_equipment: self.total_equipment,
            active_subscriptions: self.active_subscriptions,
            monthly_recurring_revenue,
            plans: self
                .plans
                .into_iter()
                .map(|p| PlanUsageDto {
                    subscription_id: p.subscription_id,
                    name: p.name,
                    owners: p.owners,
                })
                .collect(),
        }
    }
}

/// Figures for one owner's gyms.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OwnerAnalytics {
    pub total_gyms: u64,
    pub total_members: u64,
    pub active_members: u64,
    pub expired_memberships: u64,
    pub expiring_soon_memberships: u64,
    pub equipment_by_type: Vec<(EquipmentType, i64)>,
    pub total_fee_revenue: f64,
}

impl OwnerAnalytics {
    pub fn into_dto(self) -> OwnerAnalyticsDto {
        OwnerAnalyticsDto {
            total_gyms: self.total_gyms,
            total_members: self.total_members,
            active_members: self.active_members,
            expired_memberships: self.expired_memberships,
            expiring_soon_memberships: self.expiring_soon_memberships,
            total_equipment_units: self.equipment_by_type.iter().map(|(_, n)| n).sum(),
            equipment_by_type: self
                .equipment_by_type
                .into_iter()
                .map(|(equipment_type, units)| EquipmentTypeCountDto {
                    equipment_type,
                    units,
                })
                .collect(),
            total_fee_revenue: self.total_fee_revenue,
        }
    }
}
