//! Membership expiry views for owners and members.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::member::ExpiryStatus,
    server::{
        data::{
            gym::GymRepository, member::MemberRepository, membership_fee::MembershipFeeRepository,
        },
        error::AppError,
        model::membership::{self, ExpiringMember, MembershipSummary},
    },
};

pub struct MembershipService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MembershipService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Active members of the given gyms whose latest fee is expired or expiring soon.
    ///
    /// Expired members come first, then expiring-soon; each group is ordered by
    /// ascending time to expiry.
    pub async fn expiring(
        &self,
        gym_ids: &[i32],
        now: DateTime<Utc>,
    ) -> Result<Vec<ExpiringMember>, AppError> {
        let members = MemberRepository::new(self.db).get_by_gyms(gym_ids).await?;

        let mut entries: Vec<ExpiringMember> = members
            .into_iter()
            .filter(|member| member.is_active)
            .filter_map(|member| {
                let fee = member.latest_fee?;
                let status = membership::classify(fee.end_date, now);
                if status == ExpiryStatus::Active {
                    return None;
                }

                Some(ExpiringMember {
                    member_id: member.id,
                    gym_id: member.gym_id,
                    name: member.user.name,
                    email: member.user.email,
                    end_date: fee.end_date,
                    status,
                    remaining: fee.end_date - now,
                })
            })
            .collect();

        membership::sort_by_urgency(&mut entries);

        Ok(entries)
    }

    /// The signed-in member's gym and fee history.
    ///
    /// # Returns
    /// - `Ok(None)` - The user has no member record, or its gym is gone
    pub async fn summary(&self, user_id: i32) -> Result<Option<MembershipSummary>, AppError> {
        let Some(member) = MemberRepository::new(self.db)
            .find_by_user_id(user_id)
            .await?
        else {
            return Ok(None);
        };

        let Some(gym) = GymRepository::new(self.db).find_by_id(member.gym_id).await? else {
            return Ok(None);
        };

        let fees = MembershipFeeRepository::new(self.db)
            .get_by_member(member.id)
            .await?;

        Ok(Some(MembershipSummary {
            member_id: member.id,
            gym,
            fees,
        }))
    }
}
