//! Membership expiry classification.
//!
//! A membership is classified from the end date of its latest fee relative to "now".
//! The boundary is inclusive on the expired side: an end date equal to now is expired.

use chrono::{DateTime, Duration, Utc};

use crate::{
    model::member::{ExpiringMemberDto, ExpiryStatus, MembershipSummaryDto},
    server::model::{gym::Gym, member::MembershipFee},
};

/// Memberships ending within this many days are expiring soon.
pub const EXPIRING_SOON_WINDOW_DAYS: i64 = 7;

/// Classifies a membership end date.
///
/// - `end_date <= now` → `Expired`
/// - `end_date - now <= 7 days` → `ExpiringSoon`
/// - otherwise → `Active`
pub fn classify(end_date: DateTime<Utc>, now: DateTime<Utc>) -> ExpiryStatus {
    if end_date <= now {
        ExpiryStatus::Expired
    } else if end_date - now <= Duration::days(EXPIRING_SOON_WINDOW_DAYS) {
        ExpiryStatus::ExpiringSoon
    } else {
        ExpiryStatus::Active
    }
}

/// Whole days from `now` until `end_date`, truncated toward zero. Negative once expired.
pub fn days_to_expiry(end_date: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (end_date - now).num_days()
}

/// A member whose membership is expired or about to expire.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpiringMember {
    pub member_id: i32,
    pub gym_id: i32,
    pub name: String,
    pub email: String,
    pub end_date: DateTime<Utc>,
    pub status: ExpiryStatus,
    /// Signed time remaining until `end_date`.
    pub remaining: Duration,
}

impl ExpiringMember {
    pub fn into_dto(self) -> ExpiringMemberDto {
        ExpiringMemberDto {
            member_id: self.member_id,
            gym_id: self.gym_id,
            name: self.name,
            email: self.email,
            end_date: self.end_date,
            days_to_expiry: self.remaining.num_days(),
            status: self.status,
        }
    }
}

/// A member's own view of their membership.
#[derive(Debug, Clone, PartialEq)]
pub struct MembershipSummary {
    pub member_id: i32,
    pub gym: Gym,
    /// Fee history, latest period first.
    pub fees: Vec<MembershipFee>,
}

impl MembershipSummary {
    pub fn into_dto(self, now: DateTime<Utc>) -> MembershipSummaryDto {
        let latest_fee = self.fees.first().cloned();

        MembershipSummaryDto {
            member_id: self.member_id,
            gym: self.gym.into_dto(),
            status: latest_fee.as_ref().map(|fee| classify(fee.end_date, now)),
            days_to_expiry: latest_fee
                .as_ref()
                .map(|fee| days_to_expiry(fee.end_date, now)),
            latest_fee: latest_fee.map(MembershipFee::into_dto),
            fees: self.fees.into_iter().map(MembershipFee::into_dto).collect(),
        }
    }
}

/// Sorts expired before expiring-soon, then by ascending time to expiry.
///
/// `ExpiryStatus` derives `Ord` in declaration order (Expired, ExpiringSoon, Active),
/// which is exactly the group order.
pub fn sort_by_urgency(entries: &mut [ExpiringMember]) {
    entries.sort_by(|a, b| {
        a.status
            .cmp(&b.status)
            .then_with(|| a.remaining.cmp(&b.remaining))
            .then_with(|| a.member_id.cmp(&b.member_id))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-03-10T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn entry(member_id: i32, end_date: DateTime<Utc>) -> ExpiringMember {
        ExpiringMember {
            member_id,
            gym_id: 1,
            name: format!("Member {}", member_id),
            email: format!("m{}@example.com", member_id),
            end_date,
            status: classify(end_date, now()),
            remaining: end_date - now(),
        }
    }

    #[test]
    fn end_date_equal_to_now_is_expired() {
        assert_eq!(classify(now(), now()), ExpiryStatus::Expired);
    }

    #[test]
    fn past_end_date_is_expired() {
        assert_eq!(
            classify(now() - Duration::seconds(1), now()),
            ExpiryStatus::Expired
        );
    }

    #[test]
    fn within_window_is_expiring_soon() {
        assert_eq!(
            classify(now() + Duration::seconds(1), now()),
            ExpiryStatus::ExpiringSoon
        );
        assert_eq!(
            classify(now() + Duration::days(7), now()),
            ExpiryStatus::ExpiringSoon
        );
    }

    #[test]
    fn beyond_window_is_active() {
        assert_eq!(
            classify(now() + Duration::days(7) + Duration::seconds(1), now()),
            ExpiryStatus::Active
        );
    }

    #[test]
    fn days_to_expiry_is_signed() {
        assert_eq!(days_to_expiry(now() + Duration::days(3), now()), 3);
        assert_eq!(days_to_expiry(now() - Duration::days(2), now()), -2);
    }

    #[test]
    fn sorts_expired_first_then_by_days() {
        let mut entries = vec![
            entry(1, now() + Duration::days(5)),
            entry(2, now() - Duration::days(1)),
            entry(3, now() + Duration::days(1)),
            entry(4, now() - Duration::days(10)),
        ];

        sort_by_urgency(&mut entries);

        let order: Vec<i32> = entries.iter().map(|e| e.member_id).collect();
        assert_eq!(order, vec![4, 2, 3, 1]);
        assert_eq!(entries[0].status, ExpiryStatus::Expired);
        assert_eq!(entries[2].status, ExpiryStatus::ExpiringSoon);
    }
}
