//! Membership expiry sweep.
//!
//! Finds every fee that has ended and has not been notified, emails the member and
//! marks the fee `notified` and `is_expired`. Runs from the cron scheduler and from the
//! secret-protected HTTP trigger.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::membership_fee::MembershipFeeRepository,
    error::AppError,
    model::member::DueFee,
    service::mail::{Mail, Mailer},
};

pub struct ExpirySweepService<'a> {
    db: &'a DatabaseConnection,
    mailer: &'a Mailer,
    app_url: &'a str,
}

impl<'a> ExpirySweepService<'a> {
    pub fn new(db: &'a DatabaseConnection, mailer: &'a Mailer, app_url: &'a str) -> Self {
        Self {
            db,
            mailer,
            app_url,
        }
    }

    /// Notifies every due fee once.
    ///
    /// Stops at the first delivery failure; fees already handled stay marked, the rest
    /// are picked up by the next run.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of fees marked notified
    /// - `Err(AppError)` - Mail delivery or database failure
    pub async fn sweep(&self, now: DateTime<Utc>) -> Result<u64, AppError> {
        let repo = MembershipFeeRepository::new(self.db);
        let due = repo.get_due(now).await?;

        let mut notified = 0;
        for entry in due {
            let mail = expiry_mail(&entry, self.app_url);
            self.mailer.send(&mail).await?;

            if repo.mark_notified(entry.fee.id).await? {
                notified += 1;
            }
        }

        if notified > 0 {
            tracing::info!("Sent {} membership expiry notification(s)", notified);
        }

        Ok(notified)
    }
}

fn expiry_mail(entry: &DueFee, app_url: &str) -> Mail {
    let link = format!("{}/dashboard/membership", app_url.trim_end_matches('/'));

    Mail {
        to: entry.member_email.clone(),
        subject: format!("Your {} membership has expired", entry.gym_name),
        text: format!(
            "Hello {},\n\nYour membership at {} expired on {}. \
             Please contact the gym to renew it.\n\nView your membership: {}\n",
            entry.member_name,
            entry.gym_name,
            entry.fee.end_date.format("%Y-%m-%d"),
            link
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::model::member::MembershipFee;

    #[test]
    fn mail_names_gym_and_links_dashboard() {
        let end_date = DateTime::parse_from_rfc3339("2026-03-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let entry = DueFee {
            fee: MembershipFee {
                id: 1,
                member_id: 1,
                amount: 30.0,
                start_date: end_date - chrono::Duration::days(30),
                end_date,
                is_expired: false,
                notified: false,
            },
            member_name: "Alex".to_string(),
            member_email: "alex@example.com".to_string(),
            gym_name: "Iron Works".to_string(),
        };

        let mail = expiry_mail(&entry, "https://gym.example.com/");

        assert_eq!(mail.to, "alex@example.com");
        assert!(mail.subject.contains("Iron Works"));
        assert!(mail.text.contains("2026-03-01"));
        assert!(mail
            .text
            .contains("https://gym.example.com/dashboard/membership"));
    }
}
