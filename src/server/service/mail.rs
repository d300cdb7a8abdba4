//! Outgoing email.
//!
//! Mail goes to an HTTP mail API as a JSON POST authenticated with a bearer key. When
//! no API is configured the message is written to the log instead, which keeps local
//! development and tests free of network calls.

use serde::Serialize;

use crate::server::{
    config::MailConfig,
    error::{internal::InternalError, AppError},
};

/// A plain-text email.
#[derive(Debug, Clone, PartialEq)]
pub struct Mail {
    pub to: String,
    pub subject: String,
    pub text: String,
}

#[derive(Serialize)]
struct MailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
}

/// Delivery backend for outgoing mail.
#[derive(Clone)]
pub enum Mailer {
    /// Sends through the configured HTTP mail API.
    Http {
        client: reqwest::Client,
        config: MailConfig,
    },
    /// Logs each message at info level and reports success.
    Log,
}

impl Mailer {
    /// Picks the HTTP backend when mail is configured, logging otherwise.
    pub fn new(client: reqwest::Client, config: Option<MailConfig>) -> Self {
        match config {
            Some(config) => Self::Http { client, config },
            None => Self::Log,
        }
    }

    /// Delivers one message.
    ///
    /// # Returns
    /// - `Ok(())` - The API accepted the message, or it was logged
    /// - `Err(AppError::ReqwestErr)` - The API could not be reached
    /// - `Err(AppError::InternalErr(MailDelivery))` - The API answered with an error status
    pub async fn send(&self, mail: &Mail) -> Result<(), AppError> {
        match self {
            Self::Http { client, config } => {
                let response = client
                    .post(&config.api_url)
                    .bearer_auth(&config.api_key)
                    .json(&MailRequest {
                        from: &config.from,
                        to: &mail.to,
                        subject: &mail.subject,
                        text: &mail.text,
                    })
                    .send()
                    .await?;

                let status = response.status();
                if !status.is_success() {
                    let body = response.text().await.unwrap_or_default();
                    return Err(InternalError::MailDelivery {
                        recipient: mail.to.clone(),
                        status: status.as_u16(),
                        body,
                    }
                    .into());
                }

                tracing::debug!("Sent mail '{}' to {}", mail.subject, mail.to);
                Ok(())
            }
            Self::Log => {
                tracing::info!(
                    to = %mail.to,
                    subject = %mail.subject,
                    "Mail delivery not configured, logging message:\n{}",
                    mail.text
                );
                Ok(())
            }
        }
    }
}
