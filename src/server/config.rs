use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_APP_URL: &str = "http://localhost:8080";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_PUBLIC_DIR: &str = "public";
const DEFAULT_UPLOAD_DIR: &str = "uploads";
/// Every day at 06:00 UTC (sec min hour day month weekday).
const DEFAULT_EXPIRY_SWEEP_SCHEDULE: &str = "0 0 6 * * *";

/// HTTP mail API settings. Mail is logged instead of sent when these are absent.
#[derive(Clone, Debug)]
pub struct MailConfig {
    pub api_url: String,
    pub api_key: String,
    pub from: String,
}

/// Credentials for the SUPERADMIN account created on first startup.
#[derive(Clone, Debug)]
pub struct SuperadminConfig {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub struct Config {
    pub database_url: String,
    pub app_url: String,
    pub bind_address: String,
    pub public_dir: String,
    pub upload_dir: String,

    pub cron_secret: String,
    pub expiry_sweep_schedule: String,

    pub mail: Option<MailConfig>,
    pub superadmin: Option<SuperadminConfig>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let mail = match (optional("MAIL_API_URL"), optional("MAIL_API_KEY")) {
            (Some(api_url), Some(api_key)) => Some(MailConfig {
                api_url,
                api_key,
                from: required("MAIL_FROM")?,
            }),
            _ => None,
        };

        let superadmin = match (optional("SUPERADMIN_EMAIL"), optional("SUPERADMIN_PASSWORD")) {
            (Some(email), Some(password)) => Some(SuperadminConfig {
                name: optional("SUPERADMIN_NAME").unwrap_or_else(|| "Super Admin".to_string()),
                email,
                password,
            }),
            _ => None,
        };

        let app_url = optional("APP_URL").unwrap_or_else(|| DEFAULT_APP_URL.to_string());
        url::Url::parse(&app_url).map_err(|e| ConfigError::InvalidEnvVar {
            name: "APP_URL".to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            app_url,
            bind_address: optional("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            public_dir: optional("PUBLIC_DIR").unwrap_or_else(|| DEFAULT_PUBLIC_DIR.to_string()),
            upload_dir: optional("UPLOAD_DIR").unwrap_or_else(|| DEFAULT_UPLOAD_DIR.to_string()),
            cron_secret: required("CRON_SECRET")?,
            expiry_sweep_schedule: optional("EXPIRY_SWEEP_SCHEDULE")
                .unwrap_or_else(|| DEFAULT_EXPIRY_SWEEP_SCHEDULE.to_string()),
            mail,
            superadmin,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    optional(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads an environment variable, treating empty values as unset.
fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}
