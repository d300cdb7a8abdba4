use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID stored in the session; the caller is not signed in.
    ///
    /// Results in 401 Unauthorized.
    #[error("No user in session")]
    UserNotInSession,

    /// The session references a user that no longer exists or was soft-deleted.
    ///
    /// Results in 401 Unauthorized.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Email/password combination did not match an account.
    ///
    /// Results in 401 Unauthorized.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The account exists but has been deactivated.
    ///
    /// Results in 403 Forbidden.
    #[error("User {0} is deactivated")]
    AccountDisabled(i32),

    /// The user's role is not in the endpoint's allow-list.
    ///
    /// Results in 403 Forbidden. The message is logged, not returned.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Scheduled-job trigger called without the configured bearer secret.
    ///
    /// Results in 401 Unauthorized.
    #[error("Invalid cron secret")]
    InvalidCronSecret,
}

/// Converts authentication errors into HTTP responses.
///
/// Client-facing messages stay generic; the detailed variant is logged at debug level.
///
/// # Returns
/// - 401 Unauthorized - Not signed in, stale session, bad credentials or cron secret
/// - 403 Forbidden - Deactivated account or disallowed role
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Not signed in")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid email or password"),
            Self::InvalidCronSecret => (StatusCode::UNAUTHORIZED, "Unauthorized"),
            Self::AccountDisabled(_) => (StatusCode::FORBIDDEN, "Account is deactivated"),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You do not have permission to perform this action",
            ),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
