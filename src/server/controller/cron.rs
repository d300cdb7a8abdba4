use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use subtle::ConstantTimeEq;

use crate::{
    model::{api::ErrorDto, member::ExpirySweepDto},
    server::{
        error::{auth::AuthError, AppError},
        service::expiry::ExpirySweepService,
        state::AppState,
    },
};

/// Tag for grouping scheduled-job triggers in OpenAPI documentation
pub static CRON_TAG: &str = "cron";

/// Run the membership expiry sweep now.
///
/// For external schedulers; the in-process scheduler runs the same sweep.
///
/// # Access Control
/// - `Authorization: Bearer <CRON_SECRET>`
#[utoipa::path(
    get,
    path = "/api/cron/membership-expiry",
    tag = CRON_TAG,
    responses(
        (status = 200, description = "Sweep finished", body = ExpirySweepDto),
        (status = 401, description = "Missing or wrong secret", body = ErrorDto),
        (status = 500, description = "Sweep failed", body = ErrorDto)
    ),
)]
pub async fn run_membership_expiry(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    if !has_secret(&headers, &state.cron_secret) {
        return Err(AuthError::InvalidCronSecret.into());
    }

    let notified = ExpirySweepService::new(&state.db, &state.mailer, &state.app_url)
        .sweep(Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(ExpirySweepDto { notified })))
}

fn has_secret(headers: &HeaderMap, secret: &str) -> bool {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .is_some_and(|token| bool::from(token.as_bytes().ct_eq(secret.as_bytes())))
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn accepts_matching_bearer() {
        assert!(has_secret(&headers("Bearer s3cret"), "s3cret"));
    }

    #[test]
    fn rejects_wrong_or_missing_secret() {
        assert!(!has_secret(&headers("Bearer other"), "s3cret"));
        assert!(!has_secret(&headers("s3cret"), "s3cret"));
        assert!(!has_secret(&HeaderMap::new(), "s3cret"));
    }

    #[test]
    fn rejects_same_length_or_prefixed_token() {
        assert!(!has_secret(&headers("Bearer s3creT"), "s3cret"));
        assert!(!has_secret(&headers("Bearer s3cre"), "s3cret"));
        assert!(!has_secret(&headers("Bearer s3crets"), "s3cret"));
        assert!(!has_secret(&headers("Bearer "), "s3cret"));
    }
}
