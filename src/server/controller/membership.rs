use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, member::MembershipSummaryDto, user::Role},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::membership::MembershipService,
        state::AppState,
    },
};

/// Tag for grouping the member self-service endpoint in OpenAPI documentation
pub static MEMBERSHIP_TAG: &str = "membership";

/// The signed-in member's gym, current status and fee history.
///
/// # Access Control
/// - `MEMBER`
///
/// # Returns
/// - `200 OK` - Membership summary
/// - `404 Not Found` - No member record for this account
#[utoipa::path(
    get,
    path = "/api/membership",
    tag = MEMBERSHIP_TAG,
    responses(
        (status = 200, description = "Own membership", body = MembershipSummaryDto),
        (status = 403, description = "Not a member", body = ErrorDto),
        (status = 404, description = "Membership not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_membership(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Role::Member])
        .await?;

    let summary = MembershipService::new(&state.db)
        .summary(user.id)
        .await?
        .ok_or_else(|| AppError::not_found("Membership"))?;

    Ok((StatusCode::OK, Json(summary.into_dto(Utc::now()))))
}
