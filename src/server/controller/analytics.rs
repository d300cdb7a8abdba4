use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{
        analytics::{AdminAnalyticsDto, OwnerAnalyticsDto},
        api::ErrorDto,
        user::Role,
    },
    server::{
        controller::{owner_scope, GymFilter},
        error::AppError,
        middleware::auth::AuthGuard,
        service::analytics::AnalyticsService,
        state::AppState,
    },
};

/// Tag for grouping analytics endpoints in OpenAPI documentation
pub static ANALYTICS_TAG: &str = "analytics";

/// Platform totals: users by role, gyms, plan usage and monthly recurring revenue.
///
/// # Access Control
/// - `SUPERADMIN`
#[utoipa::path(
    get,
    path = "/api/analytics/admin",
    tag = ANALYTICS_TAG,
    responses(
        (status = 200, description = "Platform totals", body = AdminAnalyticsDto),
        (status = 403, description = "Not a superadmin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_admin_analytics(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Role::Superadmin])
        .await?;

    let analytics = AnalyticsService::new(&state.db).admin().await?;

    Ok((StatusCode::OK, Json(analytics.into_dto())))
}

/// Totals for the caller's gyms, or one gym with `?gym_id=`.
///
/// # Access Control
/// - `OWNER`
#[utoipa::path(
    get,
    path = "/api/analytics/owner",
    tag = ANALYTICS_TAG,
    params(GymFilter),
    responses(
        (status = 200, description = "Gym totals", body = OwnerAnalyticsDto),
        (status = 403, description = "Not an owner", body = ErrorDto),
        (status = 404, description = "Gym not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_owner_analytics(
    State(state): State<AppState>,
    session: Session,
    Query(filter): Query<GymFilter>,
) -> Result<impl IntoResponse, AppError> {
    let owner = AuthGuard::new(&state.db, &session)
        .require(&[Role::Owner])
        .await?;

    let gym_ids = owner_scope(&state, owner.id, &filter).await?;
    let analytics = AnalyticsService::new(&state.db)
        .owner(&gym_ids, Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(analytics.into_dto())))
}
