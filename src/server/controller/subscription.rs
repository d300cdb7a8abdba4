use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        subscription::{CreateSubscriptionDto, SubscriptionDto, UpdateSubscriptionDto},
        user::Role,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::subscription::{CreateSubscriptionParams, UpdateSubscriptionParams},
        service::subscription::SubscriptionService,
        state::AppState,
    },
};

/// Tag for grouping subscription plan endpoints in OpenAPI documentation
pub static SUBSCRIPTION_TAG: &str = "subscription";

/// Create a subscription plan with its features.
///
/// # Access Control
/// - `SUPERADMIN`
///
/// # Returns
/// - `201 Created` - The created plan
/// - `400 Bad Request` - Invalid fields or unknown feature IDs
#[utoipa::path(
    post,
    path = "/api/subscriptions",
    tag = SUBSCRIPTION_TAG,
    request_body = CreateSubscriptionDto,
    responses(
        (status = 201, description = "Plan created", body = SubscriptionDto),
        (status = 400, description = "Invalid plan data", body = ErrorDto),
        (status = 403, description = "Not a superadmin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_subscription(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateSubscriptionDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Role::Superadmin])
        .await?;

    let params = CreateSubscriptionParams::from_dto(payload)?;
    let plan = SubscriptionService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(plan.into_dto())))
}

/// List every non-deleted plan, active or not.
#[utoipa::path(
    get,
    path = "/api/subscriptions",
    tag = SUBSCRIPTION_TAG,
    responses(
        (status = 200, description = "All plans", body = Vec<SubscriptionDto>),
        (status = 403, description = "Not a superadmin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_subscriptions(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Role::Superadmin])
        .await?;

    let plans: Vec<SubscriptionDto> = SubscriptionService::new(&state.db)
        .get_all()
        .await?
        .into_iter()
        .map(|p| p.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(plans)))
}

/// List active plans, cheapest first.
///
/// Open to anonymous callers so the sign-up form can offer a plan.
#[utoipa::path(
    get,
    path = "/api/subscriptions/active",
    tag = SUBSCRIPTION_TAG,
    responses(
        (status = 200, description = "Active plans", body = Vec<SubscriptionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_active_subscriptions(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let plans: Vec<SubscriptionDto> = SubscriptionService::new(&state.db)
        .get_active()
        .await?
        .into_iter()
        .map(|p| p.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(plans)))
}

#[utoipa::path(
    get,
    path = "/api/subscriptions/{id}",
    tag = SUBSCRIPTION_TAG,
    params(("id" = i32, Path, description = "Plan ID")),
    responses(
        (status = 200, description = "The plan", body = SubscriptionDto),
        (status = 404, description = "Plan not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_subscription(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Role::Superadmin])
        .await?;

    let plan = SubscriptionService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Subscription"))?;

    Ok((StatusCode::OK, Json(plan.into_dto())))
}

/// Update a plan. A given `feature_ids` list replaces the plan's features.
#[utoipa::path(
    put,
    path = "/api/subscriptions/{id}",
    tag = SUBSCRIPTION_TAG,
    params(("id" = i32, Path, description = "Plan ID")),
    request_body = UpdateSubscriptionDto,
    responses(
        (status = 200, description = "Plan updated", body = SubscriptionDto),
        (status = 400, description = "Invalid plan data", body = ErrorDto),
        (status = 404, description = "Plan not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_subscription(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateSubscriptionDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Role::Superadmin])
        .await?;

    let params = UpdateSubscriptionParams::from_dto(id, payload)?;
    let plan = SubscriptionService::new(&state.db)
        .update(params)
        .await?
        .ok_or_else(|| AppError::not_found("Subscription"))?;

    Ok((StatusCode::OK, Json(plan.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/api/subscriptions/{id}/toggle-status",
    tag = SUBSCRIPTION_TAG,
    params(("id" = i32, Path, description = "Plan ID")),
    responses(
        (status = 200, description = "Status toggled", body = SubscriptionDto),
        (status = 404, description = "Plan not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn toggle_subscription_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Role::Superadmin])
        .await?;

    let plan = SubscriptionService::new(&state.db)
        .toggle_status(id)
        .await?
        .ok_or_else(|| AppError::not_found("Subscription"))?;

    Ok((StatusCode::OK, Json(plan.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/subscriptions/{id}",
    tag = SUBSCRIPTION_TAG,
    params(("id" = i32, Path, description = "Plan ID")),
    responses(
        (status = 204, description = "Plan deleted"),
        (status = 404, description = "Plan not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_subscription(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Role::Superadmin])
        .await?;

    if !SubscriptionService::new(&state.db).delete(id).await? {
        return Err(AppError::not_found("Subscription"));
    }

    Ok(StatusCode::NO_CONTENT)
}
