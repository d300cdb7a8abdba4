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
        subscription::{CreateFeatureDto, FeatureDto, UpdateFeatureDto},
        user::Role,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::subscription::{CreateFeatureParams, UpdateFeatureParams},
        service::feature::FeatureService,
        state::AppState,
    },
};

/// Tag for grouping feature endpoints in OpenAPI documentation
pub static FEATURE_TAG: &str = "feature";

/// Create a plan feature.
///
/// # Access Control
/// - `SUPERADMIN`
#[utoipa::path(
    post,
    path = "/api/features",
    tag = FEATURE_TAG,
    request_body = CreateFeatureDto,
    responses(
        (status = 201, description = "Feature created", body = FeatureDto),
        (status = 400, description = "Invalid feature data", body = ErrorDto),
        (status = 403, description = "Not a superadmin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_feature(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateFeatureDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Role::Superadmin])
        .await?;

    let params = CreateFeatureParams::from_dto(payload)?;
    let feature = FeatureService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(feature.into_dto())))
}

/// List every non-deleted feature.
#[utoipa::path(
    get,
    path = "/api/features",
    tag = FEATURE_TAG,
    responses(
        (status = 200, description = "All features", body = Vec<FeatureDto>),
        (status = 403, description = "Not a superadmin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_features(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Role::Superadmin])
        .await?;

    let features: Vec<FeatureDto> = FeatureService::new(&state.db)
        .get_all()
        .await?
        .into_iter()
        .map(|f| f.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(features)))
}

#[utoipa::path(
    put,
    path = "/api/features/{id}",
    tag = FEATURE_TAG,
    params(("id" = i32, Path, description = "Feature ID")),
    request_body = UpdateFeatureDto,
    responses(
        (status = 200, description = "Feature updated", body = FeatureDto),
        (status = 400, description = "Invalid feature data", body = ErrorDto),
        (status = 404, description = "Feature not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_feature(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateFeatureDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Role::Superadmin])
        .await?;

    let params = UpdateFeatureParams::from_dto(id, payload)?;
    let feature = FeatureService::new(&state.db)
        .update(params)
        .await?
        .ok_or_else(|| AppError::not_found("Feature"))?;

    Ok((StatusCode::OK, Json(feature.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/api/features/{id}/toggle-status",
    tag = FEATURE_TAG,
    params(("id" = i32, Path, description = "Feature ID")),
    responses(
        (status = 200, description = "Status toggled", body = FeatureDto),
        (status = 404, description = "Feature not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn toggle_feature_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Role::Superadmin])
        .await?;

    let feature = FeatureService::new(&state.db)
        .toggle_status(id)
        .await?
        .ok_or_else(|| AppError::not_found("Feature"))?;

    Ok((StatusCode::OK, Json(feature.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/features/{id}",
    tag = FEATURE_TAG,
    params(("id" = i32, Path, description = "Feature ID")),
    responses(
        (status = 204, description = "Feature deleted"),
        (status = 404, description = "Feature not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_feature(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Role::Superadmin])
        .await?;

    if !FeatureService::new(&state.db).delete(id).await? {
        return Err(AppError::not_found("Feature"));
    }

    Ok(StatusCode::NO_CONTENT)
}
