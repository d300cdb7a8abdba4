use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        upload::{UploadDto, UploadedFileDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::upload::UploadService,
        state::AppState,
    },
};

/// Tag for grouping upload endpoints in OpenAPI documentation
pub static UPLOAD_TAG: &str = "upload";

/// Store an image and return the URL it is served from.
///
/// # Access Control
/// - Any signed-in user
///
/// # Returns
/// - `201 Created` - Public URL under `/uploads`
/// - `400 Bad Request` - Not an image, invalid base64, empty, or larger than 5 MiB
#[utoipa::path(
    post,
    path = "/api/uploads",
    tag = UPLOAD_TAG,
    request_body = UploadDto,
    responses(
        (status = 201, description = "File stored", body = UploadedFileDto),
        (status = 400, description = "Rejected upload", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_file(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UploadDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let url = UploadService::new(&state.upload_dir).save(payload).await?;

    Ok((StatusCode::CREATED, Json(UploadedFileDto { url })))
}
