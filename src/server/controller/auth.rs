use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        auth::{SessionUserDto, SignInDto, SignUpDto, UpdateProfileDto, UpdateSessionDto},
        user::UserDto,
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        model::user::{CreateUserParams, UpdateUserParams},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new gym owner.
///
/// Sign-up always creates an OWNER. The optional plan must exist and be active. The
/// new account is not signed in automatically.
///
/// # Returns
/// - `201 Created` - The created owner
/// - `400 Bad Request` - Invalid fields, email taken, or plan unavailable
#[utoipa::path(
    post,
    path = "/api/auth/sign-up",
    tag = AUTH_TAG,
    request_body = SignUpDto,
    responses(
        (status = 201, description = "Owner registered", body = UserDto),
        (status = 400, description = "Invalid sign-up data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sign_up(
    State(state): State<AppState>,
    Json(payload): Json<SignUpDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateUserParams::from_sign_up(payload)?;

    let user = AuthService::new(&state.db).sign_up(params).await?;

    tracing::info!("Registered owner {} ({})", user.id, user.email);

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Sign in with email and password.
///
/// Cycles the session ID and stores the user ID, role and default gym.
///
/// # Returns
/// - `200 OK` - The signed-in user and session claims
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `403 Forbidden` - Account deactivated
#[utoipa::path(
    post,
    path = "/api/auth/sign-in",
    tag = AUTH_TAG,
    request_body = SignInDto,
    responses(
        (status = 200, description = "Signed in", body = SessionUserDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 403, description = "Account deactivated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sign_in(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SignInDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db);

    let user = auth_service
        .sign_in(&payload.email, &payload.password)
        .await?;
    let selected_gym_id = auth_service.default_gym(&user).await?;

    AuthSession::new(&session)
        .sign_in(user.id, user.role, selected_gym_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(SessionUserDto {
            role: user.role,
            user: user.into_dto(),
            selected_gym_id,
        }),
    ))
}

/// Sign out and clear the session.
#[utoipa::path(
    post,
    path = "/api/auth/sign-out",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Signed out"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sign_out(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the signed-in user and session claims.
///
/// # Returns
/// - `200 OK` - Current user, role and selected gym
/// - `401 Unauthorized` - Not signed in
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current session", body = SessionUserDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Account deactivated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;
    let selected_gym_id = AuthSession::new(&session).get_selected_gym_id().await?;

    Ok((
        StatusCode::OK,
        Json(SessionUserDto {
            role: user.role,
            user: user.into_dto(),
            selected_gym_id,
        }),
    ))
}

/// Change the gym selected in the session.
///
/// Owners may select their own gyms, members only their gym, superadmins any gym.
/// `null` clears the selection.
///
/// # Returns
/// - `200 OK` - Updated session claims
/// - `404 Not Found` - The gym is missing or not selectable by the caller
#[utoipa::path(
    put,
    path = "/api/auth/session",
    tag = AUTH_TAG,
    request_body = UpdateSessionDto,
    responses(
        (status = 200, description = "Session updated", body = SessionUserDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Gym not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_session(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateSessionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    if let Some(gym_id) = payload.selected_gym_id {
        if !AuthService::new(&state.db)
            .can_select_gym(&user, gym_id)
            .await?
        {
            return Err(AppError::not_found("Gym"));
        }
    }

    AuthSession::new(&session)
        .set_selected_gym_id(payload.selected_gym_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(SessionUserDto {
            role: user.role,
            user: user.into_dto(),
            selected_gym_id: payload.selected_gym_id,
        }),
    ))
}

/// Update the signed-in user's own profile.
///
/// # Returns
/// - `200 OK` - The updated user
/// - `400 Bad Request` - Invalid fields or too short a password
#[utoipa::path(
    put,
    path = "/api/auth/profile",
    tag = AUTH_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = UserDto),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = UpdateUserParams::from_profile_dto(user.id, payload)?;

    let user = AuthService::new(&state.db)
        .update_profile(params)
        .await?
        .ok_or_else(|| AppError::not_found("User"))?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
