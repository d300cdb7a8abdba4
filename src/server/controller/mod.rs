//! HTTP request handlers.
//!
//! Every handler authenticates through `AuthGuard` with the roles allowed for the
//! endpoint, converts DTOs into parameter models, calls one service and converts the
//! result back into a DTO. Ownership failures surface as 404 so callers cannot probe
//! for other tenants' IDs.

pub mod analytics;
pub mod auth;
pub mod cron;
pub mod equipment;
pub mod feature;
pub mod gym;
pub mod member;
pub mod membership;
pub mod subscription;
pub mod todo;
pub mod upload;
pub mod user;

use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::server::{error::AppError, middleware::session::AuthSession, state::AppState};

/// Optional `?gym_id=` filter for owner list endpoints.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GymFilter {
    /// Restrict results to one of the caller's gyms.
    pub gym_id: Option<i32>,
}

/// Gym a create request targets: the explicit ID, else the session's selected gym.
///
/// Ownership is checked by the service that performs the insert.
///
/// # Returns
/// - `Err(AppError::BadRequest)` - Neither an explicit nor a selected gym is available
async fn target_gym(session: &Session, explicit: Option<i32>) -> Result<i32, AppError> {
    if let Some(gym_id) = explicit {
        return Ok(gym_id);
    }

    AuthSession::new(session)
        .get_selected_gym_id()
        .await?
        .ok_or_else(|| AppError::bad_request("Select a gym first"))
}

/// Gym IDs an owner request applies to, resolved from the optional filter.
async fn owner_scope(
    state: &AppState,
    owner_id: i32,
    filter: &GymFilter,
) -> Result<Vec<i32>, AppError> {
    crate::server::service::gym::GymService::new(&state.db)
        .scope(owner_id, filter.gym_id)
        .await
}
