//! Route-prefix access control for dashboard pages.
//!
//! Page requests are checked against an ordered table of path prefixes. The first
//! prefix that matches decides which roles may see the page; paths that match no
//! prefix are public. The role comes from the session claim set at sign-in.

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::{
    model::user::Role,
    server::{error::AppError, middleware::session::AuthSession},
};

pub const SIGN_IN_PATH: &str = "/sign-in";
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";

const ALL_ROLES: &[Role] = &Role::ALL;

/// Ordered `(prefix, allowed roles)` pairs. More specific prefixes come first.
pub const ACCESS_TABLE: &[(&str, &[Role])] = &[
    ("/dashboard/users", &[Role::Superadmin]),
    ("/dashboard/subscriptions", &[Role::Superadmin]),
    ("/dashboard/features", &[Role::Superadmin]),
    ("/dashboard/admin", &[Role::Superadmin]),
    ("/dashboard/gyms", &[Role::Owner]),
    ("/dashboard/members", &[Role::Owner]),
    ("/dashboard/equipment", &[Role::Owner]),
    ("/dashboard/analytics", &[Role::Owner]),
    ("/dashboard/membership", &[Role::Member]),
    ("/dashboard/todos", ALL_ROLES),
    ("/dashboard", ALL_ROLES),
];

/// Outcome of an access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    /// Protected page and no role in the session.
    SignIn,
    /// Protected page and the role is not allowed.
    Unauthorized,
}

/// Decides whether a role may open a page.
///
/// Plain `starts_with` matching; the first matching table entry wins.
pub fn access(role: Option<Role>, path: &str) -> Access {
    let Some((_, allowed)) = ACCESS_TABLE
        .iter()
        .find(|(prefix, _)| path.starts_with(prefix))
    else {
        return Access::Allow;
    };

    match role {
        None => Access::SignIn,
        Some(role) if allowed.contains(&role) => Access::Allow,
        Some(_) => Access::Unauthorized,
    }
}

/// Middleware redirecting page requests the session's role may not see.
pub async fn page_guard(session: Session, request: Request, next: Next) -> Response {
    let role = match AuthSession::new(&session).get_role().await {
        Ok(role) => role,
        Err(e) => return e.into_response(),
    };

    match access(role, request.uri().path()) {
        Access::Allow => next.run(request).await,
        Access::SignIn => Redirect::to(SIGN_IN_PATH).into_response(),
        Access::Unauthorized => Redirect::to(UNAUTHORIZED_PATH).into_response(),
    }
}

/// Middleware answering unmatched `/api` paths with a JSON 404 before the page fallback.
pub async fn api_not_found(request: Request, next: Next) -> Response {
    let path = request.uri().path();
    if path == "/api" || path.starts_with("/api/") {
        return AppError::not_found("Route").into_response();
    }

    next.run(request).await
}
