use std::path::Path;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{delete, get, patch, post, put},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tower_sessions::SessionManagerLayer;
use tower_sessions_sqlx_store::SqliteStore;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        analytics::{self, get_admin_analytics, get_owner_analytics},
        auth::{self, get_user, sign_in, sign_out, sign_up, update_profile, update_session},
        cron::{self, run_membership_expiry},
        equipment::{
            self, create_equipment, delete_equipment, get_equipment, get_equipment_list,
            toggle_equipment_status, update_equipment,
        },
        feature::{
            self, create_feature, delete_feature, get_features, toggle_feature_status,
            update_feature,
        },
        gym::{self, create_gym, delete_gym, get_gym, get_gyms, toggle_gym_status, update_gym},
        member::{
            self, create_member, delete_member, get_expiring_members, get_member,
            get_member_fees, get_members, renew_membership, toggle_member_status, update_member,
        },
        membership::{self, get_membership},
        subscription::{
            self, create_subscription, delete_subscription, get_active_subscriptions,
            get_subscription, get_subscriptions, toggle_subscription_status, update_subscription,
        },
        todo::{self, create_todo, delete_todo, get_todos, toggle_todo, update_todo},
        upload::{self, upload_file},
        user::{self, assign_subscription, delete_user, get_users, toggle_user_status},
    },
    middleware::access::{api_not_found, page_guard},
    service::upload::{UPLOAD_BODY_LIMIT, UPLOAD_URL_PREFIX},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Gymboard API", description = "Multi-tenant gym management"),
    paths(
        auth::sign_up,
        auth::sign_in,
        auth::sign_out,
        auth::get_user,
        auth::update_session,
        auth::update_profile,
        user::get_users,
        user::toggle_user_status,
        user::delete_user,
        user::assign_subscription,
        feature::create_feature,
        feature::get_features,
        feature::update_feature,
        feature::toggle_feature_status,
        feature::delete_feature,
        subscription::create_subscription,
        subscription::get_subscriptions,
        subscription::get_active_subscriptions,
        subscription::get_subscription,
        subscription::update_subscription,
        subscription::toggle_subscription_status,
        subscription::delete_subscription,
        gym::create_gym,
        gym::get_gyms,
        gym::get_gym,
        gym::update_gym,
        gym::toggle_gym_status,
        gym::delete_gym,
        member::create_member,
        member::get_members,
        member::get_expiring_members,
        member::get_member,
        member::update_member,
        member::toggle_member_status,
        member::delete_member,
        member::get_member_fees,
        member::renew_membership,
        membership::get_membership,
        equipment::create_equipment,
        equipment::get_equipment_list,
        equipment::get_equipment,
        equipment::update_equipment,
        equipment::toggle_equipment_status,
        equipment::delete_equipment,
        todo::create_todo,
        todo::get_todos,
        todo::update_todo,
        todo::toggle_todo,
        todo::delete_todo,
        analytics::get_admin_analytics,
        analytics::get_owner_analytics,
        upload::upload_file,
        cron::run_membership_expiry,
    ),
    components(schemas(
        crate::model::api::ErrorDto,
        crate::model::auth::SignUpDto,
        crate::model::auth::SignInDto,
        crate::model::auth::SessionUserDto,
        crate::model::auth::UpdateSessionDto,
        crate::model::auth::UpdateProfileDto,
        crate::model::user::Role,
        crate::model::user::UserDto,
        crate::model::user::PaginatedUsersDto,
        crate::model::user::AssignSubscriptionDto,
        crate::model::subscription::FeatureDto,
        crate::model::subscription::CreateFeatureDto,
        crate::model::subscription::UpdateFeatureDto,
        crate::model::subscription::SubscriptionDto,
        crate::model::subscription::CreateSubscriptionDto,
        crate::model::subscription::UpdateSubscriptionDto,
        crate::model::gym::GymDto,
        crate::model::gym::CreateGymDto,
        crate::model::gym::UpdateGymDto,
        crate::model::member::ExpiryStatus,
        crate::model::member::MemberDto,
        crate::model::member::CreateMemberDto,
        crate::model::member::UpdateMemberDto,
        crate::model::member::RenewMembershipDto,
        crate::model::member::MembershipFeeDto,
        crate::model::member::ExpiringMemberDto,
        crate::model::member::MembershipSummaryDto,
        crate::model::member::ExpirySweepDto,
        crate::model::equipment::EquipmentType,
        crate::model::equipment::EquipmentDto,
        crate::model::equipment::CreateEquipmentDto,
        crate::model::equipment::UpdateEquipmentDto,
        crate::model::todo::TodoDto,
        crate::model::todo::CreateTodoDto,
        crate::model::todo::UpdateTodoDto,
        crate::model::upload::UploadDto,
        crate::model::upload::UploadedFileDto,
        crate::model::analytics::AdminAnalyticsDto,
        crate::model::analytics::OwnerAnalyticsDto,
        crate::model::analytics::PlanUsageDto,
        crate::model::analytics::EquipmentTypeCountDto,
    )),
    tags(
        (name = "auth", description = "Sign-up, sign-in and session claims"),
        (name = "user", description = "User administration"),
        (name = "feature", description = "Plan features"),
        (name = "subscription", description = "Subscription plans"),
        (name = "gym", description = "Gyms"),
        (name = "member", description = "Members and membership fees"),
        (name = "membership", description = "Member self-service"),
        (name = "equipment", description = "Gym equipment"),
        (name = "todo", description = "Personal todo lists"),
        (name = "analytics", description = "Dashboard totals"),
        (name = "upload", description = "Image uploads"),
        (name = "cron", description = "Scheduled job triggers"),
    )
)]
pub struct ApiDoc;

/// JSON API routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/sign-up", post(sign_up))
        .route("/api/auth/sign-in", post(sign_in))
        .route("/api/auth/sign-out", post(sign_out))
        .route("/api/auth/user", get(get_user))
        .route("/api/auth/session", put(update_session))
        .route("/api/auth/profile", put(update_profile))
        .route("/api/users", get(get_users))
        .route("/api/users/{id}", delete(delete_user))
        .route("/api/users/{id}/toggle-status", patch(toggle_user_status))
        .route("/api/users/{id}/subscription", put(assign_subscription))
        .route("/api/features", get(get_features).post(create_feature))
        .route(
            "/api/features/{id}",
            put(update_feature).delete(delete_feature),
        )
        .route(
            "/api/features/{id}/toggle-status",
            patch(toggle_feature_status),
        )
        .route(
            "/api/subscriptions",
            get(get_subscriptions).post(create_subscription),
        )
        .route("/api/subscriptions/active", get(get_active_subscriptions))
        .route(
            "/api/subscriptions/{id}",
            get(get_subscription)
                .put(update_subscription)
                .delete(delete_subscription),
        )
        .route(
            "/api/subscriptions/{id}/toggle-status",
            patch(toggle_subscription_status),
        )
        .route("/api/gyms", get(get_gyms).post(create_gym))
        .route(
            "/api/gyms/{id}",
            get(get_gym).put(update_gym).delete(delete_gym),
        )
        .route("/api/gyms/{id}/toggle-status", patch(toggle_gym_status))
        .route("/api/members", get(get_members).post(create_member))
        .route("/api/members/expiring", get(get_expiring_members))
        .route(
            "/api/members/{id}",
            get(get_member).put(update_member).delete(delete_member),
        )
        .route(
            "/api/members/{id}/toggle-status",
            patch(toggle_member_status),
        )
        .route(
            "/api/members/{id}/fees",
            get(get_member_fees).post(renew_membership),
        )
        .route("/api/membership", get(get_membership))
        .route(
            "/api/equipment",
            get(get_equipment_list).post(create_equipment),
        )
        .route(
            "/api/equipment/{id}",
            get(get_equipment)
                .put(update_equipment)
                .delete(delete_equipment),
        )
        .route(
            "/api/equipment/{id}/toggle-status",
            patch(toggle_equipment_status),
        )
        .route("/api/todos", get(get_todos).post(create_todo))
        .route(
            "/api/todos/{id}",
            put(update_todo).delete(delete_todo),
        )
        .route("/api/todos/{id}/toggle", patch(toggle_todo))
        .route("/api/analytics/admin", get(get_admin_analytics))
        .route("/api/analytics/owner", get(get_owner_analytics))
        .route(
            "/api/uploads",
            post(upload_file).layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
        .route("/api/cron/membership-expiry", get(run_membership_expiry))
}

/// Full application: API, docs, uploaded files and the guarded dashboard pages.
///
/// Unknown page paths fall back to `index.html` so the client can route them; unknown
/// `/api` paths get a JSON 404.
pub fn app(state: AppState, public_dir: &Path, session: SessionManagerLayer<SqliteStore>) -> Router {
    let upload_dir = state.upload_dir.clone();

    let pages = Router::new()
        .fallback_service(
            ServeDir::new(public_dir).fallback(ServeFile::new(public_dir.join("index.html"))),
        )
        .layer(middleware::from_fn(page_guard))
        .layer(middleware::from_fn(api_not_found));

    router()
        .with_state(state)
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .nest_service(UPLOAD_URL_PREFIX, ServeDir::new(upload_dir))
        .merge(pages)
        .layer(session)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{
            header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE},
            Request, StatusCode,
        },
    };
    use base64::{engine::general_purpose::STANDARD, Engine};
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use tower_sessions::{Expiry, SessionManagerLayer};
    use tower_sessions_sqlx_store::SqliteStore;

    use test_utils::builder::TestBuilder;

    use super::*;
    use crate::server::service::{mail::Mailer, upload::MAX_UPLOAD_BYTES};

    async fn test_app(public_dir: &Path) -> Router {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.unwrap();

        let store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
        store.migrate().await.unwrap();
        let session = SessionManagerLayer::new(store)
            .with_secure(false)
            .with_expiry(Expiry::OnSessionEnd);

        let state = AppState::new(
            db,
            Mailer::Log,
            "http://localhost:8080".to_string(),
            "s3cret".to_string(),
            public_dir.join("uploads"),
        );

        app(state, public_dir, session)
    }

    /// Tests the generated OpenAPI document.
    ///
    /// Expected: nested, static and cron paths are all present
    #[test]
    fn documents_every_route() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/api/members/{id}/fees"));
        assert!(doc.paths.paths.contains_key("/api/cron/membership-expiry"));
        assert!(doc.paths.paths.contains_key("/api/subscriptions/active"));
    }

    /// Tests an anonymous request for a protected page.
    ///
    /// Expected: redirect to the sign-in page
    #[tokio::test]
    async fn redirects_anonymous_dashboard_request() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
        let app = test_app(dir.path()).await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/dashboard/gyms")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.status().is_redirection());
        assert_eq!(response.headers()[LOCATION], "/sign-in");
    }

    /// Tests a public page path with no static file behind it.
    ///
    /// Expected: 200 from the index.html fallback
    #[tokio::test]
    async fn serves_index_for_public_pages() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
        let app = test_app(dir.path()).await;

        let response = app
            .oneshot(Request::builder().uri("/pricing").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    /// Tests an API call without a session.
    ///
    /// Expected: 401
    #[tokio::test]
    async fn rejects_anonymous_api_call() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(dir.path()).await;

        let response = app
            .oneshot(Request::builder().uri("/api/gyms").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    /// Tests the cron trigger with a wrong secret.
    ///
    /// Expected: 401
    #[tokio::test]
    async fn rejects_cron_without_secret() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(dir.path()).await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/cron/membership-expiry")
                    .header("Authorization", "Bearer wrong")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    /// Tests the cron trigger with the configured secret and nothing due.
    ///
    /// Expected: 200
    #[tokio::test]
    async fn runs_cron_with_secret() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(dir.path()).await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/cron/membership-expiry")
                    .header("Authorization", "Bearer s3cret")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn sign_in_cookie(app: &Router) -> String {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/auth/sign-up",
                json!({ "name": "Olive Owner", "email": "olive@example.com", "password": "correct-horse" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/auth/sign-in",
                json!({ "email": "olive@example.com", "password": "correct-horse" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        response.headers()[SET_COOKIE]
            .to_str()
            .unwrap()
            .split(';')
            .next()
            .unwrap()
            .to_string()
    }

    fn upload_request(cookie: &str, decoded_len: usize) -> Request<Body> {
        let body = json!({
            "file_name": "photo.png",
            "data": STANDARD.encode(vec![0u8; decoded_len]),
        });

        Request::builder()
            .method("POST")
            .uri("/api/uploads")
            .header(CONTENT_TYPE, "application/json")
            .header(COOKIE, cookie)
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    /// Tests signing up, signing in and reading the session with the issued cookie.
    ///
    /// Expected: the cookie from sign-in authenticates `/api/auth/user` as the new owner
    #[tokio::test]
    async fn signs_in_with_session_cookie() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(dir.path()).await;
        let cookie = sign_in_cookie(&app).await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/auth/user")
                    .header(COOKIE, cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["user"]["email"], "olive@example.com");
        assert_eq!(body["selected_gym_id"], Value::Null);
    }

    /// Tests uploading an image larger than axum's default request body cap.
    ///
    /// Expected: 201 with a URL under the uploads prefix
    #[tokio::test]
    async fn uploads_image_above_default_body_limit() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(dir.path()).await;
        let cookie = sign_in_cookie(&app).await;

        let response = app
            .oneshot(upload_request(&cookie, 3 * 1024 * 1024))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = json_body(response).await;
        assert!(body["url"].as_str().unwrap().starts_with("/uploads/"));
    }

    /// Tests uploading an image one byte over the decoded size cap.
    ///
    /// Expected: 400 with a JSON error body
    #[tokio::test]
    async fn rejects_oversized_upload_with_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(dir.path()).await;
        let cookie = sign_in_cookie(&app).await;

        let response = app
            .oneshot(upload_request(&cookie, MAX_UPLOAD_BYTES + 1))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response).await;
        assert!(body["error"].is_string());
    }

    /// Tests unmatched paths under `/api`.
    ///
    /// Expected: 404 with a JSON error body instead of the index.html fallback
    #[tokio::test]
    async fn unknown_api_path_returns_json_not_found() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
        let app = test_app(dir.path()).await;

        for uri in ["/api/nope", "/api/members/1/unknown", "/api"] {
            let response = app
                .clone()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");

            let body = json_body(response).await;
            assert_eq!(body["error"], "Route not found");
        }
    }
}
