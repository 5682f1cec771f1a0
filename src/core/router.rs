use std::sync::Arc;

use axum::{
    http::{StatusCode, Uri},
    middleware::{from_fn, from_fn_with_state},
    response::Redirect,
    routing::get,
    Router,
};

use crate::core::error::AppError;
use crate::core::middleware;
use crate::core::session::{session_middleware, SessionSettings};
use crate::features::auth::{routes as auth_routes, AuthService};
use crate::features::employees::{routes as employees_routes, EmployeeService};
use crate::features::followings::FollowingService;
use crate::features::likes::LikeService;
use crate::features::reports::{routes as reports_routes, ReportService};

/// Every service the routes depend on
#[derive(Clone)]
pub struct AppServices {
    pub auth_service: Arc<AuthService>,
    pub employee_service: Arc<EmployeeService>,
    pub report_service: Arc<ReportService>,
    pub like_service: Arc<LikeService>,
    pub following_service: Arc<FollowingService>,
}

async fn health_check() -> StatusCode {
    StatusCode::OK
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

/// Assemble the application routes behind the session layer
pub fn build_router(services: AppServices, session: SessionSettings) -> Router {
    // Login required; anonymous requests are redirected to /login
    let protected_routes = Router::new()
        .merge(reports_routes::routes(
            services.report_service,
            services.like_service,
            services.following_service,
        ))
        .merge(employees_routes::routes(services.employee_service))
        .route_layer(from_fn(middleware::require_login));

    let public_routes = Router::new()
        .merge(auth_routes::routes(services.auth_service))
        .route("/", get(|| async { Redirect::to("/reports") }));

    let health_route = Router::new().route("/health", get(health_check));

    Router::new()
        .merge(protected_routes)
        .merge(public_routes)
        .merge(health_route)
        .fallback(not_found)
        .layer(from_fn_with_state(session, session_middleware))
}
