use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::followings::FollowingService;
use crate::features::likes::LikeService;
use crate::features::reports::handlers::{self, ReportState};
use crate::features::reports::services::ReportService;

/// Create routes for the reports feature
///
/// Every route requires a login; the login layer is applied by the caller
pub fn routes(
    report_service: Arc<ReportService>,
    like_service: Arc<LikeService>,
    following_service: Arc<FollowingService>,
) -> Router {
    let state = ReportState {
        report_service,
        like_service,
        following_service,
    };

    Router::new()
        .route(
            "/reports",
            get(handlers::list_reports).post(handlers::create_report),
        )
        .route("/reports/new", get(handlers::new_report))
        .route(
            "/reports/{id}",
            get(handlers::show_report).post(handlers::update_report),
        )
        .route("/reports/{id}/edit", get(handlers::edit_report))
        .route("/reports/{id}/like", post(handlers::like_report))
        .route("/reports/{id}/likes", get(handlers::show_likes))
        .route("/reports/{id}/follow", post(handlers::follow_author))
        .route("/reports/{id}/unfollow", post(handlers::unfollow_author))
        .route("/timeline", get(handlers::show_timeline))
        .with_state(state)
}
