use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::employees::handlers;
use crate::features::employees::services::EmployeeService;

/// Create routes for employee management
///
/// Every route is admin only and expects the login layer to be applied by the caller
pub fn routes(service: Arc<EmployeeService>) -> Router {
    Router::new()
        .route(
            "/employees",
            get(handlers::list_employees).post(handlers::create_employee),
        )
        .route("/employees/new", get(handlers::new_employee))
        .route("/employees/{id}", get(handlers::show_employee))
        .with_state(service)
}
