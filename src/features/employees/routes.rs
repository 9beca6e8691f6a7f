use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::employees::handlers;
use crate::features::employees::services::EmployeeService;

/// Create routes for the employees feature
///
/// Collection endpoints answer both with and without a trailing slash.
pub fn routes(service: Arc<EmployeeService>) -> Router {
    Router::new()
        .route(
            "/api/employees",
            post(handlers::create_employee).get(handlers::list_employees),
        )
        .route(
            "/api/employees/",
            post(handlers::create_employee).get(handlers::list_employees),
        )
        .route("/api/employees/stats/count", get(handlers::count_employees))
        .route(
            "/api/employees/{employee_id}",
            get(handlers::get_employee).delete(handlers::delete_employee),
        )
        .with_state(service)
}
