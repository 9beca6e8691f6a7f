use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::attendance::handlers;
use crate::features::attendance::services::AttendanceService;

/// Create routes for the attendance feature
///
/// `/api/attendance/{id}` serves two operations: GET treats the segment as
/// an employee code, DELETE as the internal record id. Collection endpoints
/// answer both with and without a trailing slash.
pub fn routes(service: Arc<AttendanceService>) -> Router {
    Router::new()
        .route(
            "/api/attendance",
            post(handlers::mark_attendance).get(handlers::list_attendance),
        )
        .route(
            "/api/attendance/",
            post(handlers::mark_attendance).get(handlers::list_attendance),
        )
        .route(
            "/api/attendance/date/{date}",
            get(handlers::get_attendance_by_date),
        )
        .route(
            "/api/attendance/today/present-count",
            get(handlers::get_today_present_count),
        )
        .route(
            "/api/attendance/monthly-report/{year}/{month}",
            get(handlers::get_monthly_report),
        )
        .route(
            "/api/attendance/{id}",
            get(handlers::get_employee_attendance).delete(handlers::delete_attendance),
        )
        .with_state(service)
}
