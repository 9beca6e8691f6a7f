//! HRMS Lite: a small employee and attendance management API.
//!
//! The crate is organized as feature slices under [`features`], each holding
//! its own models, DTOs, service, handlers, and routes. [`core`] carries the
//! cross-cutting pieces (config, database pool, error taxonomy, extractors,
//! middleware, OpenAPI doc). The binary in `main.rs` wires configuration,
//! migrations, and HTTP layers around [`router`].

pub mod core;
pub mod features;
pub mod shared;

use std::sync::Arc;

use axum::{routing::get, Router};
use sqlx::SqlitePool;

use crate::features::attendance::{routes as attendance_routes, AttendanceService};
use crate::features::employees::{routes as employees_routes, EmployeeService};

async fn health_check() -> axum::http::StatusCode {
    axum::http::StatusCode::OK
}

/// Build the API router on top of a database pool.
///
/// The pool is the only shared state; each service gets its own handle.
/// Layers (CORS, tracing, request ids) and the Swagger UI are added by the
/// binary so tests can mount the bare router.
pub fn router(pool: &SqlitePool) -> Router {
    let employee_service = Arc::new(EmployeeService::new(pool.clone()));
    let attendance_service = Arc::new(AttendanceService::new(pool.clone()));

    Router::new()
        .merge(employees_routes::routes(employee_service))
        .merge(attendance_routes::routes(attendance_service))
        .route("/health", get(health_check))
}
