use std::str::FromStr;

use axum_test::{TestResponse, TestServer};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// In-memory database with the schema applied. A single never-recycled
/// connection keeps the database alive for the whole test.
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .unwrap();

    hrms_lite::core::database::MIGRATOR
        .run(&pool)
        .await
        .unwrap();

    pool
}

pub async fn test_server() -> TestServer {
    let pool = test_pool().await;
    TestServer::new(hrms_lite::router(&pool)).unwrap()
}

pub async fn create_employee(
    server: &TestServer,
    employee_id: &str,
    full_name: &str,
    email: &str,
) {
    let res = server
        .post("/api/employees/")
        .json(&serde_json::json!({
            "employee_id": employee_id,
            "full_name": full_name,
            "email": email,
            "department": "Engineering",
        }))
        .await;
    assert_eq!(res.status_code(), axum::http::StatusCode::CREATED);
}

pub async fn mark_attendance(
    server: &TestServer,
    employee_id: &str,
    date: &str,
    status: &str,
) -> TestResponse {
    server
        .post("/api/attendance/")
        .json(&serde_json::json!({
            "employee_id": employee_id,
            "date": date,
            "status": status,
        }))
        .await
}
