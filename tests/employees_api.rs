mod common;

use axum::http::StatusCode;
use fake::faker::name::en::Name;
use fake::Fake;
use serde_json::{json, Value};

#[tokio::test]
async fn test_health_endpoint_responds_ok() {
    let server = common::test_server().await;

    let res = server.get("/health").await;
    assert_eq!(res.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_create_employee_returns_created_record() {
    let server = common::test_server().await;

    let res = server
        .post("/api/employees/")
        .json(&json!({
            "employee_id": "EMP001",
            "full_name": "Jane Doe",
            "email": "jane.doe@example.com",
            "department": "Engineering",
        }))
        .await;

    assert_eq!(res.status_code(), StatusCode::CREATED);
    let body: Value = res.json();
    assert!(body["id"].as_i64().unwrap() >= 1);
    assert_eq!(body["employee_id"], "EMP001");
    assert_eq!(body["full_name"], "Jane Doe");
    assert_eq!(body["email"], "jane.doe@example.com");
    assert_eq!(body["department"], "Engineering");
}

#[tokio::test]
async fn test_duplicate_employee_id_rejected_and_original_unchanged() {
    let server = common::test_server().await;
    common::create_employee(&server, "EMP001", "Jane Doe", "jane@example.com").await;

    let res = server
        .post("/api/employees/")
        .json(&json!({
            "employee_id": "EMP001",
            "full_name": "Someone Else",
            "email": "other@example.com",
            "department": "Sales",
        }))
        .await;

    assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = res.json();
    assert_eq!(body["detail"], "Employee with ID 'EMP001' already exists");

    let body: Value = server.get("/api/employees/EMP001").await.json();
    assert_eq!(body["full_name"], "Jane Doe");
    assert_eq!(body["email"], "jane@example.com");
}

#[tokio::test]
async fn test_duplicate_email_rejected() {
    let server = common::test_server().await;
    common::create_employee(&server, "EMP001", "Jane Doe", "jane@example.com").await;

    let res = server
        .post("/api/employees/")
        .json(&json!({
            "employee_id": "EMP002",
            "full_name": "Someone Else",
            "email": "jane@example.com",
            "department": "Sales",
        }))
        .await;

    assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = res.json();
    assert_eq!(
        body["detail"],
        "Employee with email 'jane@example.com' already exists"
    );

    let employees: Value = server.get("/api/employees/").await.json();
    assert_eq!(employees.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_employee_validation_lists_every_failed_field() {
    let server = common::test_server().await;

    let res = server
        .post("/api/employees/")
        .json(&json!({
            "employee_id": "",
            "full_name": "",
            "email": "not-an-email",
            "department": "",
        }))
        .await;

    assert_eq!(res.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = res.json();
    assert_eq!(body["detail"], "Validation error");
    let errors: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e.as_str().unwrap())
        .collect();
    assert_eq!(
        errors,
        vec![
            "department: Department must be 1-100 characters",
            "email: Invalid email format",
            "employee_id: Employee ID must be 1-50 characters",
            "full_name: Full name must be 1-100 characters",
        ]
    );
}

#[tokio::test]
async fn test_create_employee_with_missing_field_is_bad_request() {
    let server = common::test_server().await;

    let res = server
        .post("/api/employees/")
        .json(&json!({ "employee_id": "EMP001" }))
        .await;

    assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_employees_in_insertion_order() {
    let server = common::test_server().await;

    let empty: Value = server.get("/api/employees/").await.json();
    assert_eq!(empty, json!([]));

    for i in 1..=3 {
        let full_name: String = Name().fake();
        let res = server
            .post("/api/employees/")
            .json(&json!({
                "employee_id": format!("EMP{:03}", i),
                "full_name": full_name,
                "email": format!("user{}@example.com", i),
                "department": "Engineering",
            }))
            .await;
        assert_eq!(res.status_code(), StatusCode::CREATED);
    }

    let body: Value = server.get("/api/employees/").await.json();
    let codes: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["employee_id"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["EMP001", "EMP002", "EMP003"]);

    // The collection path also answers without the trailing slash
    let body: Value = server.get("/api/employees").await.json();
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_get_employee_detail_aggregates_attendance() {
    let server = common::test_server().await;
    common::create_employee(&server, "EMP001", "Jane Doe", "jane@example.com").await;

    for (date, status) in [
        ("2026-02-02", "Present"),
        ("2026-02-03", "Present"),
        ("2026-02-04", "Absent"),
        ("2026-02-05", "Present"),
        ("2026-02-06", "Absent"),
    ] {
        let res = common::mark_attendance(&server, "EMP001", date, status).await;
        assert_eq!(res.status_code(), StatusCode::CREATED);
    }

    let body: Value = server.get("/api/employees/EMP001").await.json();
    assert_eq!(body["total_present_days"], 3);
    assert_eq!(body["attendance_records"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_get_unknown_employee_is_not_found() {
    let server = common::test_server().await;

    let res = server.get("/api/employees/GHOST").await;
    assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
    let body: Value = res.json();
    assert_eq!(body["detail"], "Employee with ID 'GHOST' not found");
}

#[tokio::test]
async fn test_delete_employee_cascades_attendance() {
    let server = common::test_server().await;
    common::create_employee(&server, "EMP001", "Jane Doe", "jane@example.com").await;
    common::mark_attendance(&server, "EMP001", "2026-02-02", "Present").await;
    common::mark_attendance(&server, "EMP001", "2026-02-03", "Absent").await;

    let res = server.delete("/api/employees/EMP001").await;
    assert_eq!(res.status_code(), StatusCode::OK);
    let body: Value = res.json();
    assert_eq!(body["message"], "Employee 'Jane Doe' deleted successfully");

    let res = server.get("/api/employees/EMP001").await;
    assert_eq!(res.status_code(), StatusCode::NOT_FOUND);

    let records: Value = server
        .get("/api/attendance/")
        .add_query_param("employee_id", "EMP001")
        .await
        .json();
    assert_eq!(records, json!([]));
}

#[tokio::test]
async fn test_delete_unknown_employee_is_not_found() {
    let server = common::test_server().await;

    let res = server.delete("/api/employees/GHOST").await;
    assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
    let body: Value = res.json();
    assert_eq!(body["detail"], "Employee with ID 'GHOST' not found");
}

#[tokio::test]
async fn test_employee_count() {
    let server = common::test_server().await;

    let body: Value = server.get("/api/employees/stats/count").await.json();
    assert_eq!(body, json!({ "total_employees": 0 }));

    for i in 1..=3 {
        let full_name: String = Name().fake();
        common::create_employee(
            &server,
            &format!("EMP{:03}", i),
            &full_name,
            &format!("user{}@example.com", i),
        )
        .await;
    }

    let body: Value = server.get("/api/employees/stats/count").await.json();
    assert_eq!(body, json!({ "total_employees": 3 }));
}
