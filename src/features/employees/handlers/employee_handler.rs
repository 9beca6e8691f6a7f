use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::employees::dtos::{
    CreateEmployeeDto, EmployeeCountDto, EmployeeDetailResponseDto, EmployeeResponseDto,
};
use crate::features::employees::services::EmployeeService;
use crate::shared::types::MessageResponse;

/// Create a new employee
///
/// Employee ID and email must both be unused; duplicates are rejected.
#[utoipa::path(
    post,
    path = "/api/employees/",
    request_body = CreateEmployeeDto,
    responses(
        (status = 201, description = "Employee created successfully", body = EmployeeResponseDto),
        (status = 400, description = "Duplicate employee ID or email"),
        (status = 422, description = "Validation error")
    ),
    tag = "employees"
)]
pub async fn create_employee(
    State(service): State<Arc<EmployeeService>>,
    AppJson(dto): AppJson<CreateEmployeeDto>,
) -> Result<(StatusCode, Json<EmployeeResponseDto>)> {
    dto.validate()?;

    let employee = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// List all employees
#[utoipa::path(
    get,
    path = "/api/employees/",
    responses(
        (status = 200, description = "List of employees", body = Vec<EmployeeResponseDto>)
    ),
    tag = "employees"
)]
pub async fn list_employees(
    State(service): State<Arc<EmployeeService>>,
) -> Result<Json<Vec<EmployeeResponseDto>>> {
    let employees = service.list().await?;
    Ok(Json(employees))
}

/// Get employee by ID with attendance history
#[utoipa::path(
    get,
    path = "/api/employees/{employee_id}",
    params(
        ("employee_id" = String, Path, description = "External employee code")
    ),
    responses(
        (status = 200, description = "Employee found", body = EmployeeDetailResponseDto),
        (status = 404, description = "Employee not found")
    ),
    tag = "employees"
)]
pub async fn get_employee(
    State(service): State<Arc<EmployeeService>>,
    Path(employee_id): Path<String>,
) -> Result<Json<EmployeeDetailResponseDto>> {
    let employee = service.get_by_code(&employee_id).await?;
    Ok(Json(employee))
}

/// Delete employee by ID
///
/// Also removes every attendance record of that employee.
#[utoipa::path(
    delete,
    path = "/api/employees/{employee_id}",
    params(
        ("employee_id" = String, Path, description = "External employee code")
    ),
    responses(
        (status = 200, description = "Employee deleted", body = MessageResponse),
        (status = 404, description = "Employee not found")
    ),
    tag = "employees"
)]
pub async fn delete_employee(
    State(service): State<Arc<EmployeeService>>,
    Path(employee_id): Path<String>,
) -> Result<Json<MessageResponse>> {
    let confirmation = service.delete_by_code(&employee_id).await?;
    Ok(Json(confirmation))
}

/// Get total employee count
#[utoipa::path(
    get,
    path = "/api/employees/stats/count",
    responses(
        (status = 200, description = "Employee count", body = EmployeeCountDto)
    ),
    tag = "employees"
)]
pub async fn count_employees(
    State(service): State<Arc<EmployeeService>>,
) -> Result<Json<EmployeeCountDto>> {
    let count = service.count().await?;
    Ok(Json(count))
}
