use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::attendance::dtos::AttendanceResponseDto;

/// Request DTO for creating an employee
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "employee_id": "EMP001",
    "full_name": "Jane Doe",
    "email": "jane.doe@example.com",
    "department": "Engineering"
}))]
pub struct CreateEmployeeDto {
    /// External employee code, unique across the company
    #[validate(length(min = 1, max = 50, message = "Employee ID must be 1-50 characters"))]
    pub employee_id: String,

    #[validate(length(min = 1, max = 100, message = "Full name must be 1-100 characters"))]
    pub full_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, max = 100, message = "Department must be 1-100 characters"))]
    pub department: String,
}

/// Response DTO for an employee
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EmployeeResponseDto {
    pub id: i64,
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

/// Employee detail including its attendance history
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EmployeeDetailResponseDto {
    pub id: i64,
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
    /// Number of days this employee was marked Present
    pub total_present_days: i64,
    pub attendance_records: Vec<AttendanceResponseDto>,
}

/// Employee count for the stats endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EmployeeCountDto {
    pub total_employees: i64,
}
