use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::attendance::models::AttendanceStatus;

/// Request DTO for marking attendance
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "employee_id": "EMP001",
    "date": "2026-02-25",
    "status": "Present"
}))]
pub struct MarkAttendanceDto {
    /// External employee code
    #[validate(length(min = 1, message = "Employee ID is required"))]
    pub employee_id: String,

    pub date: NaiveDate,

    pub status: AttendanceStatus,
}

/// Response DTO for an attendance record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AttendanceResponseDto {
    pub id: i64,
    pub employee_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

/// Attendance record with the employee's name, for joined listings
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AttendanceWithEmployeeDto {
    pub id: i64,
    pub employee_id: String,
    pub employee_name: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

/// Query filters for listing attendance
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct AttendanceListQuery {
    /// Only records on this date (YYYY-MM-DD)
    pub date_filter: Option<NaiveDate>,
    /// Only records of this employee
    pub employee_id: Option<String>,
}

/// Present/absent counts for the current day
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TodayPresentCountDto {
    pub date: NaiveDate,
    pub present_count: i64,
    pub absent_count: i64,
    pub total_employees: i64,
}

/// One employee's row in the monthly report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MonthlyReportEntryDto {
    pub employee_id: String,
    pub employee_name: String,
    /// Days with any record in the month
    pub total_days: i64,
    pub present_days: i64,
    pub absent_days: i64,
    /// present_days / total_days as a percentage, rounded to 2 decimals
    pub attendance_percentage: f64,
}

/// Monthly attendance report for all employees
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MonthlyReportDto {
    pub year: i32,
    pub month: u32,
    pub report: Vec<MonthlyReportEntryDto>,
}
