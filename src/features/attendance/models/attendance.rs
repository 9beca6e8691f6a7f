use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::features::attendance::dtos::{AttendanceResponseDto, AttendanceWithEmployeeDto};

/// Attendance status, stored as TEXT ('Present' / 'Absent')
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

/// Database model for an attendance record
#[derive(Debug, Clone, FromRow)]
pub struct Attendance {
    pub id: i64,
    pub employee_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

/// Attendance row joined with the employee's full name
#[derive(Debug, Clone, FromRow)]
pub struct AttendanceWithName {
    pub id: i64,
    pub employee_id: String,
    pub employee_name: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

/// Per-employee aggregate counts for one month
#[derive(Debug, Clone, FromRow)]
pub struct MonthlyReportRow {
    pub employee_id: String,
    pub employee_name: String,
    pub total_days: i64,
    pub present_days: i64,
    pub absent_days: i64,
}

impl From<Attendance> for AttendanceResponseDto {
    fn from(a: Attendance) -> Self {
        Self {
            id: a.id,
            employee_id: a.employee_id,
            date: a.date,
            status: a.status,
        }
    }
}

impl From<AttendanceWithName> for AttendanceWithEmployeeDto {
    fn from(a: AttendanceWithName) -> Self {
        Self {
            id: a.id,
            employee_id: a.employee_id,
            employee_name: a.employee_name,
            date: a.date,
            status: a.status,
        }
    }
}
