use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::attendance::dtos::{
    AttendanceListQuery, AttendanceResponseDto, AttendanceWithEmployeeDto, MarkAttendanceDto,
    MonthlyReportDto, TodayPresentCountDto,
};
use crate::features::attendance::services::AttendanceService;
use crate::shared::types::MessageResponse;

/// Mark attendance for an employee
///
/// Marking the same employee and date again overwrites the stored status.
#[utoipa::path(
    post,
    path = "/api/attendance/",
    request_body = MarkAttendanceDto,
    responses(
        (status = 201, description = "Attendance marked", body = AttendanceResponseDto),
        (status = 404, description = "Employee not found"),
        (status = 422, description = "Validation error")
    ),
    tag = "attendance"
)]
pub async fn mark_attendance(
    State(service): State<Arc<AttendanceService>>,
    AppJson(dto): AppJson<MarkAttendanceDto>,
) -> Result<(StatusCode, Json<AttendanceResponseDto>)> {
    dto.validate()?;

    let record = service.mark(dto).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// List attendance records
///
/// Optional filters for an exact date and an employee code; newest first.
#[utoipa::path(
    get,
    path = "/api/attendance/",
    params(AttendanceListQuery),
    responses(
        (status = 200, description = "List of attendance records", body = Vec<AttendanceWithEmployeeDto>)
    ),
    tag = "attendance"
)]
pub async fn list_attendance(
    State(service): State<Arc<AttendanceService>>,
    Query(query): Query<AttendanceListQuery>,
) -> Result<Json<Vec<AttendanceWithEmployeeDto>>> {
    let records = service.list(query).await?;
    Ok(Json(records))
}

/// Get attendance records for one employee
#[utoipa::path(
    get,
    path = "/api/attendance/{employee_id}",
    params(
        ("employee_id" = String, Path, description = "External employee code")
    ),
    responses(
        (status = 200, description = "Employee's attendance records", body = Vec<AttendanceResponseDto>),
        (status = 404, description = "Employee not found")
    ),
    tag = "attendance"
)]
pub async fn get_employee_attendance(
    State(service): State<Arc<AttendanceService>>,
    Path(employee_id): Path<String>,
) -> Result<Json<Vec<AttendanceResponseDto>>> {
    let records = service.list_for_employee(&employee_id).await?;
    Ok(Json(records))
}

/// Delete an attendance record
#[utoipa::path(
    delete,
    path = "/api/attendance/{attendance_id}",
    params(
        ("attendance_id" = i64, Path, description = "Internal attendance record id")
    ),
    responses(
        (status = 200, description = "Attendance record deleted", body = MessageResponse),
        (status = 404, description = "Attendance record not found")
    ),
    tag = "attendance"
)]
pub async fn delete_attendance(
    State(service): State<Arc<AttendanceService>>,
    Path(attendance_id): Path<i64>,
) -> Result<Json<MessageResponse>> {
    let confirmation = service.delete(attendance_id).await?;
    Ok(Json(confirmation))
}

/// Get all attendance for a specific date
#[utoipa::path(
    get,
    path = "/api/attendance/date/{date}",
    params(
        ("date" = String, Path, description = "Calendar date (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Attendance records on that date", body = Vec<AttendanceWithEmployeeDto>)
    ),
    tag = "attendance"
)]
pub async fn get_attendance_by_date(
    State(service): State<Arc<AttendanceService>>,
    Path(date): Path<NaiveDate>,
) -> Result<Json<Vec<AttendanceWithEmployeeDto>>> {
    let records = service.list_by_date(date).await?;
    Ok(Json(records))
}

/// Get present/absent counts for today
#[utoipa::path(
    get,
    path = "/api/attendance/today/present-count",
    responses(
        (status = 200, description = "Today's attendance counts", body = TodayPresentCountDto)
    ),
    tag = "attendance"
)]
pub async fn get_today_present_count(
    State(service): State<Arc<AttendanceService>>,
) -> Result<Json<TodayPresentCountDto>> {
    let counts = service.today_present_count().await?;
    Ok(Json(counts))
}

/// Get the monthly attendance report
///
/// One row per employee, including employees with no records in the month.
#[utoipa::path(
    get,
    path = "/api/attendance/monthly-report/{year}/{month}",
    params(
        ("year" = i32, Path, description = "Report year (2000-2100)"),
        ("month" = u32, Path, description = "Report month (1-12)")
    ),
    responses(
        (status = 200, description = "Monthly report", body = MonthlyReportDto),
        (status = 400, description = "Year or month out of range")
    ),
    tag = "attendance"
)]
pub async fn get_monthly_report(
    State(service): State<Arc<AttendanceService>>,
    Path((year, month)): Path<(i32, u32)>,
) -> Result<Json<MonthlyReportDto>> {
    let report = service.monthly_report(year, month).await?;
    Ok(Json(report))
}
