use utoipa::{Modify, OpenApi};

use crate::core::error::ErrorBody;
use crate::features::attendance::{
    dtos as attendance_dtos, handlers as attendance_handlers, models as attendance_models,
};
use crate::features::employees::{dtos as employees_dtos, handlers as employees_handlers};
use crate::shared::types::MessageResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Employees
        employees_handlers::create_employee,
        employees_handlers::list_employees,
        employees_handlers::get_employee,
        employees_handlers::delete_employee,
        employees_handlers::count_employees,
        // Attendance
        attendance_handlers::mark_attendance,
        attendance_handlers::list_attendance,
        attendance_handlers::get_employee_attendance,
        attendance_handlers::delete_attendance,
        attendance_handlers::get_attendance_by_date,
        attendance_handlers::get_today_present_count,
        attendance_handlers::get_monthly_report,
    ),
    components(
        schemas(
            // Shared
            MessageResponse,
            ErrorBody,
            // Employees
            employees_dtos::CreateEmployeeDto,
            employees_dtos::EmployeeResponseDto,
            employees_dtos::EmployeeDetailResponseDto,
            employees_dtos::EmployeeCountDto,
            // Attendance
            attendance_models::AttendanceStatus,
            attendance_dtos::MarkAttendanceDto,
            attendance_dtos::AttendanceResponseDto,
            attendance_dtos::AttendanceWithEmployeeDto,
            attendance_dtos::TodayPresentCountDto,
            attendance_dtos::MonthlyReportEntryDto,
            attendance_dtos::MonthlyReportDto,
        )
    ),
    tags(
        (name = "employees", description = "Employee records"),
        (name = "attendance", description = "Attendance tracking and reports"),
    ),
    info(
        title = "HRMS Lite API",
        version = "0.1.0",
        description = "API documentation for HRMS Lite",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
