use chrono::{Local, NaiveDate};
use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::attendance::dtos::{
    AttendanceListQuery, AttendanceResponseDto, AttendanceWithEmployeeDto, MarkAttendanceDto,
    MonthlyReportDto, MonthlyReportEntryDto, TodayPresentCountDto,
};
use crate::features::attendance::models::{Attendance, AttendanceWithName, MonthlyReportRow};
use crate::shared::types::MessageResponse;

/// Service for attendance records and reports
pub struct AttendanceService {
    pool: SqlitePool,
}

impl AttendanceService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Mark attendance for one employee and day. Re-marking the same day
    /// overwrites the stored status instead of creating a second record.
    pub async fn mark(&self, dto: MarkAttendanceDto) -> Result<AttendanceResponseDto> {
        let employee_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM employees WHERE employee_id = $1)")
                .bind(&dto.employee_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to check employee: {:?}", e);
                    AppError::Database(e)
                })?;
        if !employee_exists {
            return Err(AppError::NotFound(format!(
                "Employee with ID '{}' not found",
                dto.employee_id
            )));
        }

        // Single conditional write: the UNIQUE (employee_id, date) constraint
        // makes concurrent marks collapse into one row
        let record: Attendance = sqlx::query_as(
            r#"
            INSERT INTO attendance (employee_id, date, status)
            VALUES ($1, $2, $3)
            ON CONFLICT (employee_id, date) DO UPDATE SET status = excluded.status
            RETURNING id, employee_id, date, status
            "#,
        )
        .bind(&dto.employee_id)
        .bind(dto.date)
        .bind(dto.status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to mark attendance: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Attendance marked: employee_id={}, date={}, status={:?}",
            record.employee_id,
            record.date,
            record.status
        );

        Ok(record.into())
    }

    /// List attendance with optional date and employee filters, newest first
    pub async fn list(&self, query: AttendanceListQuery) -> Result<Vec<AttendanceWithEmployeeDto>> {
        let records: Vec<AttendanceWithName> = sqlx::query_as(
            r#"
            SELECT a.id, a.employee_id, e.full_name AS employee_name, a.date, a.status
            FROM attendance a
            JOIN employees e ON e.employee_id = a.employee_id
            WHERE ($1 IS NULL OR a.date = $1)
              AND ($2 IS NULL OR a.employee_id = $2)
            ORDER BY a.date DESC
            "#,
        )
        .bind(query.date_filter)
        .bind(query.employee_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list attendance: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(records.into_iter().map(|r| r.into()).collect())
    }

    /// List one employee's attendance, newest first
    pub async fn list_for_employee(
        &self,
        employee_id: &str,
    ) -> Result<Vec<AttendanceResponseDto>> {
        let employee_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM employees WHERE employee_id = $1)")
                .bind(employee_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to check employee: {:?}", e);
                    AppError::Database(e)
                })?;
        if !employee_exists {
            return Err(AppError::NotFound(format!(
                "Employee with ID '{}' not found",
                employee_id
            )));
        }

        let records: Vec<Attendance> = sqlx::query_as(
            r#"
            SELECT id, employee_id, date, status
            FROM attendance
            WHERE employee_id = $1
            ORDER BY date DESC
            "#,
        )
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list attendance for employee: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(records.into_iter().map(|r| r.into()).collect())
    }

    /// Delete one attendance record by its internal id
    pub async fn delete(&self, attendance_id: i64) -> Result<MessageResponse> {
        let result = sqlx::query("DELETE FROM attendance WHERE id = $1")
            .bind(attendance_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete attendance: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Attendance record with ID '{}' not found",
                attendance_id
            )));
        }

        tracing::info!("Attendance deleted: id={}", attendance_id);

        Ok(MessageResponse {
            message: "Attendance record deleted successfully".to_string(),
        })
    }

    /// All attendance on one date, ordered by employee name
    pub async fn list_by_date(&self, date: NaiveDate) -> Result<Vec<AttendanceWithEmployeeDto>> {
        let records: Vec<AttendanceWithName> = sqlx::query_as(
            r#"
            SELECT a.id, a.employee_id, e.full_name AS employee_name, a.date, a.status
            FROM attendance a
            JOIN employees e ON e.employee_id = a.employee_id
            WHERE a.date = $1
            ORDER BY e.full_name
            "#,
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list attendance by date: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(records.into_iter().map(|r| r.into()).collect())
    }

    /// Present/absent counts for today's date (server-local)
    pub async fn today_present_count(&self) -> Result<TodayPresentCountDto> {
        let today = Local::now().date_naive();

        let total_employees: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count employees: {:?}", e);
                AppError::Database(e)
            })?;

        let present_count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM attendance WHERE date = $1 AND status = 'Present'",
        )
        .bind(today)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count present employees: {:?}", e);
            AppError::Database(e)
        })?;

        let absent_count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM attendance WHERE date = $1 AND status = 'Absent'",
        )
        .bind(today)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count absent employees: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(TodayPresentCountDto {
            date: today,
            present_count,
            absent_count,
            total_employees,
        })
    }

    /// Aggregate per-employee attendance for one month. Employees without
    /// records in that month still get a row with zero counts.
    pub async fn monthly_report(&self, year: i32, month: u32) -> Result<MonthlyReportDto> {
        if !(2000..=2100).contains(&year) {
            return Err(AppError::BadRequest(
                "Year must be between 2000 and 2100".to_string(),
            ));
        }
        if !(1..=12).contains(&month) {
            return Err(AppError::BadRequest(
                "Month must be between 1 and 12".to_string(),
            ));
        }

        let (month_start, next_month_start) = month_bounds(year, month)
            .ok_or_else(|| AppError::Internal(format!("invalid month: {}-{}", year, month)))?;

        let rows: Vec<MonthlyReportRow> = sqlx::query_as(
            r#"
            SELECT
                e.employee_id,
                e.full_name AS employee_name,
                COUNT(a.id) AS total_days,
                COUNT(a.id) FILTER (WHERE a.status = 'Present') AS present_days,
                COUNT(a.id) FILTER (WHERE a.status = 'Absent') AS absent_days
            FROM employees e
            LEFT JOIN attendance a
                ON a.employee_id = e.employee_id
                AND a.date >= $1
                AND a.date < $2
            GROUP BY e.id
            ORDER BY e.id
            "#,
        )
        .bind(month_start)
        .bind(next_month_start)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to build monthly report: {:?}", e);
            AppError::Database(e)
        })?;

        let report = rows
            .into_iter()
            .map(|row| {
                let attendance_percentage =
                    attendance_percentage(row.present_days, row.total_days);
                MonthlyReportEntryDto {
                    employee_id: row.employee_id,
                    employee_name: row.employee_name,
                    total_days: row.total_days,
                    present_days: row.present_days,
                    absent_days: row.absent_days,
                    attendance_percentage,
                }
            })
            .collect();

        Ok(MonthlyReportDto {
            year,
            month,
            report,
        })
    }
}

/// First day of the month and first day of the next month (half-open range)
fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let end = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((start, end))
}

/// Share of present days as a percentage, rounded to 2 decimals.
/// Zero recorded days yields 0.0.
fn attendance_percentage(present_days: i64, total_days: i64) -> f64 {
    if total_days == 0 {
        return 0.0;
    }
    let percentage = present_days as f64 / total_days as f64 * 100.0;
    (percentage * 100.0).round() / 100.0
}
