use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::attendance::models::{Attendance, AttendanceStatus};
use crate::features::employees::dtos::{
    CreateEmployeeDto, EmployeeCountDto, EmployeeDetailResponseDto, EmployeeResponseDto,
};
use crate::features::employees::models::Employee;
use crate::shared::types::MessageResponse;

/// Service for employee records
pub struct EmployeeService {
    pool: SqlitePool,
}

impl EmployeeService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new employee; rejects duplicate employee codes and emails
    pub async fn create(&self, dto: CreateEmployeeDto) -> Result<EmployeeResponseDto> {
        let id_taken: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM employees WHERE employee_id = $1)")
                .bind(&dto.employee_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to check employee id: {:?}", e);
                    AppError::Database(e)
                })?;
        if id_taken {
            return Err(AppError::Conflict(format!(
                "Employee with ID '{}' already exists",
                dto.employee_id
            )));
        }

        let email_taken: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM employees WHERE email = $1)")
                .bind(&dto.email)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to check employee email: {:?}", e);
                    AppError::Database(e)
                })?;
        if email_taken {
            return Err(AppError::Conflict(format!(
                "Employee with email '{}' already exists",
                dto.email
            )));
        }

        let employee: Employee = sqlx::query_as(
            r#"
            INSERT INTO employees (employee_id, full_name, email, department)
            VALUES ($1, $2, $3, $4)
            RETURNING id, employee_id, full_name, email, department
            "#,
        )
        .bind(&dto.employee_id)
        .bind(&dto.full_name)
        .bind(&dto.email)
        .bind(&dto.department)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // The unique constraints catch creates that raced past the checks
            if e.as_database_error()
                .is_some_and(|db| db.is_unique_violation())
            {
                return AppError::Conflict(
                    "Failed to create employee due to duplicate values".to_string(),
                );
            }
            tracing::error!("Failed to insert employee: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Employee created: id={}, employee_id={}",
            employee.id,
            employee.employee_id
        );

        Ok(employee.into())
    }

    /// List all employees in insertion order
    pub async fn list(&self) -> Result<Vec<EmployeeResponseDto>> {
        let employees: Vec<Employee> = sqlx::query_as(
            r#"
            SELECT id, employee_id, full_name, email, department
            FROM employees
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list employees: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(employees.into_iter().map(|e| e.into()).collect())
    }

    /// Get one employee by external code, with its full attendance history
    pub async fn get_by_code(&self, employee_id: &str) -> Result<EmployeeDetailResponseDto> {
        let employee: Option<Employee> = sqlx::query_as(
            r#"
            SELECT id, employee_id, full_name, email, department
            FROM employees
            WHERE employee_id = $1
            "#,
        )
        .bind(employee_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get employee: {:?}", e);
            AppError::Database(e)
        })?;

        let employee = employee.ok_or_else(|| {
            AppError::NotFound(format!("Employee with ID '{}' not found", employee_id))
        })?;

        let records: Vec<Attendance> = sqlx::query_as(
            r#"
            SELECT id, employee_id, date, status
            FROM attendance
            WHERE employee_id = $1
            ORDER BY id
            "#,
        )
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load attendance for employee: {:?}", e);
            AppError::Database(e)
        })?;

        let total_present_days = records
            .iter()
            .filter(|r| r.status == AttendanceStatus::Present)
            .count() as i64;

        Ok(EmployeeDetailResponseDto {
            id: employee.id,
            employee_id: employee.employee_id,
            full_name: employee.full_name,
            email: employee.email,
            department: employee.department,
            total_present_days,
            attendance_records: records.into_iter().map(|r| r.into()).collect(),
        })
    }

    /// Delete an employee by external code; its attendance rows cascade
    pub async fn delete_by_code(&self, employee_id: &str) -> Result<MessageResponse> {
        let full_name: Option<String> =
            sqlx::query_scalar("DELETE FROM employees WHERE employee_id = $1 RETURNING full_name")
                .bind(employee_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to delete employee: {:?}", e);
                    AppError::Database(e)
                })?;

        let full_name = full_name.ok_or_else(|| {
            AppError::NotFound(format!("Employee with ID '{}' not found", employee_id))
        })?;

        tracing::info!("Employee deleted: employee_id={}", employee_id);

        Ok(MessageResponse {
            message: format!("Employee '{}' deleted successfully", full_name),
        })
    }

    /// Total number of employees
    pub async fn count(&self) -> Result<EmployeeCountDto> {
        let total_employees: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count employees: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(EmployeeCountDto { total_employees })
    }
}
