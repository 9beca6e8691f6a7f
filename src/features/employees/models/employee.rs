use sqlx::FromRow;

use crate::features::employees::dtos::EmployeeResponseDto;

/// Database model for an employee
#[derive(Debug, Clone, FromRow)]
pub struct Employee {
    pub id: i64,
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

impl From<Employee> for EmployeeResponseDto {
    fn from(e: Employee) -> Self {
        Self {
            id: e.id,
            employee_id: e.employee_id,
            full_name: e.full_name,
            email: e.email,
            department: e.department,
        }
    }
}
