//! Employee records feature.
//!
//! Employees are keyed externally by their employee code (`employee_id`);
//! the numeric database id never appears in URLs. There is no update
//! endpoint: records are created, read, and deleted.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/employees/` | Create employee |
//! | GET | `/api/employees/` | List all employees |
//! | GET | `/api/employees/stats/count` | Total employee count |
//! | GET | `/api/employees/{employee_id}` | Employee detail with attendance |
//! | DELETE | `/api/employees/{employee_id}` | Delete employee (cascades attendance) |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::EmployeeService;
