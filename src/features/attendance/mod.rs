//! Attendance tracking feature.
//!
//! One record per employee per calendar day; marking the same day twice
//! overwrites the status (last write wins). Also serves the daily counts
//! and the per-month aggregate report.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/attendance/` | Mark attendance (upsert per employee+date) |
//! | GET | `/api/attendance/` | List records, optional date/employee filters |
//! | GET | `/api/attendance/date/{date}` | Records for one date |
//! | GET | `/api/attendance/today/present-count` | Today's present/absent counts |
//! | GET | `/api/attendance/monthly-report/{year}/{month}` | Per-employee monthly report |
//! | GET | `/api/attendance/{employee_id}` | One employee's records |
//! | DELETE | `/api/attendance/{attendance_id}` | Delete one record |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::AttendanceService;
