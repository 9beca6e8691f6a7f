pub mod attendance;

pub use attendance::{Attendance, AttendanceStatus, AttendanceWithName, MonthlyReportRow};
