pub mod attendance_handler;

pub use attendance_handler::{
    __path_delete_attendance, __path_get_attendance_by_date, __path_get_employee_attendance,
    __path_get_monthly_report, __path_get_today_present_count, __path_list_attendance,
    __path_mark_attendance, delete_attendance, get_attendance_by_date, get_employee_attendance,
    get_monthly_report, get_today_present_count, list_attendance, mark_attendance,
};
