pub mod attendance_dto;

pub use attendance_dto::{
    AttendanceListQuery, AttendanceResponseDto, AttendanceWithEmployeeDto, MarkAttendanceDto,
    MonthlyReportDto, MonthlyReportEntryDto, TodayPresentCountDto,
};
