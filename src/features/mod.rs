pub mod attendance;
pub mod employees;
