pub mod employee_dto;

pub use employee_dto::{
    CreateEmployeeDto, EmployeeCountDto, EmployeeDetailResponseDto, EmployeeResponseDto,
};
