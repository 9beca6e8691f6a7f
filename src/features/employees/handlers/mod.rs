pub mod employee_handler;

pub use employee_handler::{
    __path_count_employees, __path_create_employee, __path_delete_employee, __path_get_employee,
    __path_list_employees, count_employees, create_employee, delete_employee, get_employee,
    list_employees,
};
