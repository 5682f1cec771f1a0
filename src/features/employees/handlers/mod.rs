pub mod employee_handler;

pub use employee_handler::{create_employee, list_employees, new_employee, show_employee};
