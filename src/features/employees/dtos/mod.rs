pub mod employee_dto;
pub mod employee_page;

pub use employee_dto::{EmployeeForm, EmployeeSummary, EmployeeView};
pub use employee_page::{EmployeeFormPage, EmployeeIndexPage, EmployeeShowPage};
