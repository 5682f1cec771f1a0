mod employee;

pub use employee::{CreateEmployee, Employee};
