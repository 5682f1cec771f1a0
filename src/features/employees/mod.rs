//! Employee accounts.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/employees` | Admin | Paginated employee list |
//! | GET | `/employees/new` | Admin | Registration form |
//! | POST | `/employees` | Admin | Register an employee |
//! | GET | `/employees/{id}` | Admin | Employee details |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::EmployeeService;
