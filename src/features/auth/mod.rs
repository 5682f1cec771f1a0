//! Session login for employees.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/login` | No | Login form |
//! | POST | `/login` | No | Verify code and password, start the session |
//! | POST | `/logout` | No | End the session |

pub mod dtos;
pub mod guards;
pub mod handlers;
pub mod password;
pub mod routes;
pub mod services;

pub use services::AuthService;
