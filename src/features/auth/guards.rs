//! Role guards for session-authenticated handlers.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::core::error::AppError;
use crate::core::session::{Session, SessionEmployee};

/// Guard for checking if the login employee is an administrator.
///
/// Non-admins get [`AppError::Forbidden`], which renders the same page as a
/// missing record.
///
/// # Example
/// ```ignore
/// pub async fn handler(RequireAdmin(employee): RequireAdmin) { ... }
/// ```
pub struct RequireAdmin(pub SessionEmployee);

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let employee = parts
            .extensions
            .get::<Session>()
            .and_then(Session::employee)
            .ok_or_else(|| AppError::Unauthorized("Employee not logged in".to_string()))?;

        if !employee.admin {
            return Err(AppError::Forbidden(format!(
                "Admin access required, employee {} is not an admin",
                employee.code
            )));
        }

        Ok(RequireAdmin(employee))
    }
}
