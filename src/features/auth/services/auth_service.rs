use std::sync::Arc;

use crate::core::error::Result;
use crate::features::auth::password::verify_password;
use crate::features::employees::models::Employee;
use crate::features::employees::EmployeeService;

/// Service for login credential checks
pub struct AuthService {
    employee_service: Arc<EmployeeService>,
}

impl AuthService {
    pub fn new(employee_service: Arc<EmployeeService>) -> Self {
        Self { employee_service }
    }

    /// Look up the employee by code and verify the password.
    ///
    /// Unknown code and wrong password both yield `None`.
    pub async fn authenticate(&self, code: &str, password: &str) -> Result<Option<Employee>> {
        let Some(employee) = self.employee_service.find_by_code(code).await? else {
            tracing::info!("Login failed: unknown employee code {}", code);
            return Ok(None);
        };

        if !verify_password(password.to_string(), employee.password.clone()).await? {
            tracing::info!("Login failed: wrong password for {}", code);
            return Ok(None);
        }

        tracing::info!("Employee logged in: id={}, code={}", employee.id, employee.code);
        Ok(Some(employee))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::PgPool;

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a postgres database"]
    async fn test_authenticate(pool: PgPool) {
        let employees = Arc::new(EmployeeService::new(pool));
        employees
            .register(
                "E0001".to_string(),
                "Sato".to_string(),
                "password123".to_string(),
                false,
            )
            .await
            .unwrap();
        let service = AuthService::new(employees);

        let found = service.authenticate("E0001", "password123").await.unwrap();
        assert_eq!(found.map(|e| e.code), Some("E0001".to_string()));
        assert!(service.authenticate("E0001", "wrong-pass").await.unwrap().is_none());
        assert!(service.authenticate("E9999", "password123").await.unwrap().is_none());
    }
}
