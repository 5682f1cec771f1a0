use sqlx::PgPool;
use uuid::Uuid;

use crate::core::config::BootstrapAdminConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::password::hash_password;
use crate::features::employees::models::{CreateEmployee, Employee};
use crate::shared::types::PageRequest;

const EMPLOYEE_COLUMNS: &str = "id, code, name, password, admin_flag, created_at, updated_at";

/// Service for employee accounts
pub struct EmployeeService {
    pool: PgPool,
}

impl EmployeeService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Employee>> {
        sqlx::query_as::<_, Employee>(&format!(
            "SELECT {} FROM employees WHERE id = $1",
            EMPLOYEE_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch employee: {:?}", e);
            AppError::Database(e)
        })
    }

    /// Get employee by id or fail with not found
    pub async fn get_by_id(&self, id: Uuid) -> Result<Employee> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Employee {} not found", id)))
    }

    pub async fn find_by_code(&self, code: &str) -> Result<Option<Employee>> {
        sqlx::query_as::<_, Employee>(&format!(
            "SELECT {} FROM employees WHERE code = $1",
            EMPLOYEE_COLUMNS
        ))
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch employee by code: {:?}", e);
            AppError::Database(e)
        })
    }

    /// One page of employees, newest first
    pub async fn list_page(&self, page: PageRequest) -> Result<Vec<Employee>> {
        sqlx::query_as::<_, Employee>(&format!(
            "SELECT {} FROM employees ORDER BY created_at DESC, id DESC LIMIT $1 OFFSET $2",
            EMPLOYEE_COLUMNS
        ))
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list employees: {:?}", e);
            AppError::Database(e)
        })
    }

    pub async fn count_all(&self) -> Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employees")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count employees: {:?}", e);
                AppError::Database(e)
            })
    }

    pub async fn code_exists(&self, code: &str) -> Result<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM employees WHERE code = $1)")
            .bind(code)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to check employee code: {:?}", e);
                AppError::Database(e)
            })
    }

    pub async fn create(&self, data: CreateEmployee) -> Result<Employee> {
        let employee = sqlx::query_as::<_, Employee>(&format!(
            r#"
            INSERT INTO employees (code, name, password, admin_flag, created_at, updated_at)
            VALUES ($1, $2, $3, $4, NOW(), NOW())
            RETURNING {}
            "#,
            EMPLOYEE_COLUMNS
        ))
        .bind(&data.code)
        .bind(&data.name)
        .bind(&data.password_hash)
        .bind(data.admin_flag)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create employee: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Employee created: id={}, code={}, admin={}",
            employee.id,
            employee.code,
            employee.admin_flag
        );

        Ok(employee)
    }

    /// Hash the password and create the employee
    pub async fn register(
        &self,
        code: String,
        name: String,
        password: String,
        admin_flag: bool,
    ) -> Result<Employee> {
        let password_hash = hash_password(password).await?;
        self.create(CreateEmployee {
            code,
            name,
            password_hash,
            admin_flag,
        })
        .await
    }

    /// Create the configured administrator when no employee exists yet.
    ///
    /// Returns whether an account was created.
    pub async fn ensure_bootstrap_admin(&self, config: &BootstrapAdminConfig) -> Result<bool> {
        if self.count_all().await? > 0 {
            tracing::debug!("Employees already present, skipping bootstrap admin");
            return Ok(false);
        }

        self.register(
            config.code.clone(),
            config.name.clone(),
            config.password.clone(),
            true,
        )
        .await?;

        tracing::info!("Bootstrap admin created: code={}", config.code);
        Ok(true)
    }
}
