use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for an employee account
#[derive(Debug, Clone, FromRow)]
pub struct Employee {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    /// argon2 PHC string
    pub password: String,
    pub admin_flag: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for inserting a new employee; the password is already hashed
#[derive(Debug, Clone)]
pub struct CreateEmployee {
    pub code: String,
    pub name: String,
    pub password_hash: String,
    pub admin_flag: bool,
}
