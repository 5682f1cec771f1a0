use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a like on a report
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Like {
    pub id: Uuid,
    pub report_id: Uuid,
    pub employee_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Like joined with the employee who gave it
#[derive(Debug, Clone, FromRow)]
pub struct LikeDetail {
    pub id: Uuid,
    pub report_id: Uuid,
    pub employee_id: Uuid,
    pub employee_code: String,
    pub employee_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
