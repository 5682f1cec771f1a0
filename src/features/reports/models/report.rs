use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a daily report, joined with its author
#[derive(Debug, Clone, FromRow)]
pub struct Report {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub employee_code: String,
    pub employee_name: String,
    pub report_date: NaiveDate,
    pub title: String,
    pub content: String,
    pub like_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for inserting a report. The like counter always starts at zero.
#[derive(Debug, Clone)]
pub struct CreateReport {
    pub employee_id: Uuid,
    pub report_date: NaiveDate,
    pub title: String,
    pub content: String,
}

/// Author-editable fields of a report
#[derive(Debug, Clone)]
pub struct UpdateReport {
    pub report_date: NaiveDate,
    pub title: String,
    pub content: String,
}
