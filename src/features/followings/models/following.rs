use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a follow relation.
///
/// `following_id` is the employee who follows, `followed_id` the one followed.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Following {
    pub id: Uuid,
    pub following_id: Uuid,
    pub followed_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Following joined with the followed employee
#[derive(Debug, Clone, FromRow)]
pub struct FollowingDetail {
    pub id: Uuid,
    pub following_id: Uuid,
    pub followed_id: Uuid,
    pub followed_code: String,
    pub followed_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
