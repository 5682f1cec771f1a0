use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::features::employees::dtos::EmployeeSummary;
use crate::features::followings::models::{Following, FollowingDetail};

#[derive(Debug, Clone, Serialize)]
pub struct FollowingView {
    pub id: Uuid,
    pub following_id: Uuid,
    pub followed: EmployeeSummary,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<FollowingDetail> for FollowingView {
    fn from(f: FollowingDetail) -> Self {
        Self {
            id: f.id,
            following_id: f.following_id,
            followed: EmployeeSummary {
                id: f.followed_id,
                code: f.followed_code,
                name: f.followed_name,
            },
            created_at: f.created_at,
            updated_at: f.updated_at,
        }
    }
}

impl From<&FollowingView> for Following {
    fn from(v: &FollowingView) -> Self {
        Self {
            id: v.id,
            following_id: v.following_id,
            followed_id: v.followed.id,
            created_at: v.created_at,
            updated_at: v.updated_at,
        }
    }
}

impl FollowingView {
    pub fn targets(&self, employee_id: Uuid) -> bool {
        self.followed.id == employee_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_to_model() {
        let followed = Uuid::new_v4();
        let detail = FollowingDetail {
            id: Uuid::new_v4(),
            following_id: Uuid::new_v4(),
            followed_id: followed,
            followed_code: "E0003".to_string(),
            followed_name: "Suzuki".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let view = FollowingView::from(detail.clone());
        assert!(view.targets(followed));
        assert!(!view.targets(detail.following_id));

        let model = Following::from(&view);
        assert_eq!(model.id, detail.id);
        assert_eq!(model.following_id, detail.following_id);
        assert_eq!(model.followed_id, followed);
    }
}
