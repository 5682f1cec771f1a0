use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::features::employees::dtos::EmployeeSummary;
use crate::features::likes::models::{Like, LikeDetail};

/// A like as shown on the report's like list
#[derive(Debug, Clone, Serialize)]
pub struct LikeView {
    pub id: Uuid,
    pub report_id: Uuid,
    pub employee: EmployeeSummary,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<LikeDetail> for LikeView {
    fn from(l: LikeDetail) -> Self {
        Self {
            id: l.id,
            report_id: l.report_id,
            employee: EmployeeSummary {
                id: l.employee_id,
                code: l.employee_code,
                name: l.employee_name,
            },
            created_at: l.created_at,
            updated_at: l.updated_at,
        }
    }
}

impl From<&LikeView> for Like {
    fn from(v: &LikeView) -> Self {
        Self {
            id: v.id,
            report_id: v.report_id,
            employee_id: v.employee.id,
            created_at: v.created_at,
            updated_at: v.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, Faker};

    #[test]
    fn test_view_keeps_identity() {
        let detail = LikeDetail {
            id: Uuid::new_v4(),
            report_id: Uuid::new_v4(),
            employee_id: Uuid::new_v4(),
            employee_code: "E0002".to_string(),
            employee_name: Faker.fake(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let view = LikeView::from(detail.clone());
        assert_eq!(view.employee.code, "E0002");
        assert_eq!(view.employee.name, detail.employee_name);

        let like = Like::from(&view);
        assert_eq!(like.id, detail.id);
        assert_eq!(like.report_id, detail.report_id);
        assert_eq!(like.employee_id, detail.employee_id);
        assert_eq!(like.created_at, detail.created_at);
    }
}
