use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::reports::models::{CreateReport, Report, UpdateReport};
use crate::shared::types::PageRequest;

/// Report columns joined with the author, for a `reports r JOIN employees e` source
const REPORT_SELECT: &str = r#"
    SELECT r.id, r.employee_id, e.code AS employee_code, e.name AS employee_name,
           r.report_date, r.title, r.content, r.like_count, r.created_at, r.updated_at
"#;

const REPORT_ORDER: &str = "ORDER BY r.report_date DESC, r.created_at DESC, r.id DESC";

/// Service for daily reports
pub struct ReportService {
    pool: PgPool,
}

impl ReportService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Report>> {
        sqlx::query_as::<_, Report>(&format!(
            "{} FROM reports r JOIN employees e ON e.id = r.employee_id WHERE r.id = $1",
            REPORT_SELECT
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch report: {:?}", e);
            AppError::Database(e)
        })
    }

    /// Get report by id or fail with not found
    pub async fn get_by_id(&self, id: Uuid) -> Result<Report> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))
    }

    /// One page of all reports, newest report date first
    pub async fn list_page(&self, page: PageRequest) -> Result<Vec<Report>> {
        sqlx::query_as::<_, Report>(&format!(
            "{} FROM reports r JOIN employees e ON e.id = r.employee_id {} LIMIT $1 OFFSET $2",
            REPORT_SELECT, REPORT_ORDER
        ))
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list reports: {:?}", e);
            AppError::Database(e)
        })
    }

    pub async fn count_all(&self) -> Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM reports")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count reports: {:?}", e);
                AppError::Database(e)
            })
    }

    /// One page of reports written by employees that `viewer_id` follows
    pub async fn list_timeline_page(
        &self,
        viewer_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Report>> {
        sqlx::query_as::<_, Report>(&format!(
            r#"
            {}
            FROM reports r
            JOIN employees e ON e.id = r.employee_id
            WHERE r.employee_id IN (SELECT followed_id FROM followings WHERE following_id = $1)
            {}
            LIMIT $2 OFFSET $3
            "#,
            REPORT_SELECT, REPORT_ORDER
        ))
        .bind(viewer_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list timeline: {:?}", e);
            AppError::Database(e)
        })
    }

    pub async fn count_timeline(&self, viewer_id: Uuid) -> Result<i64> {
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM reports
            WHERE employee_id IN (SELECT followed_id FROM followings WHERE following_id = $1)
            "#,
        )
        .bind(viewer_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count timeline: {:?}", e);
            AppError::Database(e)
        })
    }

    pub async fn create(&self, data: CreateReport) -> Result<Report> {
        let report = sqlx::query_as::<_, Report>(&format!(
            r#"
            WITH r AS (
                INSERT INTO reports (employee_id, report_date, title, content, like_count, created_at, updated_at)
                VALUES ($1, $2, $3, $4, 0, NOW(), NOW())
                RETURNING *
            )
            {} FROM r JOIN employees e ON e.id = r.employee_id
            "#,
            REPORT_SELECT
        ))
        .bind(data.employee_id)
        .bind(data.report_date)
        .bind(&data.title)
        .bind(&data.content)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create report: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Report created: id={}, employee_id={}, date={}",
            report.id,
            report.employee_id,
            report.report_date
        );

        Ok(report)
    }

    /// Apply the author-editable fields. The like counter is left untouched.
    pub async fn update(&self, id: Uuid, data: UpdateReport) -> Result<Report> {
        let report = sqlx::query_as::<_, Report>(&format!(
            r#"
            WITH r AS (
                UPDATE reports
                SET report_date = $2, title = $3, content = $4, updated_at = NOW()
                WHERE id = $1
                RETURNING *
            )
            {} FROM r JOIN employees e ON e.id = r.employee_id
            "#,
            REPORT_SELECT
        ))
        .bind(id)
        .bind(data.report_date)
        .bind(&data.title)
        .bind(&data.content)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update report: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))?;

        tracing::info!("Report updated: id={}", report.id);

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::constants::ROW_PER_PAGE;
    use crate::shared::test_helpers::{insert_employee, report_data};
    use chrono::NaiveDate;

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a postgres database"]
    async fn test_create_starts_with_zero_likes(pool: PgPool) {
        let author = insert_employee(&pool, "E0001").await;
        let service = ReportService::new(pool);

        let report = service.create(report_data(author, 1)).await.unwrap();
        assert_eq!(report.like_count, 0);
        assert_eq!(report.employee_code, "E0001");

        let updated = service
            .update(
                report.id,
                UpdateReport {
                    report_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
                    title: "Edited".to_string(),
                    content: "Edited content".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.title, "Edited");
        assert_eq!(updated.like_count, 0);
        assert_eq!(updated.created_at, report.created_at);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a postgres database"]
    async fn test_pagination_window(pool: PgPool) {
        let author = insert_employee(&pool, "E0001").await;
        let service = ReportService::new(pool);
        for day in 1..=20 {
            service.create(report_data(author, day)).await.unwrap();
        }

        let first = service.list_page(PageRequest::new(1)).await.unwrap();
        let second = service.list_page(PageRequest::new(2)).await.unwrap();

        assert_eq!(service.count_all().await.unwrap(), 20);
        assert_eq!(first.len() as i64, ROW_PER_PAGE);
        assert_eq!(second.len(), 5);
        assert_eq!(first[0].report_date, NaiveDate::from_ymd_opt(2024, 4, 20).unwrap());
        assert_eq!(second[4].report_date, NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a postgres database"]
    async fn test_timeline_shows_followed_authors_only(pool: PgPool) {
        let viewer = insert_employee(&pool, "E0001").await;
        let followed = insert_employee(&pool, "E0002").await;
        let stranger = insert_employee(&pool, "E0003").await;
        let service = ReportService::new(pool.clone());

        service.create(report_data(followed, 1)).await.unwrap();
        service.create(report_data(stranger, 2)).await.unwrap();
        service.create(report_data(viewer, 3)).await.unwrap();
        sqlx::query("INSERT INTO followings (following_id, followed_id) VALUES ($1, $2)")
            .bind(viewer)
            .bind(followed)
            .execute(&pool)
            .await
            .unwrap();

        let timeline = service
            .list_timeline_page(viewer, PageRequest::new(1))
            .await
            .unwrap();
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline[0].employee_id, followed);
        assert_eq!(service.count_timeline(viewer).await.unwrap(), 1);
        assert_eq!(service.count_timeline(stranger).await.unwrap(), 0);
    }
}
