use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::likes::models::{Like, LikeDetail};
use crate::shared::types::PageRequest;

const LIKE_DETAIL_SELECT: &str = r#"
    SELECT l.id, l.report_id, l.employee_id,
           e.code AS employee_code, e.name AS employee_name,
           l.created_at, l.updated_at
    FROM likes l
    JOIN employees e ON e.id = l.employee_id
    WHERE l.report_id = $1
    ORDER BY l.created_at DESC, l.id DESC
"#;

/// Service for likes on reports
pub struct LikeService {
    pool: PgPool,
}

impl LikeService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Like a report.
    ///
    /// The report counter and the like row are written in one transaction.
    /// The counter is incremented in SQL so concurrent likes are all counted.
    pub async fn create(&self, report_id: Uuid, employee_id: Uuid) -> Result<Like> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            tracing::error!("Failed to begin transaction: {:?}", e);
            AppError::Database(e)
        })?;

        let updated = sqlx::query("UPDATE reports SET like_count = like_count + 1 WHERE id = $1")
            .bind(report_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to increment like count: {:?}", e);
                AppError::Database(e)
            })?;

        if updated.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Report {} not found", report_id)));
        }

        let like = sqlx::query_as::<_, Like>(
            r#"
            INSERT INTO likes (report_id, employee_id, created_at, updated_at)
            VALUES ($1, $2, NOW(), NOW())
            RETURNING id, report_id, employee_id, created_at, updated_at
            "#,
        )
        .bind(report_id)
        .bind(employee_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create like: {:?}", e);
            AppError::Database(e)
        })?;

        tx.commit().await.map_err(|e| {
            tracing::error!("Failed to commit like: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Like created: id={}, report_id={}, employee_id={}",
            like.id,
            report_id,
            employee_id
        );

        Ok(like)
    }

    /// Every like on a report, newest first
    pub async fn list_all_for_report(&self, report_id: Uuid) -> Result<Vec<LikeDetail>> {
        sqlx::query_as::<_, LikeDetail>(LIKE_DETAIL_SELECT)
            .bind(report_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list likes: {:?}", e);
                AppError::Database(e)
            })
    }

    pub async fn list_page_for_report(
        &self,
        report_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<LikeDetail>> {
        sqlx::query_as::<_, LikeDetail>(&format!("{} LIMIT $2 OFFSET $3", LIKE_DETAIL_SELECT))
            .bind(report_id)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list likes page: {:?}", e);
                AppError::Database(e)
            })
    }

    pub async fn count_for_report(&self, report_id: Uuid) -> Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM likes WHERE report_id = $1")
            .bind(report_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count likes: {:?}", e);
                AppError::Database(e)
            })
    }

    /// Whether the employee has liked the report at least once
    pub async fn exists(&self, report_id: Uuid, employee_id: Uuid) -> Result<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM likes WHERE report_id = $1 AND employee_id = $2)",
        )
        .bind(report_id)
        .bind(employee_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to check like: {:?}", e);
            AppError::Database(e)
        })
    }
}
