use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::followings::dtos::FollowingView;
use crate::features::followings::models::{Following, FollowingDetail};

/// Service for follow relations between employees
pub struct FollowingService {
    pool: PgPool,
}

impl FollowingService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Start following `followed_id` as `following_id`
    pub async fn create(&self, following_id: Uuid, followed_id: Uuid) -> Result<Following> {
        let following = sqlx::query_as::<_, Following>(
            r#"
            INSERT INTO followings (following_id, followed_id, created_at, updated_at)
            VALUES ($1, $2, NOW(), NOW())
            RETURNING id, following_id, followed_id, created_at, updated_at
            "#,
        )
        .bind(following_id)
        .bind(followed_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create following: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Following created: id={}, following_id={}, followed_id={}",
            following.id,
            following_id,
            followed_id
        );

        Ok(following)
    }

    /// Hard delete the relation.
    ///
    /// Returns `false` when the row was already gone.
    pub async fn destroy(&self, view: &FollowingView) -> Result<bool> {
        let target = Following::from(view);

        let mut tx = self.pool.begin().await.map_err(|e| {
            tracing::error!("Failed to begin transaction: {:?}", e);
            AppError::Database(e)
        })?;

        let existing = sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM followings WHERE id = $1 FOR UPDATE",
        )
        .bind(target.id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch following: {:?}", e);
            AppError::Database(e)
        })?;

        let Some(id) = existing else {
            tracing::debug!("Following {} already removed", target.id);
            return Ok(false);
        };

        sqlx::query("DELETE FROM followings WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete following: {:?}", e);
                AppError::Database(e)
            })?;

        tx.commit().await.map_err(|e| {
            tracing::error!("Failed to commit following delete: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Following deleted: id={}, following_id={}, followed_id={}",
            id,
            target.following_id,
            target.followed_id
        );

        Ok(true)
    }

    /// Every relation where the employee is the follower, newest first
    pub async fn list_all_for_actor(&self, following_id: Uuid) -> Result<Vec<FollowingView>> {
        let rows = sqlx::query_as::<_, FollowingDetail>(
            r#"
            SELECT f.id, f.following_id, f.followed_id,
                   e.code AS followed_code, e.name AS followed_name,
                   f.created_at, f.updated_at
            FROM followings f
            JOIN employees e ON e.id = f.followed_id
            WHERE f.following_id = $1
            ORDER BY f.created_at DESC, f.id DESC
            "#,
        )
        .bind(following_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list followings: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(rows.into_iter().map(FollowingView::from).collect())
    }

    pub async fn is_following(&self, following_id: Uuid, followed_id: Uuid) -> Result<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM followings WHERE following_id = $1 AND followed_id = $2)",
        )
        .bind(following_id)
        .bind(followed_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to check following: {:?}", e);
            AppError::Database(e)
        })
    }

    /// Remove every relation from `following_id` to `followed_id`.
    ///
    /// Returns how many relations were removed.
    pub async fn unfollow(&self, following_id: Uuid, followed_id: Uuid) -> Result<usize> {
        let mut removed = 0;
        for view in self.list_all_for_actor(following_id).await? {
            if view.targets(followed_id) && self.destroy(&view).await? {
                removed += 1;
            }
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::insert_employee;

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a postgres database"]
    async fn test_follow_then_unfollow(pool: PgPool) {
        let actor = insert_employee(&pool, "E0001").await;
        let target = insert_employee(&pool, "E0002").await;
        let other = insert_employee(&pool, "E0003").await;
        let service = FollowingService::new(pool);

        service.create(actor, target).await.unwrap();
        service.create(actor, target).await.unwrap();
        service.create(actor, other).await.unwrap();
        assert!(service.is_following(actor, target).await.unwrap());

        assert_eq!(service.unfollow(actor, target).await.unwrap(), 2);
        assert!(!service.is_following(actor, target).await.unwrap());
        assert!(service.is_following(actor, other).await.unwrap());
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a postgres database"]
    async fn test_destroy_twice_is_noop(pool: PgPool) {
        let actor = insert_employee(&pool, "E0001").await;
        let target = insert_employee(&pool, "E0002").await;
        let service = FollowingService::new(pool);

        service.create(actor, target).await.unwrap();
        let views = service.list_all_for_actor(actor).await.unwrap();
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].followed.code, "E0002");

        assert!(service.destroy(&views[0]).await.unwrap());
        assert!(!service.destroy(&views[0]).await.unwrap());
        assert!(service.list_all_for_actor(actor).await.unwrap().is_empty());
    }
}
