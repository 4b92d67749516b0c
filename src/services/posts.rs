use crate::db::{group_repo, post_repo};
use crate::error::{AppError, Result};
use crate::middleware::permissions;
use crate::models::Post;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct PostService {
    pool: PgPool,
}

impl PostService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a post authored by `author_id` (the authenticated caller).
    pub async fn create_post(
        &self,
        author_id: Uuid,
        text: &str,
        group_id: Option<Uuid>,
    ) -> Result<Post> {
        if text.trim().is_empty() {
            return Err(AppError::Validation("Post text must not be empty".to_string()));
        }

        if let Some(group_id) = group_id {
            if group_repo::find_group_by_id(&self.pool, group_id)
                .await?
                .is_none()
            {
                return Err(AppError::Validation("Group does not exist".to_string()));
            }
        }

        Ok(post_repo::create_post(&self.pool, author_id, text, group_id).await?)
    }

    pub async fn get_post(&self, post_id: Uuid) -> Result<Post> {
        post_repo::find_post_by_id(&self.pool, post_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))
    }

    /// List posts with limit/offset pagination; returns the page and the
    /// total count.
    pub async fn list_posts(&self, limit: i64, offset: i64) -> Result<(Vec<Post>, i64)> {
        let posts = post_repo::list_posts(&self.pool, limit, offset).await?;
        let total = post_repo::count_posts(&self.pool).await?;
        Ok((posts, total))
    }

    /// Update a post. Only the author may do this.
    ///
    /// `group_id` distinguishes three intents: `None` keeps the current
    /// group, `Some(None)` detaches the post, `Some(Some(id))` reassigns it.
    pub async fn update_post(
        &self,
        post_id: Uuid,
        actor_id: Uuid,
        text: Option<&str>,
        group_id: Option<Option<Uuid>>,
    ) -> Result<Post> {
        let post = self.get_post(post_id).await?;
        permissions::check_post_ownership(actor_id, &post)?;

        if let Some(text) = text {
            if text.trim().is_empty() {
                return Err(AppError::Validation("Post text must not be empty".to_string()));
            }
        }

        if let Some(Some(group_id)) = group_id {
            if group_repo::find_group_by_id(&self.pool, group_id)
                .await?
                .is_none()
            {
                return Err(AppError::Validation("Group does not exist".to_string()));
            }
        }

        post_repo::update_post(&self.pool, post_id, text, group_id).await?;
        self.get_post(post_id).await
    }

    /// Delete a post. Only the author may do this; comments cascade.
    pub async fn delete_post(&self, post_id: Uuid, actor_id: Uuid) -> Result<()> {
        let post = self.get_post(post_id).await?;
        permissions::check_post_ownership(actor_id, &post)?;

        post_repo::delete_post(&self.pool, post_id).await?;
        Ok(())
    }
}
