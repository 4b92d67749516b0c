use crate::db::{comment_repo, post_repo};
use crate::error::{AppError, Result};
use crate::middleware::permissions;
use crate::models::Comment;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct CommentService {
    pool: PgPool,
}

impl CommentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The owning post comes from the URL path and must exist.
    async fn ensure_post_exists(&self, post_id: Uuid) -> Result<()> {
        post_repo::find_post_by_id(&self.pool, post_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))
    }

    /// Create a comment authored by `author_id` (the authenticated caller)
    /// on the post addressed by the path.
    pub async fn create_comment(
        &self,
        post_id: Uuid,
        author_id: Uuid,
        text: &str,
    ) -> Result<Comment> {
        self.ensure_post_exists(post_id).await?;

        if text.trim().is_empty() {
            return Err(AppError::Validation(
                "Comment text must not be empty".to_string(),
            ));
        }

        Ok(comment_repo::create_comment(&self.pool, post_id, author_id, text).await?)
    }

    pub async fn get_comment(&self, post_id: Uuid, comment_id: Uuid) -> Result<Comment> {
        self.ensure_post_exists(post_id).await?;

        comment_repo::find_comment_by_id(&self.pool, post_id, comment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))
    }

    pub async fn list_comments(&self, post_id: Uuid) -> Result<Vec<Comment>> {
        self.ensure_post_exists(post_id).await?;

        Ok(comment_repo::list_comments(&self.pool, post_id).await?)
    }

    /// Update a comment. Only the author may do this.
    pub async fn update_comment(
        &self,
        post_id: Uuid,
        comment_id: Uuid,
        actor_id: Uuid,
        text: &str,
    ) -> Result<Comment> {
        let comment = self.get_comment(post_id, comment_id).await?;
        permissions::check_comment_ownership(actor_id, &comment)?;

        if text.trim().is_empty() {
            return Err(AppError::Validation(
                "Comment text must not be empty".to_string(),
            ));
        }

        comment_repo::update_comment(&self.pool, comment_id, text).await?;
        self.get_comment(post_id, comment_id).await
    }

    /// Delete a comment. Only the author may do this.
    pub async fn delete_comment(
        &self,
        post_id: Uuid,
        comment_id: Uuid,
        actor_id: Uuid,
    ) -> Result<()> {
        let comment = self.get_comment(post_id, comment_id).await?;
        permissions::check_comment_ownership(actor_id, &comment)?;

        comment_repo::delete_comment(&self.pool, comment_id).await?;
        Ok(())
    }
}
