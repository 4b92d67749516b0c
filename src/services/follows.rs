use crate::db::{account_repo, follow_repo};
use crate::error::{AppError, Result};
use crate::models::Follow;
use crate::services::follow_rules::{validate_follow, FollowRejection};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct FollowService {
    pool: PgPool,
}

impl FollowService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List the caller's follow edges, optionally filtered by followee
    /// username.
    pub async fn list_follows(
        &self,
        follower_id: Uuid,
        search: Option<&str>,
    ) -> Result<Vec<Follow>> {
        Ok(follow_repo::list_follows(&self.pool, follower_id, search).await?)
    }

    /// Create a follow edge from the authenticated caller to the account
    /// named `followee_username`. The follower side always comes from the
    /// session, never from the request body.
    pub async fn follow(&self, follower_id: Uuid, followee_username: &str) -> Result<Follow> {
        let followee = account_repo::find_account_by_username(&self.pool, followee_username)
            .await?
            .ok_or_else(|| {
                AppError::Validation(format!("User '{followee_username}' does not exist"))
            })?;

        let already_following =
            follow_repo::follow_exists(&self.pool, follower_id, followee.id).await?;

        validate_follow(follower_id, followee.id, already_following)
            .map_err(|rejection| AppError::Validation(rejection.reason().to_string()))?;

        // The UNIQUE constraint closes the check/insert race: a concurrent
        // duplicate insert comes back as None and reduces to the same
        // rejection reason instead of a storage error.
        let follow_id = follow_repo::create_follow(&self.pool, follower_id, followee.id)
            .await?
            .ok_or_else(|| {
                AppError::Validation(FollowRejection::AlreadyFollowing.reason().to_string())
            })?;

        follow_repo::find_follow_by_id(&self.pool, follow_id)
            .await?
            .ok_or_else(|| AppError::Internal("Follow edge missing after insert".to_string()))
    }
}
