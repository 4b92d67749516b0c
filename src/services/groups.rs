use crate::db::group_repo;
use crate::error::{AppError, Result};
use crate::models::Group;
use sqlx::PgPool;
use uuid::Uuid;

/// Groups are a read-only resource over HTTP; rows are managed out of band.
#[derive(Clone)]
pub struct GroupService {
    pool: PgPool,
}

impl GroupService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_groups(&self) -> Result<Vec<Group>> {
        Ok(group_repo::list_groups(&self.pool).await?)
    }

    pub async fn get_group(&self, group_id: Uuid) -> Result<Group> {
        group_repo::find_group_by_id(&self.pool, group_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Group not found".to_string()))
    }
}
