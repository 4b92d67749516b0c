/// Group handlers - read-only HTTP endpoints for groups
use crate::error::Result;
use crate::services::GroupService;
use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

/// List all groups
pub async fn list_groups(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let service = GroupService::new((**pool).clone());
    let groups = service.list_groups().await?;

    Ok(HttpResponse::Ok().json(groups))
}

/// Get a group by ID
pub async fn get_group(
    pool: web::Data<PgPool>,
    group_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = GroupService::new((**pool).clone());
    let group = service.get_group(*group_id).await?;

    Ok(HttpResponse::Ok().json(group))
}
