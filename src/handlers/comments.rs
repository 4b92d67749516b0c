/// Comment handlers - HTTP endpoints for comment operations
///
/// Comments are addressed under their post: the owning post comes from the
/// URL path, never from the body, and a missing post is a 404.
use crate::error::Result;
use crate::middleware::UserId;
use crate::services::CommentService;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCommentRequest {
    pub text: String,
}

/// List a post's comments
pub async fn list_comments(
    pool: web::Data<PgPool>,
    post_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = CommentService::new((**pool).clone());
    let comments = service.list_comments(*post_id).await?;

    Ok(HttpResponse::Ok().json(comments))
}

/// Create a comment on a post. The author is stamped from the session.
pub async fn create_comment(
    pool: web::Data<PgPool>,
    post_id: web::Path<Uuid>,
    user_id: UserId,
    req: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse> {
    let service = CommentService::new((**pool).clone());
    let comment = service
        .create_comment(*post_id, user_id.0, &req.text)
        .await?;

    Ok(HttpResponse::Created().json(comment))
}

/// Get a single comment
pub async fn get_comment(
    pool: web::Data<PgPool>,
    path: web::Path<(Uuid, Uuid)>,
) -> Result<HttpResponse> {
    let (post_id, comment_id) = path.into_inner();
    let service = CommentService::new((**pool).clone());
    let comment = service.get_comment(post_id, comment_id).await?;

    Ok(HttpResponse::Ok().json(comment))
}

/// Update a comment (author only)
pub async fn update_comment(
    pool: web::Data<PgPool>,
    path: web::Path<(Uuid, Uuid)>,
    user_id: UserId,
    req: web::Json<UpdateCommentRequest>,
) -> Result<HttpResponse> {
    let (post_id, comment_id) = path.into_inner();
    let service = CommentService::new((**pool).clone());
    let comment = service
        .update_comment(post_id, comment_id, user_id.0, &req.text)
        .await?;

    Ok(HttpResponse::Ok().json(comment))
}

/// Delete a comment (author only)
pub async fn delete_comment(
    pool: web::Data<PgPool>,
    path: web::Path<(Uuid, Uuid)>,
    user_id: UserId,
) -> Result<HttpResponse> {
    let (post_id, comment_id) = path.into_inner();
    let service = CommentService::new((**pool).clone());
    service.delete_comment(post_id, comment_id, user_id.0).await?;

    Ok(HttpResponse::NoContent().finish())
}
