/// Post handlers - HTTP endpoints for post operations
///
/// Listing and retrieval are open to anonymous callers; create, update, and
/// delete require a valid bearer token (the `UserId` extractor), and
/// update/delete are author-only (enforced in the service layer).
use crate::error::Result;
use crate::middleware::UserId;
use crate::models::Post;
use crate::services::PostService;
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub text: String,
    pub group_id: Option<Uuid>,
}

/// Keep absent and explicit-null fields distinguishable: absent means "keep
/// the current value", `"group_id": null` means "detach from the group".
fn deserialize_explicit_null<'de, T, D>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    pub text: Option<String>,
    #[serde(default, deserialize_with = "deserialize_explicit_null")]
    pub group_id: Option<Option<Uuid>>,
}

/// Pagination query parameters
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    10
}

impl PaginationParams {
    /// Non-positive limits fall back to the default instead of reaching the
    /// database, which rejects negative LIMIT values.
    pub fn effective_limit(&self) -> i64 {
        if self.limit <= 0 {
            default_limit()
        } else {
            self.limit
        }
    }

    /// Negative offsets clamp to 0.
    pub fn effective_offset(&self) -> i64 {
        self.offset.max(0)
    }
}

#[derive(Debug, Serialize)]
pub struct PostListResponse {
    pub posts: Vec<Post>,
    pub total_count: i64,
    pub has_more: bool,
}

/// List posts, newest first
pub async fn list_posts(
    pool: web::Data<PgPool>,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse> {
    let limit = query.effective_limit();
    let offset = query.effective_offset();

    let service = PostService::new((**pool).clone());
    let (posts, total) = service.list_posts(limit, offset).await?;

    let has_more = (offset + limit) < total;

    Ok(HttpResponse::Ok().json(PostListResponse {
        posts,
        total_count: total,
        has_more,
    }))
}

/// Create a new post. The author is stamped from the session.
pub async fn create_post(
    pool: web::Data<PgPool>,
    user_id: UserId,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let post = service
        .create_post(user_id.0, &req.text, req.group_id)
        .await?;

    Ok(HttpResponse::Created().json(post))
}

/// Get a post by ID
pub async fn get_post(pool: web::Data<PgPool>, post_id: web::Path<Uuid>) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let post = service.get_post(*post_id).await?;

    Ok(HttpResponse::Ok().json(post))
}

/// Update a post (author only)
pub async fn update_post(
    pool: web::Data<PgPool>,
    post_id: web::Path<Uuid>,
    user_id: UserId,
    req: web::Json<UpdatePostRequest>,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let post = service
        .update_post(*post_id, user_id.0, req.text.as_deref(), req.group_id)
        .await?;

    Ok(HttpResponse::Ok().json(post))
}

/// Delete a post (author only)
pub async fn delete_post(
    pool: web::Data<PgPool>,
    post_id: web::Path<Uuid>,
    user_id: UserId,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    service.delete_post(*post_id, user_id.0).await?;

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_drops_client_supplied_author() {
        // The author field is never part of the request schema; a spoofed
        // value deserializes away and the session identity is stamped instead.
        let req: CreatePostRequest = serde_json::from_value(serde_json::json!({
            "text": "hello",
            "author": "mallory",
            "author_id": "0cb4c4a4-54f2-4b9a-9a1b-000000000000"
        }))
        .expect("unknown fields are ignored");

        assert_eq!(req.text, "hello");
        assert!(req.group_id.is_none());
    }

    #[test]
    fn pagination_defaults_apply() {
        let params: PaginationParams = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(params.limit, 10);
        assert_eq!(params.offset, 0);
    }

    #[test]
    fn negative_pagination_values_fall_back() {
        let params: PaginationParams =
            serde_json::from_value(serde_json::json!({"limit": -1, "offset": -5})).unwrap();
        assert_eq!(params.effective_limit(), 10);
        assert_eq!(params.effective_offset(), 0);
    }

    #[test]
    fn zero_limit_falls_back_to_default() {
        let params: PaginationParams =
            serde_json::from_value(serde_json::json!({"limit": 0, "offset": 20})).unwrap();
        assert_eq!(params.effective_limit(), 10);
        assert_eq!(params.effective_offset(), 20);
    }

    #[test]
    fn positive_pagination_values_pass_through() {
        let params: PaginationParams =
            serde_json::from_value(serde_json::json!({"limit": 25, "offset": 50})).unwrap();
        assert_eq!(params.effective_limit(), 25);
        assert_eq!(params.effective_offset(), 50);
    }

    #[test]
    fn update_distinguishes_null_group_from_absent() {
        let detach: UpdatePostRequest =
            serde_json::from_value(serde_json::json!({"group_id": null})).unwrap();
        assert_eq!(detach.group_id, Some(None));

        let keep: UpdatePostRequest = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(keep.group_id, None);

        let group_id = Uuid::new_v4();
        let reassign: UpdatePostRequest =
            serde_json::from_value(serde_json::json!({"group_id": group_id})).unwrap();
        assert_eq!(reassign.group_id, Some(Some(group_id)));
    }
}
