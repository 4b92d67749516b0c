/// Follow handlers - HTTP endpoints for follow relationships
///
/// The whole scope sits behind `JwtAuthMiddleware`: unlike posts and groups,
/// follow listings are not readable anonymously.
use crate::error::Result;
use crate::middleware::UserId;
use crate::services::FollowService;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;

#[derive(Debug, Deserialize)]
pub struct CreateFollowRequest {
    /// Username of the account to follow
    pub followee: String,
}

#[derive(Debug, Deserialize)]
pub struct FollowSearchParams {
    /// Substring filter on followee username
    pub search: Option<String>,
}

/// List the caller's follow edges
pub async fn list_follows(
    pool: web::Data<PgPool>,
    user_id: UserId,
    query: web::Query<FollowSearchParams>,
) -> Result<HttpResponse> {
    let service = FollowService::new((**pool).clone());
    let follows = service
        .list_follows(user_id.0, query.search.as_deref())
        .await?;

    Ok(HttpResponse::Ok().json(follows))
}

/// Follow another account. The follower is stamped from the session.
pub async fn create_follow(
    pool: web::Data<PgPool>,
    user_id: UserId,
    req: web::Json<CreateFollowRequest>,
) -> Result<HttpResponse> {
    let service = FollowService::new((**pool).clone());
    let follow = service.follow(user_id.0, &req.followee).await?;

    Ok(HttpResponse::Created().json(follow))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_drops_client_supplied_follower() {
        // Only the followee is client-controlled; a spoofed follower field
        // deserializes away.
        let req: CreateFollowRequest = serde_json::from_value(serde_json::json!({
            "followee": "bob",
            "follower": "mallory"
        }))
        .expect("unknown fields are ignored");

        assert_eq!(req.followee, "bob");
    }
}
