/// Data models for blog-service
///
/// Rows are read with their author/follower usernames joined in, so handlers
/// can serialize them directly.
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A registered account. Provisioned by the external identity provider and
/// referenced, never mutated, by this service.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Account {
    pub id: Uuid,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// A blog post. `author` is the owning account's username.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub author: String,
    pub group_id: Option<Uuid>,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// A topic group posts can optionally belong to. Read-only over HTTP.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Group {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
}

/// A comment on a post.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Comment {
    pub id: Uuid,
    pub author_id: Uuid,
    pub author: String,
    pub post_id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// A directed follow edge, rendered with both usernames.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Follow {
    pub id: Uuid,
    pub follower: String,
    pub followee: String,
    pub created_at: DateTime<Utc>,
}
