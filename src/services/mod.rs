/// Business logic layer for blog-service
pub mod comments;
pub mod follow_rules;
pub mod follows;
pub mod groups;
pub mod posts;

pub use comments::CommentService;
pub use follow_rules::{validate_follow, FollowRejection};
pub use follows::FollowService;
pub use groups::GroupService;
pub use posts::PostService;
