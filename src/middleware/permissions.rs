/// Authorization module for blog-service
///
/// Ownership-based permission checks: only the author of a post or comment
/// may update or delete it. No roles or admin flags participate.
use crate::error::AppError;
use crate::models::{Comment, Post};
use uuid::Uuid;

/// Result type for permission checks
pub type PermissionResult = Result<(), AppError>;

/// Check if a user owns a post
pub fn check_post_ownership(user_id: Uuid, post: &Post) -> PermissionResult {
    if post.author_id == user_id {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "You don't have permission to modify this post".to_string(),
        ))
    }
}

/// Check if a user owns a comment
pub fn check_comment_ownership(user_id: Uuid, comment: &Comment) -> PermissionResult {
    if comment.author_id == user_id {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "You don't have permission to modify this comment".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn post_by(author_id: Uuid) -> Post {
        Post {
            id: Uuid::new_v4(),
            author_id,
            author: "alice".to_string(),
            group_id: None,
            text: "hello".to_string(),
            created_at: Utc::now(),
        }
    }

    fn comment_by(author_id: Uuid) -> Comment {
        Comment {
            id: Uuid::new_v4(),
            author_id,
            author: "alice".to_string(),
            post_id: Uuid::new_v4(),
            text: "hi".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn author_may_modify_own_post() {
        let author = Uuid::new_v4();
        assert!(check_post_ownership(author, &post_by(author)).is_ok());
    }

    #[test]
    fn non_author_is_forbidden_from_post() {
        let author = Uuid::new_v4();
        let other = Uuid::new_v4();
        let err = check_post_ownership(other, &post_by(author)).unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[test]
    fn author_may_modify_own_comment() {
        let author = Uuid::new_v4();
        assert!(check_comment_ownership(author, &comment_by(author)).is_ok());
    }

    #[test]
    fn non_author_is_forbidden_from_comment() {
        let author = Uuid::new_v4();
        let other = Uuid::new_v4();
        let err = check_comment_ownership(other, &comment_by(author)).unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }
}
