//! Follow admission rules
//!
//! Every code path that creates a follow edge goes through
//! [`validate_follow`]; the two rejection reasons are fixed strings surfaced
//! verbatim to the client.

use uuid::Uuid;

/// Why a proposed follow edge was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowRejection {
    /// follower == followee
    SelfFollow,
    /// The (follower, followee) edge already exists
    AlreadyFollowing,
}

impl FollowRejection {
    pub fn reason(&self) -> &'static str {
        match self {
            FollowRejection::SelfFollow => "You cannot follow yourself",
            FollowRejection::AlreadyFollowing => "You are already following this user",
        }
    }
}

/// Decide whether a (follower, followee) edge may be created.
pub fn validate_follow(
    follower_id: Uuid,
    followee_id: Uuid,
    already_following: bool,
) -> Result<(), FollowRejection> {
    if follower_id == followee_id {
        return Err(FollowRejection::SelfFollow);
    }
    if already_following {
        return Err(FollowRejection::AlreadyFollowing);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_self_follow() {
        let user = Uuid::new_v4();
        assert_eq!(
            validate_follow(user, user, false),
            Err(FollowRejection::SelfFollow)
        );
    }

    #[test]
    fn self_follow_wins_over_duplicate() {
        // A self edge can never exist, but the self check must fire first
        let user = Uuid::new_v4();
        assert_eq!(
            validate_follow(user, user, true),
            Err(FollowRejection::SelfFollow)
        );
    }

    #[test]
    fn rejects_duplicate_edge() {
        let follower = Uuid::new_v4();
        let followee = Uuid::new_v4();
        assert_eq!(
            validate_follow(follower, followee, true),
            Err(FollowRejection::AlreadyFollowing)
        );
    }

    #[test]
    fn accepts_new_edge() {
        let follower = Uuid::new_v4();
        let followee = Uuid::new_v4();
        assert_eq!(validate_follow(follower, followee, false), Ok(()));
    }

    #[test]
    fn rejection_reasons_are_distinct() {
        assert_ne!(
            FollowRejection::SelfFollow.reason(),
            FollowRejection::AlreadyFollowing.reason()
        );
    }
}
