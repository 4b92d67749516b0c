use crate::models::Follow;
use sqlx::PgPool;
use uuid::Uuid;

/// Check whether a (follower, followee) edge already exists
pub async fn follow_exists(
    pool: &PgPool,
    follower_id: Uuid,
    followee_id: Uuid,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        SELECT EXISTS (
            SELECT 1 FROM follows
            WHERE follower_id = $1 AND followee_id = $2
        )
        "#,
    )
    .bind(follower_id)
    .bind(followee_id)
    .fetch_one(pool)
    .await
}

/// Insert a follow edge; returns the new row's id, or None when the edge
/// already exists. The UNIQUE constraint absorbs the check/insert race.
pub async fn create_follow(
    pool: &PgPool,
    follower_id: Uuid,
    followee_id: Uuid,
) -> Result<Option<Uuid>, sqlx::Error> {
    let inserted = sqlx::query_as::<_, (Uuid,)>(
        r#"
        INSERT INTO follows (id, follower_id, followee_id, created_at)
        VALUES ($1, $2, $3, NOW())
        ON CONFLICT (follower_id, followee_id) DO NOTHING
        RETURNING id
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(follower_id)
    .bind(followee_id)
    .fetch_optional(pool)
    .await?;

    Ok(inserted.map(|(id,)| id))
}

/// Find a follow edge by ID, with both usernames joined in
pub async fn find_follow_by_id(
    pool: &PgPool,
    follow_id: Uuid,
) -> Result<Option<Follow>, sqlx::Error> {
    sqlx::query_as::<_, Follow>(
        r#"
        SELECT f.id, fa.username AS follower, ta.username AS followee, f.created_at
        FROM follows f
        JOIN accounts fa ON fa.id = f.follower_id
        JOIN accounts ta ON ta.id = f.followee_id
        WHERE f.id = $1
        "#,
    )
    .bind(follow_id)
    .fetch_optional(pool)
    .await
}

/// Escape LIKE metacharacters so a search term matches literally
fn escape_like(pattern: &str) -> String {
    pattern
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// List a follower's edges, optionally filtered by a literal
/// followee-username substring (case-insensitive)
pub async fn list_follows(
    pool: &PgPool,
    follower_id: Uuid,
    search: Option<&str>,
) -> Result<Vec<Follow>, sqlx::Error> {
    let search = search.map(escape_like);

    sqlx::query_as::<_, Follow>(
        r#"
        SELECT f.id, fa.username AS follower, ta.username AS followee, f.created_at
        FROM follows f
        JOIN accounts fa ON fa.id = f.follower_id
        JOIN accounts ta ON ta.id = f.followee_id
        WHERE f.follower_id = $1
          AND ($2::text IS NULL OR ta.username ILIKE '%' || $2 || '%')
        ORDER BY f.created_at DESC
        "#,
    )
    .bind(follower_id)
    .bind(search)
    .fetch_all(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_underscore_wildcard() {
        assert_eq!(escape_like("a_b"), "a\\_b");
    }

    #[test]
    fn escapes_percent_wildcard() {
        assert_eq!(escape_like("100%"), "100\\%");
    }

    #[test]
    fn escapes_backslash_before_wildcards() {
        assert_eq!(escape_like("a\\_b"), "a\\\\\\_b");
    }

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(escape_like("alice"), "alice");
    }
}
