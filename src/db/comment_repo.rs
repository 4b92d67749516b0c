use crate::models::Comment;
use sqlx::PgPool;
use uuid::Uuid;

/// Create a new comment. Author and post are resolved by the service layer
/// from the session and the URL path respectively.
pub async fn create_comment(
    pool: &PgPool,
    post_id: Uuid,
    author_id: Uuid,
    text: &str,
) -> Result<Comment, sqlx::Error> {
    let comment_id: Uuid = sqlx::query_scalar(
        r#"
        INSERT INTO comments (post_id, author_id, text)
        VALUES ($1, $2, $3)
        RETURNING id
        "#,
    )
    .bind(post_id)
    .bind(author_id)
    .bind(text)
    .fetch_one(pool)
    .await?;

    find_comment_by_id(pool, post_id, comment_id)
        .await?
        .ok_or(sqlx::Error::RowNotFound)
}

/// Find a comment by ID, scoped to its post
pub async fn find_comment_by_id(
    pool: &PgPool,
    post_id: Uuid,
    comment_id: Uuid,
) -> Result<Option<Comment>, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        r#"
        SELECT c.id, c.author_id, a.username AS author, c.post_id, c.text, c.created_at
        FROM comments c
        JOIN accounts a ON a.id = c.author_id
        WHERE c.id = $1 AND c.post_id = $2
        "#,
    )
    .bind(comment_id)
    .bind(post_id)
    .fetch_optional(pool)
    .await
}

/// List a post's comments in ascending order by creation date
pub async fn list_comments(pool: &PgPool, post_id: Uuid) -> Result<Vec<Comment>, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        r#"
        SELECT c.id, c.author_id, a.username AS author, c.post_id, c.text, c.created_at
        FROM comments c
        JOIN accounts a ON a.id = c.author_id
        WHERE c.post_id = $1
        ORDER BY c.created_at
        "#,
    )
    .bind(post_id)
    .fetch_all(pool)
    .await
}

/// Update a comment's text
pub async fn update_comment(
    pool: &PgPool,
    comment_id: Uuid,
    text: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE comments SET text = $2 WHERE id = $1")
        .bind(comment_id)
        .bind(text)
        .execute(pool)
        .await?;

    Ok(())
}

/// Delete a comment; returns true if a row was removed
pub async fn delete_comment(pool: &PgPool, comment_id: Uuid) -> Result<bool, sqlx::Error> {
    let affected = sqlx::query("DELETE FROM comments WHERE id = $1")
        .bind(comment_id)
        .execute(pool)
        .await?
        .rows_affected();

    Ok(affected > 0)
}
