use crate::models::Post;
use sqlx::PgPool;
use uuid::Uuid;

/// Create a new post. The author is always the authenticated caller, stamped
/// by the service layer; client-supplied author values never reach this query.
pub async fn create_post(
    pool: &PgPool,
    author_id: Uuid,
    text: &str,
    group_id: Option<Uuid>,
) -> Result<Post, sqlx::Error> {
    let post_id: Uuid = sqlx::query_scalar(
        r#"
        INSERT INTO posts (author_id, text, group_id)
        VALUES ($1, $2, $3)
        RETURNING id
        "#,
    )
    .bind(author_id)
    .bind(text)
    .bind(group_id)
    .fetch_one(pool)
    .await?;

    // Re-read joined against accounts so the response carries the username
    find_post_by_id(pool, post_id)
        .await?
        .ok_or(sqlx::Error::RowNotFound)
}

/// Find a post by ID
pub async fn find_post_by_id(pool: &PgPool, post_id: Uuid) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT p.id, p.author_id, a.username AS author, p.group_id, p.text, p.created_at
        FROM posts p
        JOIN accounts a ON a.id = p.author_id
        WHERE p.id = $1
        "#,
    )
    .bind(post_id)
    .fetch_optional(pool)
    .await
}

/// List posts in descending order by creation date
pub async fn list_posts(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT p.id, p.author_id, a.username AS author, p.group_id, p.text, p.created_at
        FROM posts p
        JOIN accounts a ON a.id = p.author_id
        ORDER BY p.created_at DESC
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
}

/// Count all posts
pub async fn count_posts(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM posts")
        .fetch_one(pool)
        .await
}

/// Update a post's text and/or group. Unset fields keep their current
/// value; `group_id = Some(None)` detaches the post from its group.
pub async fn update_post(
    pool: &PgPool,
    post_id: Uuid,
    text: Option<&str>,
    group_id: Option<Option<Uuid>>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE posts
        SET text = COALESCE($2, text),
            group_id = CASE WHEN $3 THEN $4 ELSE group_id END
        WHERE id = $1
        "#,
    )
    .bind(post_id)
    .bind(text)
    .bind(group_id.is_some())
    .bind(group_id.flatten())
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete a post; returns true if a row was removed. Comments cascade in the
/// schema.
pub async fn delete_post(pool: &PgPool, post_id: Uuid) -> Result<bool, sqlx::Error> {
    let affected = sqlx::query("DELETE FROM posts WHERE id = $1")
        .bind(post_id)
        .execute(pool)
        .await?
        .rows_affected();

    Ok(affected > 0)
}
