//! Comment repository
//!
//! Writes start with the write statement itself so SQLite takes the write
//! lock before reading, letting concurrent writers queue on the busy timeout.

use serde::Serialize;
use sqlx::{FromRow, SqliteConnection, SqlitePool};

use crate::db::DbError;
use crate::models::{CommentContent, PostId};

/// Comment record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub content: String,
}

/// Insert a comment bound to `post` on an open connection or transaction.
///
/// The insert is guarded by the post's existence, so a missing post inserts
/// nothing and reports `NotFound` instead of leaving an orphan.
pub(crate) async fn insert(
    conn: &mut SqliteConnection,
    post: PostId,
    content: &CommentContent,
) -> Result<Comment, DbError> {
    let comment: Option<Comment> = sqlx::query_as(
        r#"
        INSERT INTO comments (post_id, content)
        SELECT id, ? FROM posts WHERE id = ?
        RETURNING id, post_id, content
        "#,
    )
    .bind(content.as_str())
    .bind(post.get())
    .fetch_optional(&mut *conn)
    .await?;

    comment.ok_or_else(|| DbError::not_found("post", post))
}

/// Comments belonging to one post, oldest first.
pub(crate) async fn select_for_post(
    conn: &mut SqliteConnection,
    post: PostId,
) -> Result<Vec<Comment>, DbError> {
    let comments = sqlx::query_as(
        r#"
        SELECT id, post_id, content
        FROM comments
        WHERE post_id = ?
        ORDER BY id ASC
        "#,
    )
    .bind(post.get())
    .fetch_all(&mut *conn)
    .await?;

    Ok(comments)
}

/// Comment repository
pub struct CommentRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CommentRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Add a comment to a post, given either the post or its id.
    pub async fn create(
        &self,
        post: impl Into<PostId>,
        content: CommentContent,
    ) -> Result<Comment, DbError> {
        let post = post.into();

        let mut tx = self.pool.begin().await?;
        let comment = insert(&mut tx, post, &content).await?;
        tx.commit().await?;

        tracing::debug!(comment_id = comment.id, post_id = %post, "added comment");
        Ok(comment)
    }

    /// All comments across all posts, newest first.
    pub async fn list(&self) -> Result<Vec<Comment>, DbError> {
        let mut tx = self.pool.begin().await?;

        let comments = sqlx::query_as("SELECT id, post_id, content FROM comments ORDER BY id DESC")
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(comments)
    }

    /// Comments of a single post, oldest first.
    pub async fn list_for_post(&self, post: impl Into<PostId>) -> Result<Vec<Comment>, DbError> {
        let mut tx = self.pool.begin().await?;
        let comments = select_for_post(&mut tx, post.into()).await?;
        tx.commit().await?;
        Ok(comments)
    }

    /// Delete a comment and return the id of the post it belonged to.
    ///
    /// Fails with `NotFound` if the comment does not exist, or if its owning
    /// post cannot be resolved; in the latter case the delete is rolled back.
    pub async fn delete(&self, id: i64) -> Result<PostId, DbError> {
        let mut tx = self.pool.begin().await?;

        let post_id: i64 = sqlx::query_scalar("DELETE FROM comments WHERE id = ? RETURNING post_id")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| DbError::not_found("comment", id))?;

        let owner_exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM posts WHERE id = ?)")
            .bind(post_id)
            .fetch_one(&mut *tx)
            .await?;

        if !owner_exists {
            return Err(DbError::not_found("post", post_id));
        }

        tx.commit().await?;

        tracing::debug!(comment_id = id, post_id, "deleted comment");
        Ok(PostId::new(post_id))
    }

    /// Number of stored comments.
    pub async fn count(&self) -> Result<i64, DbError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comments")
            .fetch_one(self.pool)
            .await?;
        Ok(total)
    }
}
