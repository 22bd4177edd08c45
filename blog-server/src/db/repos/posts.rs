//! Post repository
//!
//! Reads return posts with their comments attached:
//! - list: two queries in one transaction, grouped in memory (no N+1)
//! - get: post row plus its comments, same snapshot

use std::collections::HashMap;

use serde::Serialize;
use sqlx::{FromRow, SqliteConnection, SqlitePool};

use super::comments::{self, Comment};
use crate::db::DbError;
use crate::models::{PostId, PostTitle};

/// Post record with its comments in ascending id order
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[sqlx(skip)]
    pub comments: Vec<Comment>,
}

impl From<&Post> for PostId {
    fn from(post: &Post) -> Self {
        PostId::new(post.id)
    }
}

/// Insert a post on an open connection or transaction.
pub(crate) async fn insert(
    conn: &mut SqliteConnection,
    title: &PostTitle,
    content: &str,
) -> Result<Post, DbError> {
    let post: Post = sqlx::query_as(
        r#"
        INSERT INTO posts (title, content)
        VALUES (?, ?)
        RETURNING id, title, content
        "#,
    )
    .bind(title.as_str())
    .bind(content)
    .fetch_one(&mut *conn)
    .await?;

    Ok(post)
}

/// Post repository
pub struct PostRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> PostRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a post with no comments.
    pub async fn create(&self, title: PostTitle, content: &str) -> Result<Post, DbError> {
        let mut tx = self.pool.begin().await?;
        let post = insert(&mut tx, &title, content).await?;
        tx.commit().await?;

        tracing::debug!(post_id = post.id, "created post");
        Ok(post)
    }

    /// List every post in insertion order, comments attached.
    pub async fn list(&self) -> Result<Vec<Post>, DbError> {
        let mut tx = self.pool.begin().await?;

        let mut posts: Vec<Post> =
            sqlx::query_as("SELECT id, title, content FROM posts ORDER BY id ASC")
                .fetch_all(&mut *tx)
                .await?;

        let all_comments: Vec<Comment> =
            sqlx::query_as("SELECT id, post_id, content FROM comments ORDER BY id ASC")
                .fetch_all(&mut *tx)
                .await?;

        tx.commit().await?;

        let index: HashMap<i64, usize> = posts
            .iter()
            .enumerate()
            .map(|(i, post)| (post.id, i))
            .collect();

        for comment in all_comments {
            if let Some(&i) = index.get(&comment.post_id) {
                posts[i].comments.push(comment);
            }
        }

        Ok(posts)
    }

    /// Get a single post with its comments.
    pub async fn get(&self, id: impl Into<PostId>) -> Result<Post, DbError> {
        let id = id.into();
        let mut tx = self.pool.begin().await?;

        let mut post: Post = sqlx::query_as("SELECT id, title, content FROM posts WHERE id = ?")
            .bind(id.get())
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| DbError::not_found("post", id))?;

        post.comments = comments::select_for_post(&mut tx, id).await?;
        tx.commit().await?;

        Ok(post)
    }

    /// Number of stored posts.
    pub async fn count(&self) -> Result<i64, DbError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts")
            .fetch_one(self.pool)
            .await?;
        Ok(total)
    }
}
