//! Demo bootstrap: wipe the store and insert a fixed set of posts and comments.

use super::repos::{comments, posts};
use super::{schema, Database, DbError};
use crate::models::{CommentContent, PostId, PostTitle};

/// Row counts after seeding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub posts: usize,
    pub comments: usize,
}

/// Drop and recreate every table, then insert the seed data.
///
/// Destructive: all existing posts and comments are lost. Callers must gate
/// this behind an explicit request.
pub async fn initialize(db: &Database) -> Result<SeedSummary, DbError> {
    schema::reset(db.pool()).await?;

    let mut tx = db.pool().begin().await?;

    let first = posts::insert(
        &mut tx,
        &PostTitle::new("Post The First")?,
        "Content for the first post",
    )
    .await?;
    let second = posts::insert(
        &mut tx,
        &PostTitle::new("Post The Second")?,
        "Content for the Second post",
    )
    .await?;
    posts::insert(
        &mut tx,
        &PostTitle::new("Post The Third")?,
        "Content for the third post",
    )
    .await?;

    // Two comments attach through the loaded post, two through a bare id.
    let seeded = [
        (PostId::from(&first), "Comment for the first post"),
        (PostId::from(&second), "Comment for the second post"),
        (PostId::new(2), "Another comment for the second post"),
        (PostId::new(1), "Another comment for the first post"),
    ];

    for (post, text) in seeded {
        comments::insert(&mut tx, post, &CommentContent::new(text)?).await?;
    }

    tx.commit().await?;

    let summary = SeedSummary {
        posts: 3,
        comments: seeded.len(),
    };
    tracing::info!(posts = summary.posts, comments = summary.comments, "seed data inserted");
    Ok(summary)
}
