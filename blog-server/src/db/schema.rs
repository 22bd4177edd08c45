//! Schema creation and destructive reset

use sqlx::SqlitePool;

use super::DbError;

const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS posts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL CHECK (length(title) <= 100),
    content TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS comments (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    post_id INTEGER NOT NULL REFERENCES posts(id),
    content TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_comments_post ON comments(post_id);
"#;

// Children first so the foreign key never dangles.
const DROP_TABLES: &str = r#"
DROP TABLE IF EXISTS comments;
DROP TABLE IF EXISTS posts;
"#;

/// Create tables and indexes if they do not exist yet.
pub async fn create(pool: &SqlitePool) -> Result<(), DbError> {
    tracing::debug!("ensuring schema");
    sqlx::raw_sql(CREATE_TABLES).execute(pool).await?;
    Ok(())
}

/// Drop every table and recreate the schema, in one transaction.
///
/// Destroys all posts and comments.
pub async fn reset(pool: &SqlitePool) -> Result<(), DbError> {
    tracing::warn!("dropping and recreating all tables");

    let mut tx = pool.begin().await?;
    sqlx::raw_sql(DROP_TABLES).execute(&mut *tx).await?;
    sqlx::raw_sql(CREATE_TABLES).execute(&mut *tx).await?;
    tx.commit().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_database;

    async fn table_names(pool: &SqlitePool) -> Vec<String> {
        sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )
        .fetch_all(pool)
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn create_is_idempotent() {
        let (_dir, db) = test_database().await;

        create(db.pool()).await.unwrap();
        create(db.pool()).await.unwrap();

        assert_eq!(table_names(db.pool()).await, vec!["comments", "posts"]);
    }

    #[tokio::test]
    async fn reset_discards_rows_and_restarts_ids() {
        let (_dir, db) = test_database().await;

        sqlx::query("INSERT INTO posts (title, content) VALUES ('a', 'b'), ('c', 'd')")
            .execute(db.pool())
            .await
            .unwrap();

        reset(db.pool()).await.unwrap();
        assert_eq!(db.posts().count().await.unwrap(), 0);

        let id: i64 = sqlx::query_scalar("INSERT INTO posts (title, content) VALUES ('e', 'f') RETURNING id")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(id, 1);
    }

    #[tokio::test]
    async fn title_check_is_enforced() {
        let (_dir, db) = test_database().await;

        let err = sqlx::query("INSERT INTO posts (title, content) VALUES (?, 'x')")
            .bind("t".repeat(101))
            .execute(db.pool())
            .await
            .map_err(DbError::from)
            .unwrap_err();

        assert!(matches!(err, DbError::Integrity { .. }));
    }

    #[tokio::test]
    async fn orphan_comment_is_an_integrity_violation() {
        let (_dir, db) = test_database().await;

        let err = sqlx::query("INSERT INTO comments (post_id, content) VALUES (999, 'orphan')")
            .execute(db.pool())
            .await
            .map_err(DbError::from)
            .unwrap_err();

        assert!(matches!(err, DbError::Integrity { .. }));
        assert_eq!(db.comments().count().await.unwrap(), 0);
    }
}
