//! Shared fixtures for tests: a throwaway database file per test.

use tempfile::TempDir;

use crate::db::{self, Database};

/// Empty database with the schema in place. Keep the `TempDir` alive for the
/// duration of the test.
pub(crate) async fn test_database() -> (TempDir, Database) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let url = format!("sqlite://{}", dir.path().join("blog.db").display());
    let db = Database::connect(&url, db::DEFAULT_MAX_CONNECTIONS)
        .await
        .expect("failed to open test database");
    (dir, db)
}

/// Database holding the seed posts and comments.
pub(crate) async fn seeded_database() -> (TempDir, Database) {
    let (dir, db) = test_database().await;
    db::initialize(&db).await.expect("failed to seed test database");
    (dir, db)
}
