//! Database connection pool management
//!
//! Uses a sqlx SqlitePool over a single file-backed database with explicit
//! connection limits. `Database` is the persistence context handed to every
//! handler; it is cheap to clone and owns nothing but the pool.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous};

use super::repos::{CommentRepo, PostRepo};
use super::{schema, DbError};

/// Default maximum connections for the pool.
/// Kept low for a single-file store.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// How long a connection waits on a locked database before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Create a SQLite connection pool.
///
/// Accepts `sqlite://<path>` URLs. The database file and its parent
/// directory are created when missing; foreign keys are always enforced.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("sqlite:///var/lib/quillblog/blog.db", 5).await?;
/// ```
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool, DbError> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(BUSY_TIMEOUT)
        .synchronous(SqliteSynchronous::Normal)
        .foreign_keys(true);

    if let Some(parent) = options.get_filename().parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Shared persistence context
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open the database and make sure the schema exists.
    ///
    /// Never destroys data; see [`crate::db::initialize`] for the reset path.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, DbError> {
        let pool = create_pool(database_url, max_connections).await?;
        schema::create(&pool).await?;
        tracing::info!(url = %database_url, "database ready");
        Ok(Self { pool })
    }

    /// Wrap an existing pool. The caller is responsible for the schema.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn posts(&self) -> PostRepo<'_> {
        PostRepo::new(&self.pool)
    }

    pub fn comments(&self) -> CommentRepo<'_> {
        CommentRepo::new(&self.pool)
    }

    /// Close every pooled connection, waiting for checked-out ones.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
