//! Database layer - connection pool, schema, seed data and repositories
//!
//! # Design Principles
//!
//! - One shared `Database` handle built at startup, cloned into handlers
//! - Every operation runs in its own transaction; dropping it rolls back
//! - Rely on DB constraints (foreign keys, CHECK) and classify violations
//! - Writers issue their first write before any read

pub mod error;
pub mod pool;
pub mod repos;
pub mod schema;
pub mod seed;

pub use error::DbError;
pub use pool::{create_pool, Database, DEFAULT_MAX_CONNECTIONS};
pub use repos::*;
pub use seed::{initialize, SeedSummary};
