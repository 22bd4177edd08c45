//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Borrows the pool; opens one transaction per operation
//! - Explicit commit on success, rollback on drop otherwise
//! - Lookups that miss return `DbError::NotFound`

pub mod comments;
pub mod posts;

pub use comments::{Comment, CommentRepo};
pub use posts::{Post, PostRepo};
