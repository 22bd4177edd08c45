//! HTTP server layer
//!
//! Axum server with:
//! - Server-rendered pages for posts and comments
//! - Form-based comment creation and deletion
//! - Request tracing and graceful shutdown
//! - JSON error responses

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
