//! blog-server: posts and comments over HTTP
//!
//! A small blog backed by a single SQLite file: server-rendered pages for
//! posts and their comments, with comments added and deleted through forms.

pub mod db;
pub mod http;
pub mod models;
pub mod render;

#[cfg(test)]
pub(crate) mod test_utils;

pub use db::{Database, DbError};
pub use http::{run_server, ServerConfig, ServerError};
