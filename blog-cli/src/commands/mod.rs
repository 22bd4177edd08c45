//! Command implementations for the blog CLI

pub mod init;
pub mod serve;

// Re-export main dispatcher functions for flat access from main.rs
pub use init::run_init;
pub use serve::run_serve;
