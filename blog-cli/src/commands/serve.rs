//! HTTP server command
//!
//! Opens the store, optionally resets it to the demo data, then serves pages
//! until Ctrl+C or SIGTERM.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use blog_server::db::{self, Database};
use blog_server::http::{run_server, ServerConfig};

use crate::config::BlogConfig;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:5001)
    #[arg(long, short = 'b', env = "BLOG_BIND")]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL, e.g. sqlite:///var/lib/quillblog/blog.db
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Drop all tables and insert the demo posts before serving (destroys data)
    #[arg(long)]
    pub reset: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, config: &BlogConfig) -> Result<()> {
    let database_url = config.database_url(args.database_url.as_deref());
    let server = ServerConfig {
        bind_addr: config.bind_addr(args.bind),
        cors_permissive: args.cors_permissive || config.server.cors_permissive,
    };

    let db = Database::connect(&database_url, config.max_connections())
        .await
        .with_context(|| format!("Failed to open database at {}", database_url))?;

    if args.reset || config.database.reset_on_start {
        let summary = db::initialize(&db)
            .await
            .context("Failed to reset database")?;
        tracing::info!(
            posts = summary.posts,
            comments = summary.comments,
            "database reset to demo data"
        );
    }

    tracing::info!("Starting blog server on {}", server.bind_addr);

    // Run server (blocks until shutdown)
    run_server(db, server).await.context("Server error")?;

    Ok(())
}
