//! Destructive bootstrap: wipe the store and load the demo posts.

use anyhow::{Context, Result};
use clap::Parser;

use blog_server::db::{self, Database};

use crate::config::BlogConfig;

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Database URL, e.g. sqlite:///var/lib/quillblog/blog.db
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

pub async fn run_init(args: InitArgs, config: &BlogConfig) -> Result<()> {
    let database_url = config.database_url(args.database_url.as_deref());

    let db = Database::connect(&database_url, config.max_connections())
        .await
        .with_context(|| format!("Failed to open database at {}", database_url))?;

    let summary = db::initialize(&db)
        .await
        .context("Failed to initialize database")?;
    db.close().await;

    println!(
        "Initialized {} with {} posts and {} comments",
        database_url, summary.posts, summary.comments
    );
    Ok(())
}
