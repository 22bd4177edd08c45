//! blog CLI - serve and bootstrap a small posts-and-comments site
//!
//! Subcommands:
//! - `serve`: run the HTTP server (optionally resetting to demo data first)
//! - `init`: drop all tables and load the demo posts and comments
//! - `config`: inspect the configuration file

use std::path::PathBuf;

use anyhow::Result;
use clap::builder::BoolishValueParser;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

use config::BlogConfig;

#[derive(Parser, Debug)]
#[command(
    name = "blog",
    author,
    version,
    about = "Minimal server-rendered blog with posts and comments",
    long_about = "Serve a small blog backed by SQLite. Posts are listed on the index page, \
                  each post page shows its comments and a form to add one, and /comments/ \
                  lists every comment newest first."
)]
struct Cli {
    /// Path to config file (default: ~/.quillblog/config.toml)
    #[arg(long, global = true, env = "BLOG_CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true, env = "BLOG_DEBUG", value_parser = BoolishValueParser::new())]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(commands::serve::ServeArgs),
    /// Drop all tables and load the demo posts (destroys data)
    Init(commands::init::InitArgs),
    /// Inspect blog configuration (path, show)
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env values must be in place before clap reads env-backed flags
    config::load_env_files();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    let config = BlogConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args, &config).await?,
        Commands::Init(args) => commands::run_init(args, &config).await?,
        Commands::Config(args) => config::run_config(args, &config)?,
    }
    Ok(())
}
