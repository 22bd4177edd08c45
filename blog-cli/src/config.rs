//! Configuration: TOML file, `.env` files, environment and flags.
//!
//! Precedence, highest first: command-line flags, environment variables
//! (including those loaded from `.env`), `~/.quillblog/config.toml`, defaults.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use blog_server::db::DEFAULT_MAX_CONNECTIONS;
use blog_server::http::ServerConfig;

/// Contents of `config.toml`; every key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BlogConfig {
    pub server: ServerSection,
    pub database: DatabaseSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerSection {
    pub bind: Option<SocketAddr>,
    pub cors_permissive: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseSection {
    pub url: Option<String>,
    pub max_connections: Option<u32>,
    /// Reset to demo data on every `serve` (destroys data)
    pub reset_on_start: bool,
}

impl BlogConfig {
    /// Load config from an explicit path, or from ~/.quillblog/config.toml.
    ///
    /// A missing default file yields the built-in defaults; a missing
    /// explicit file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let (path, required) = match explicit {
            Some(path) => (path.to_path_buf(), true),
            None => (Self::config_path(), false),
        };

        if !path.exists() {
            if required {
                anyhow::bail!("Config not found at {:?}", path);
            }
            return Ok(Self::default());
        }

        Self::from_file(&path)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {:?} (invalid TOML)", path))?;

        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Directory for config, `.env` and the default database: ~/.quillblog
    pub fn home_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".quillblog")
    }

    /// Get config file path: ~/.quillblog/config.toml
    pub fn config_path() -> PathBuf {
        Self::home_dir().join("config.toml")
    }

    /// Default store: sqlite://~/.quillblog/blog.db
    pub fn default_database_url() -> String {
        format!("sqlite://{}", Self::home_dir().join("blog.db").display())
    }

    /// Database URL from flag/env, then file, then default.
    pub fn database_url(&self, from_args: Option<&str>) -> String {
        from_args
            .map(str::to_owned)
            .or_else(|| self.database.url.clone())
            .unwrap_or_else(Self::default_database_url)
    }

    pub fn max_connections(&self) -> u32 {
        self.database
            .max_connections
            .unwrap_or(DEFAULT_MAX_CONNECTIONS)
    }

    /// Bind address from flag/env, then file, then default.
    pub fn bind_addr(&self, from_args: Option<SocketAddr>) -> SocketAddr {
        from_args
            .or(self.server.bind)
            .unwrap_or_else(|| ServerConfig::default().bind_addr)
    }
}

/// Load `.env` from the working directory, then ~/.quillblog/.env.
///
/// dotenvy never overwrites variables that are already set, so the process
/// environment always wins and the working directory beats the home file.
pub fn load_env_files() {
    let _ = dotenvy::dotenv();
    let _ = dotenvy::from_path(BlogConfig::home_dir().join(".env"));
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show config file path
    Path,
    /// Print the loaded configuration as TOML
    Show,
}

pub fn run_config(args: ConfigArgs, config: &BlogConfig) -> Result<()> {
    match args.command {
        ConfigCommands::Path => {
            println!("{}", BlogConfig::config_path().display());
        }
        ConfigCommands::Show => {
            let toml_str =
                toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;
            println!("{}", toml_str);
        }
    }
    Ok(())
}
