//! Server configuration.
//!
//! Layered, lowest precedence first: built-in defaults, the optional TOML
//! file, `STACKS_*` environment variables, then the platform-provided
//! `DATABASE_URL` and `PORT`.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{Error, Result};

pub const DEFAULT_DATABASE_URL: &str = "sqlite:///library.db";

/// Runtime server configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:         String,
  pub port:         u16,
  pub database_url: String,
}

/// Where the SQLite store lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
  Memory,
  File(PathBuf),
}

impl ServerConfig {
  pub fn load(path: &Path) -> Result<Self> {
    let settings = config::Config::builder()
      .set_default("host", "0.0.0.0")?
      .set_default("port", 5000)?
      .set_default("database_url", DEFAULT_DATABASE_URL)?
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("STACKS"))
      .set_override_option("database_url", std::env::var("DATABASE_URL").ok())?
      .set_override_option("port", std::env::var("PORT").ok())?
      .build()?;

    Ok(settings.try_deserialize()?)
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  pub fn store_location(&self) -> Result<StoreLocation> {
    resolve_database_url(&self.database_url)
  }
}

/// Some hosting platforms hand out `postgres://` URLs; rewrite them to the
/// equivalent `postgresql://` spelling.
pub fn normalize_database_url(url: &str) -> String {
  match url.strip_prefix("postgres://") {
    Some(rest) => format!("postgresql://{rest}"),
    None => url.to_owned(),
  }
}

/// Map a database URL (or bare path) to a SQLite store location.
///
/// `sqlite:///rel.db` is relative to the working directory and
/// `sqlite:////abs.db` is absolute. Non-sqlite schemes are rejected.
pub fn resolve_database_url(url: &str) -> Result<StoreLocation> {
  let url = normalize_database_url(url.trim());

  let path = if let Some(rest) = url.strip_prefix("sqlite://") {
    rest.strip_prefix('/').unwrap_or(rest)
  } else if url.contains("://") {
    return Err(Error::UnsupportedDatabase(url.clone()));
  } else {
    url.as_str()
  };

  if path.is_empty() || path == ":memory:" {
    return Ok(StoreLocation::Memory);
  }
  Ok(StoreLocation::File(expand_tilde(Path::new(path))))
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
