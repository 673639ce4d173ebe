//! Error types for `stacks-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid seed dataset: {0}")]
  SeedData(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
