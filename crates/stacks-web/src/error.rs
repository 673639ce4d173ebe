//! Error types and axum `IntoResponse` implementation.
//!
//! Every error reaching a client is rendered as the shared HTML error page.

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::render::{ErrorPage, respond};

#[derive(Debug, Error)]
pub enum Error {
  #[error("not found")]
  NotFound,
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
  #[error("configuration error: {0}")]
  Config(#[from] config::ConfigError),
  #[error("unsupported database url {0:?}: only sqlite is available")]
  UnsupportedDatabase(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    match self {
      Error::NotFound => {
        respond(StatusCode::NOT_FOUND, &ErrorPage::not_found())
      }
      other => {
        tracing::error!(error = %other, "request failed");
        respond(StatusCode::INTERNAL_SERVER_ERROR, &ErrorPage::internal())
      }
    }
  }
}
