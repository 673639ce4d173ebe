//! `GET /`: the home page with the search box.

use axum::{extract::Query, http::StatusCode, response::Response};
use serde::Deserialize;

use crate::render::{IndexPage, Notice, respond};

#[derive(Debug, Deserialize, Default)]
pub struct IndexParams {
  /// Set by redirects that need to show a warning, e.g. `empty-query`.
  pub notice: Option<String>,
}

pub async fn handler(Query(params): Query<IndexParams>) -> Response {
  let notice = params.notice.as_deref().and_then(Notice::from_param);
  respond(StatusCode::OK, &IndexPage { notice })
}
