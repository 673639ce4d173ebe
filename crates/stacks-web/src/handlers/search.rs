//! `GET /search?query=...` and `POST /search` (form field `query`).
//!
//! A missing or blank query never reaches the store: the client is sent
//! back to the home page with a warning instead.

use axum::{
  Form,
  extract::{Query, State},
  http::StatusCode,
  response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use stacks_core::{query::BookQuery, store::BookStore};

use crate::{
  AppState,
  error::{Error, Result},
  render::{Notice, ResultsPage, respond},
};

#[derive(Debug, Deserialize, Default)]
pub struct SearchParams {
  pub query: Option<String>,
}

pub async fn get_handler<S>(
  State(state): State<AppState<S>>,
  Query(params): Query<SearchParams>,
) -> Result<Response>
where
  S: BookStore + Clone + 'static,
{
  run(&state, params).await
}

pub async fn post_handler<S>(
  State(state): State<AppState<S>>,
  Form(params): Form<SearchParams>,
) -> Result<Response>
where
  S: BookStore + Clone + 'static,
{
  run(&state, params).await
}

async fn run<S: BookStore>(state: &AppState<S>, params: SearchParams) -> Result<Response> {
  let Some(query) = params.query.as_deref().and_then(BookQuery::new) else {
    tracing::debug!("blank search query; redirecting home");
    let target = format!("/?notice={}", Notice::EmptyQuery.param());
    return Ok(Redirect::to(&target).into_response());
  };

  let books = state
    .store
    .search(&query)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;

  tracing::debug!(query = query.text(), hits = books.len(), "search");
  Ok(respond(StatusCode::OK, &ResultsPage { query: query.text(), books: &books }))
}
