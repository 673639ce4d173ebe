//! `GET /book/{id}`: detail page for a single book.

use axum::{
  extract::{Path, State},
  http::StatusCode,
  response::Response,
};
use stacks_core::store::BookStore;

use crate::{
  AppState,
  error::{Error, Result},
  render::{BookPage, respond},
};

pub async fn handler<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<String>,
) -> Result<Response>
where
  S: BookStore + Clone + 'static,
{
  // A non-numeric id can never name a book.
  let id: i64 = id.parse().map_err(|_| Error::NotFound)?;

  let book = state
    .store
    .get_book(id)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?
    .ok_or(Error::NotFound)?;

  Ok(respond(StatusCode::OK, &BookPage { book: &book }))
}
