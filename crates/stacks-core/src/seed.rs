//! The canonical sample catalog loaded into an empty store on first run.

use crate::{Result, book::NewBook};

const SAMPLE_BOOKS_JSON: &str = include_str!("../seed/books.json");

/// Parse the embedded sample dataset.
pub fn sample_books() -> Result<Vec<NewBook>> {
  Ok(serde_json::from_str(SAMPLE_BOOKS_JSON)?)
}
