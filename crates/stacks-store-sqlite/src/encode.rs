//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings. Statuses are stored as their
//! lowercase names; unrecognised values survive the round trip untouched.

use chrono::{DateTime, Utc};
use stacks_core::book::{Book, BookStatus};

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Column list matching the field order of [`RawBook::from_row`].
pub const BOOK_COLUMNS: &str = "id, title, author, isbn, publication_year, publisher,
   shelf, location_column, location_row, status, date_added, category, description";

/// Raw values read directly from a `books` row.
pub struct RawBook {
  pub id:               i64,
  pub title:            String,
  pub author:           String,
  pub isbn:             String,
  pub publication_year: Option<i32>,
  pub publisher:        Option<String>,
  pub shelf:            String,
  pub column:           String,
  pub row:              String,
  pub status:           String,
  pub date_added:       String,
  pub category:         Option<String>,
  pub description:      Option<String>,
}

impl RawBook {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:               row.get(0)?,
      title:            row.get(1)?,
      author:           row.get(2)?,
      isbn:             row.get(3)?,
      publication_year: row.get(4)?,
      publisher:        row.get(5)?,
      shelf:            row.get(6)?,
      column:           row.get(7)?,
      row:              row.get(8)?,
      status:           row.get(9)?,
      date_added:       row.get(10)?,
      category:         row.get(11)?,
      description:      row.get(12)?,
    })
  }

  pub fn into_book(self) -> Result<Book> {
    Ok(Book {
      id:               self.id,
      title:            self.title,
      author:           self.author,
      isbn:             self.isbn,
      publication_year: self.publication_year,
      publisher:        self.publisher,
      shelf:            self.shelf,
      column:           self.column,
      row:              self.row,
      status:           BookStatus::parse(&self.status),
      date_added:       decode_dt(&self.date_added)?,
      category:         self.category,
      description:      self.description,
    })
  }
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone as _;

  use super::*;

  #[test]
  fn datetime_roundtrip() {
    let dt = Utc.with_ymd_and_hms(2023, 11, 5, 8, 30, 15).unwrap();
    assert_eq!(decode_dt(&encode_dt(dt)).unwrap(), dt);
  }

  #[test]
  fn bad_datetime_is_a_parse_error() {
    assert!(matches!(decode_dt("yesterday"), Err(Error::DateParse(_))));
  }
}
