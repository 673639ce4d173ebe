//! Book records and the display rules derived from them.
//!
//! A book's stored fields are never rewritten for presentation; the
//! human-readable strings (location, status label, publication year) are
//! computed on read.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::EnumString;

// ─── Status ──────────────────────────────────────────────────────────────────

/// Lifecycle state of a physical copy.
///
/// Values read back from the store that fall outside the four canonical
/// states are kept verbatim in [`BookStatus::Unknown`] instead of being
/// rejected, and are labelled "Unknown" for display.
#[derive(Debug, Clone, PartialEq, Eq, Default, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(from = "String", into = "String")]
pub enum BookStatus {
  #[default]
  Available,
  Issued,
  Reserved,
  Missing,
  #[strum(default)]
  Unknown(String),
}

impl BookStatus {
  /// The four states a well-formed record can be in.
  pub const CANONICAL: [BookStatus; 4] = [
    BookStatus::Available,
    BookStatus::Issued,
    BookStatus::Reserved,
    BookStatus::Missing,
  ];

  /// Parse a stored status string. Never fails: anything that is not a
  /// canonical lowercase name lands in [`BookStatus::Unknown`].
  pub fn parse(raw: &str) -> Self {
    Self::from_str(raw).unwrap_or_else(|_| Self::Unknown(raw.to_owned()))
  }

  /// The value persisted in the `status` column.
  pub fn as_str(&self) -> &str {
    match self {
      Self::Available => "available",
      Self::Issued => "issued",
      Self::Reserved => "reserved",
      Self::Missing => "missing",
      Self::Unknown(raw) => raw.as_str(),
    }
  }

  /// Capitalised label shown to readers.
  pub fn label(&self) -> &'static str {
    match self {
      Self::Available => "Available",
      Self::Issued => "Issued",
      Self::Reserved => "Reserved",
      Self::Missing => "Missing",
      Self::Unknown(_) => "Unknown",
    }
  }

  pub fn is_canonical(&self) -> bool { !matches!(self, Self::Unknown(_)) }
}

impl From<String> for BookStatus {
  fn from(raw: String) -> Self { Self::parse(&raw) }
}

impl From<BookStatus> for String {
  fn from(status: BookStatus) -> Self { status.as_str().to_owned() }
}

impl fmt::Display for BookStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// ─── Records ─────────────────────────────────────────────────────────────────

/// A persisted book record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
  pub id:               i64,
  pub title:            String,
  pub author:           String,
  pub isbn:             String,
  /// Negative values are BCE years.
  pub publication_year: Option<i32>,
  pub publisher:        Option<String>,
  pub shelf:            String,
  pub column:           String,
  pub row:              String,
  pub status:           BookStatus,
  pub date_added:       DateTime<Utc>,
  pub category:         Option<String>,
  pub description:      Option<String>,
}

/// Insert payload for a book. `id` and `date_added` are assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBook {
  pub title:            String,
  pub author:           String,
  pub isbn:             String,
  #[serde(default)]
  pub publication_year: Option<i32>,
  #[serde(default)]
  pub publisher:        Option<String>,
  pub shelf:            String,
  pub column:           String,
  pub row:              String,
  #[serde(default)]
  pub status:           BookStatus,
  #[serde(default)]
  pub category:         Option<String>,
  #[serde(default)]
  pub description:      Option<String>,
}

impl Book {
  /// `"Shelf {shelf}, Column {column}, Row {row}"`, with no validation of
  /// the parts.
  pub fn location_display(&self) -> String {
    format!("Shelf {}, Column {}, Row {}", self.shelf, self.column, self.row)
  }

  pub fn status_display(&self) -> &'static str { self.status.label() }

  pub fn publication_year_display(&self) -> String {
    match self.publication_year {
      Some(year) if year < 0 => format!("{} BCE", year.unsigned_abs()),
      Some(year) => year.to_string(),
      None => "Unknown".to_owned(),
    }
  }
}
