//! Free-text search over title, author, and ISBN.
//!
//! A book matches when the query is a case-insensitive substring of at least
//! one of the three fields. Case folding lowercases each character on its own,
//! applied identically to the needle and to each field, so backends that
//! pre-fold their columns with [`fold`] agree with [`Book::matches`].

use crate::book::Book;

/// Fold a string for case-insensitive comparison.
///
/// Characters are lowercased independently of their neighbours, so
/// `fold(a + b) == fold(a) + fold(b)` and every substring of a field folds to
/// a substring of the folded field. `str::to_lowercase` does not hold that
/// property: it maps a word-final `Σ` to `ς`.
pub fn fold(s: &str) -> String { s.chars().flat_map(char::to_lowercase).collect() }

/// A validated, non-empty search needle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookQuery {
  text:   String,
  folded: String,
}

impl BookQuery {
  /// Build a query from raw user input. Returns `None` when the input is
  /// empty or whitespace-only; callers are expected to turn that into a
  /// user-facing warning rather than running a search.
  pub fn new(raw: &str) -> Option<Self> {
    let text = raw.trim();
    if text.is_empty() {
      return None;
    }
    Some(Self { text: text.to_owned(), folded: fold(text) })
  }

  /// The trimmed query as the user typed it.
  pub fn text(&self) -> &str { &self.text }

  /// The case-folded needle.
  pub fn folded(&self) -> &str { &self.folded }

  fn hits(&self, field: &str) -> bool { fold(field).contains(&self.folded) }
}

impl Book {
  pub fn matches(&self, query: &BookQuery) -> bool {
    query.hits(&self.title) || query.hits(&self.author) || query.hits(&self.isbn)
  }
}
