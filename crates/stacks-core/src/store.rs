//! The `BookStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `stacks-store-sqlite`).
//! The web layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::{
  book::{Book, NewBook},
  query::BookQuery,
};

/// Abstraction over a book catalog backend.
///
/// The catalog is read-only once seeded: there is no update or delete
/// operation, and [`BookStore::seed`] only ever inserts into an empty store.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait BookStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Insert `books` if, and only if, the store holds no records.
  ///
  /// The emptiness check and the inserts are atomic with respect to other
  /// seeders, and an `isbn` that already exists is skipped rather than
  /// duplicated. Returns the number of records inserted; `0` when the store
  /// was already populated.
  fn seed(
    &self,
    books: Vec<NewBook>,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;

  /// Number of records in the store.
  fn count_books(&self) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;

  /// Retrieve a book by id. Returns `None` if not found.
  fn get_book(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Book>, Self::Error>> + Send + '_;

  /// Every book whose title, author, or isbn contains `query`, ignoring case.
  /// Result order is backend-defined.
  fn search<'a>(
    &'a self,
    query: &'a BookQuery,
  ) -> impl Future<Output = Result<Vec<Book>, Self::Error>> + Send + 'a;
}
