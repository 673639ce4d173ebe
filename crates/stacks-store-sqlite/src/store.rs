//! [`SqliteStore`], the SQLite implementation of [`BookStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::{OptionalExtension as _, TransactionBehavior};

use stacks_core::{
  book::{Book, NewBook},
  query::{BookQuery, fold},
  store::BookStore,
};

use crate::{
  Result,
  encode::{BOOK_COLUMNS, RawBook, encode_dt},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A book catalog backed by a single SQLite file.
///
/// Clones share one background connection thread.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an empty in-memory store.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Insert without the empty-store check that [`BookStore::seed`] applies.
  #[cfg(test)]
  pub(crate) async fn insert_unchecked(&self, books: Vec<NewBook>) -> Result<usize> {
    let date_added_str = encode_dt(Utc::now());
    let inserted = self
      .conn
      .call(move |conn| Ok(insert_books(conn, &books, &date_added_str)?))
      .await?;
    Ok(inserted)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── Inserts ─────────────────────────────────────────────────────────────────

/// Insert `books`, skipping any whose `isbn` is already stored. Returns the
/// number of rows written. Performs no emptiness check of its own.
fn insert_books(
  conn: &rusqlite::Connection,
  books: &[NewBook],
  date_added: &str,
) -> rusqlite::Result<usize> {
  let mut stmt = conn.prepare(
    "INSERT INTO books (
       title, author, isbn, publication_year, publisher,
       shelf, location_column, location_row, status, date_added,
       category, description, title_folded, author_folded, isbn_folded
     ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)
     ON CONFLICT (isbn) DO NOTHING",
  )?;

  let mut inserted = 0;
  for book in books {
    inserted += stmt.execute(rusqlite::params![
      book.title,
      book.author,
      book.isbn,
      book.publication_year,
      book.publisher,
      book.shelf,
      book.column,
      book.row,
      book.status.as_str(),
      date_added,
      book.category,
      book.description,
      fold(&book.title),
      fold(&book.author),
      fold(&book.isbn),
    ])?;
  }
  Ok(inserted)
}

// ─── BookStore impl ──────────────────────────────────────────────────────────

impl BookStore for SqliteStore {
  type Error = crate::Error;

  async fn seed(&self, books: Vec<NewBook>) -> Result<usize> {
    let date_added_str = encode_dt(Utc::now());

    let inserted = self
      .conn
      .call(move |conn| {
        // IMMEDIATE takes the write lock before the count, so two processes
        // seeding the same file cannot both observe an empty table.
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let existing: i64 =
          tx.query_row("SELECT COUNT(*) FROM books", [], |r| r.get(0))?;
        if existing > 0 {
          return Ok(0);
        }

        let inserted = insert_books(&tx, &books, &date_added_str)?;
        tx.commit()?;
        Ok(inserted)
      })
      .await?;

    Ok(inserted)
  }

  async fn count_books(&self) -> Result<u64> {
    let count: i64 = self
      .conn
      .call(|conn| {
        Ok(conn.query_row("SELECT COUNT(*) FROM books", [], |r| r.get(0))?)
      })
      .await?;
    Ok(count.max(0) as u64)
  }

  async fn get_book(&self, id: i64) -> Result<Option<Book>> {
    let raw: Option<RawBook> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {BOOK_COLUMNS} FROM books WHERE id = ?1"),
            rusqlite::params![id],
            RawBook::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawBook::into_book).transpose()
  }

  async fn search(&self, query: &BookQuery) -> Result<Vec<Book>> {
    // `instr` over pre-folded columns: a literal, case-insensitive substring
    // test with no LIKE wildcards to escape.
    let needle = query.folded().to_owned();

    let raws: Vec<RawBook> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {BOOK_COLUMNS}
           FROM books
           WHERE instr(title_folded,  ?1) > 0
              OR instr(author_folded, ?1) > 0
              OR instr(isbn_folded,   ?1) > 0
           ORDER BY id"
        ))?;

        let rows = stmt
          .query_map(rusqlite::params![needle], RawBook::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawBook::into_book).collect()
  }
}
