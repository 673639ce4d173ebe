//! Web front end for the Stacks book locator.
//!
//! Exposes an axum [`Router`] serving HTML pages backed by any
//! [`BookStore`].
//!
//! | Route | Method | Notes |
//! |-------|--------|-------|
//! | `/` | `GET` | Home page; `?notice=empty-query` shows a warning |
//! | `/search` | `GET`, `POST` | `query` parameter or form field |
//! | `/book/{id}` | `GET` | 404 page if absent |

pub mod config;
pub mod error;
pub mod handlers;
pub mod render;

pub use error::{Error, Result};

use std::sync::Arc;

use axum::{Router, routing::get};
use stacks_core::store::BookStore;
use tower_http::trace::TraceLayer;

use handlers::{book, index, search};

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: BookStore> {
  pub store: Arc<S>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the axum [`Router`] for the site.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: BookStore + Clone + 'static,
{
  Router::new()
    .route("/", get(index::handler))
    .route(
      "/search",
      get(search::get_handler::<S>).post(search::post_handler::<S>),
    )
    .route("/book/{id}", get(book::handler::<S>))
    .fallback(handlers::not_found)
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use stacks_core::{
    book::{Book, NewBook},
    query::BookQuery,
    seed::sample_books,
  };
  use stacks_store_sqlite::SqliteStore;
  use tower::ServiceExt as _;

  async fn make_state() -> AppState<SqliteStore> {
    let store = SqliteStore::open_in_memory().await.unwrap();
    store.seed(sample_books().unwrap()).await.unwrap();
    AppState { store: Arc::new(store) }
  }

  async fn oneshot_raw<S>(
    state:   AppState<S>,
    method:  &str,
    uri:     &str,
    headers: Vec<(header::HeaderName, &str)>,
    body:    &str,
  ) -> axum::response::Response
  where
    S: BookStore + Clone + 'static,
  {
    let mut builder = Request::builder().method(method).uri(uri);
    for (k, v) in headers {
      builder = builder.header(k, v);
    }
    let req = builder.body(Body::from(body.to_string())).unwrap();
    router(state).oneshot(req).await.unwrap()
  }

  async fn get_page(state: AppState<SqliteStore>, uri: &str) -> axum::response::Response {
    oneshot_raw(state, "GET", uri, vec![], "").await
  }

  async fn body_text(resp: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
  }

  fn location(resp: &axum::response::Response) -> &str {
    resp.headers().get(header::LOCATION).unwrap().to_str().unwrap()
  }

  async fn id_of(state: &AppState<SqliteStore>, isbn: &str) -> i64 {
    let hits = state.store.search(&BookQuery::new(isbn).unwrap()).await.unwrap();
    assert_eq!(hits.len(), 1);
    hits[0].id
  }

  // ── Index ───────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn index_renders_search_form() {
    let resp = get_page(make_state().await, "/").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains(r#"action="/search""#), "{html}");
    assert!(!html.contains("alert-warning"));
  }

  #[tokio::test]
  async fn index_shows_empty_query_warning() {
    let resp = get_page(make_state().await, "/?notice=empty-query").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("Please enter a search term."));
  }

  #[tokio::test]
  async fn index_ignores_unknown_notice() {
    let resp = get_page(make_state().await, "/?notice=%3Cb%3Ehi%3C%2Fb%3E").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(!html.contains("alert-warning"));
    assert!(!html.contains("<b>hi</b>"));
  }

  // ── Search ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn search_by_author_lists_both_tolkien_books() {
    let resp = get_page(make_state().await, "/search?query=Tolkien").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains(r#"Found 2 result(s) for "Tolkien""#), "{html}");
    assert!(html.contains("The Hobbit"));
    assert!(html.contains("The Lord of the Rings"));
  }

  #[tokio::test]
  async fn search_by_isbn_lists_one_book() {
    let resp = get_page(make_state().await, "/search?query=9780061120084").await;
    let html = body_text(resp).await;
    assert!(html.contains("Found 1 result(s)"), "{html}");
    assert!(html.contains("To Kill a Mockingbird"));
    assert!(html.contains("Shelf A1, Column 1, Row Middle"));
  }

  #[tokio::test]
  async fn search_without_matches_is_not_an_error() {
    let resp = get_page(make_state().await, "/search?query=xyzzy").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("No books found!"));
  }

  #[tokio::test]
  async fn blank_search_redirects_home_with_notice() {
    for uri in ["/search", "/search?query=", "/search?query=%20%20%09"] {
      let resp = get_page(make_state().await, uri).await;
      assert_eq!(resp.status(), StatusCode::SEE_OTHER, "{uri}");
      assert_eq!(location(&resp), "/?notice=empty-query", "{uri}");
    }
  }

  #[tokio::test]
  async fn post_search_reads_form_field() {
    let resp = oneshot_raw(
      make_state().await,
      "POST",
      "/search",
      vec![(header::CONTENT_TYPE, "application/x-www-form-urlencoded")],
      "query=orwell",
    ).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("1984"));
    assert!(html.contains("Animal Farm"));
  }

  #[tokio::test]
  async fn blank_post_search_redirects_home() {
    let resp = oneshot_raw(
      make_state().await,
      "POST",
      "/search",
      vec![(header::CONTENT_TYPE, "application/x-www-form-urlencoded")],
      "query=+",
    ).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/?notice=empty-query");
  }

  // ── Detail ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn book_page_shows_location_and_status() {
    let state = make_state().await;
    let id    = id_of(&state, "9780743273565").await;

    let resp = get_page(state, &format!("/book/{id}")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("The Great Gatsby"));
    assert!(html.contains("Shelf A1, Column 3, Row Bottom"));
    assert!(html.contains(">Issued</span>"));
  }

  #[tokio::test]
  async fn book_page_is_stable_across_requests() {
    let state = make_state().await;
    let id    = id_of(&state, "9780140455113").await;

    let first  = body_text(get_page(state.clone(), &format!("/book/{id}")).await).await;
    let second = body_text(get_page(state, &format!("/book/{id}")).await).await;
    assert_eq!(first, second);
    assert!(first.contains("380 BCE"));
  }

  #[tokio::test]
  async fn missing_book_returns_404_page() {
    let resp = get_page(make_state().await, "/book/999999").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let html = body_text(resp).await;
    assert!(html.contains("Page not found"));
    assert!(html.contains(r#"href="/""#));
  }

  #[tokio::test]
  async fn non_numeric_book_id_returns_404() {
    let resp = get_page(make_state().await, "/book/not-a-number").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }

  #[tokio::test]
  async fn unknown_path_returns_404_page() {
    let resp = get_page(make_state().await, "/shelves/A1").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_text(resp).await.contains("Page not found"));
  }

  // ── Store failures ──────────────────────────────────────────────────────────

  #[derive(Clone)]
  struct UnreachableStore;

  fn unreachable() -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "store unreachable")
  }

  impl BookStore for UnreachableStore {
    type Error = std::io::Error;

    async fn seed(&self, _books: Vec<NewBook>) -> Result<usize, std::io::Error> {
      Err(unreachable())
    }

    async fn count_books(&self) -> Result<u64, std::io::Error> { Err(unreachable()) }

    async fn get_book(&self, _id: i64) -> Result<Option<Book>, std::io::Error> {
      Err(unreachable())
    }

    async fn search(&self, _query: &BookQuery) -> Result<Vec<Book>, std::io::Error> {
      Err(unreachable())
    }
  }

  #[tokio::test]
  async fn store_failure_renders_500_page() {
    let state = AppState { store: Arc::new(UnreachableStore) };

    let resp = oneshot_raw(state.clone(), "GET", "/search?query=dune", vec![], "").await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let html = body_text(resp).await;
    assert!(html.contains("Internal server error"));
    assert!(!html.contains("store unreachable"));

    let resp = oneshot_raw(state, "GET", "/book/1", vec![], "").await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
  }

  #[tokio::test]
  async fn blank_search_never_touches_the_store() {
    let state = AppState { store: Arc::new(UnreachableStore) };
    let resp  = oneshot_raw(state, "GET", "/search?query=", vec![], "").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
  }
}
