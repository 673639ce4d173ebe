//! HTML presentation layer.
//!
//! Every page goes through [`respond`], which wraps the page body in the
//! shared layout. If writing a page fails, the client gets [`FALLBACK_PAGE`]
//! with the status code the page would have had.

use std::fmt::{self, Write};

use axum::{
  http::StatusCode,
  response::{Html, IntoResponse, Response},
};
use quick_xml::escape::escape;
use stacks_core::book::{Book, BookStatus};

const SITE_NAME: &str = "Library Book Locator";

const BOOTSTRAP_CSS: &str =
  "https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css";

const STYLE: &str = "
.book-card { border: 1px solid rgba(255, 255, 255, 0.1); }
.status-available { color: #28a745; }
.status-issued { color: #dc3545; }
.status-reserved { color: #ffc107; }
.status-missing { color: #6c757d; }
";

/// Served in place of a page whose own `write_body` returned a `fmt::Error`.
/// Writing into a `String` never fails by itself.
pub const FALLBACK_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="UTF-8"><title>Library Book Locator</title></head>
<body>
<h1>Library Book Locator</h1>
<p>Something went wrong while preparing this page.</p>
<p><a href="/">Return to Home</a></p>
</body>
</html>
"#;

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// HTML-escapes the wrapped text when displayed.
struct Esc<'a>(&'a str);

impl fmt::Display for Esc<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&escape(self.0))
  }
}

/// Bootstrap badge colour for a status.
pub fn badge_class(status: &BookStatus) -> &'static str {
  match status {
    BookStatus::Available => "success",
    BookStatus::Issued => "danger",
    BookStatus::Reserved => "warning",
    BookStatus::Missing | BookStatus::Unknown(_) => "secondary",
  }
}

fn write_status_badge(out: &mut dyn Write, book: &Book) -> fmt::Result {
  write!(
    out,
    r#"<span class="badge bg-{class} status-{status}">{label}</span>"#,
    class = badge_class(&book.status),
    status = Esc(book.status.as_str()),
    label = book.status_display(),
  )
}

fn write_search_form(out: &mut dyn Write, value: &str) -> fmt::Result {
  write!(
    out,
    r#"<form action="/search" method="get" class="my-4">
<div class="input-group input-group-lg">
<input type="text" name="query" class="form-control" placeholder="Search by title, author, or ISBN" aria-label="Search" value="{value}">
<button class="btn btn-primary" type="submit">Search</button>
</div>
</form>
"#,
    value = Esc(value),
  )
}

// ─── Pages ───────────────────────────────────────────────────────────────────

/// Something that can be rendered inside the shared layout.
pub trait Page {
  fn title(&self) -> String;
  fn write_body(&self, out: &mut dyn Write) -> fmt::Result;
}

/// One-shot messages shown on the home page after a redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
  EmptyQuery,
}

impl Notice {
  pub fn from_param(param: &str) -> Option<Self> {
    match param {
      "empty-query" => Some(Self::EmptyQuery),
      _ => None,
    }
  }

  pub fn param(self) -> &'static str {
    match self {
      Self::EmptyQuery => "empty-query",
    }
  }

  fn message(self) -> &'static str {
    match self {
      Self::EmptyQuery => "Please enter a search term.",
    }
  }
}

pub struct IndexPage {
  pub notice: Option<Notice>,
}

impl Page for IndexPage {
  fn title(&self) -> String { format!("{SITE_NAME} - Find Your Books") }

  fn write_body(&self, out: &mut dyn Write) -> fmt::Result {
    if let Some(notice) = self.notice {
      write!(
        out,
        r#"<div class="alert alert-warning" role="alert">{}</div>
"#,
        notice.message()
      )?;
    }
    write!(
      out,
      r#"<div class="text-center">
<h1 class="display-4 mb-4">{SITE_NAME}</h1>
<p class="lead">Find the exact shelf location of any book in our library</p>
</div>
"#
    )?;
    write_search_form(out, "")?;
    let features = [
      ("Precise Location", "Find the exact shelf, column, and row for any book"),
      ("Availability Status", "Check if a book is available or currently issued"),
      ("Book Details", "View complete information about each book"),
    ];
    out.write_str(r#"<div class="row g-4 mt-4">"#)?;
    for (heading, text) in features {
      write!(
        out,
        r#"<div class="col-md-4"><div class="card h-100 book-card"><div class="card-body text-center">
<h5 class="card-title">{heading}</h5><p class="card-text">{text}</p>
</div></div></div>
"#
      )?;
    }
    out.write_str("</div>\n")
  }
}

pub struct ResultsPage<'a> {
  pub query: &'a str,
  pub books: &'a [Book],
}

impl Page for ResultsPage<'_> {
  fn title(&self) -> String { format!("Search Results - {SITE_NAME}") }

  fn write_body(&self, out: &mut dyn Write) -> fmt::Result {
    write!(
      out,
      r#"<h1>Search Results</h1>
<p class="lead">Found {count} result(s) for "{query}"</p>
"#,
      count = self.books.len(),
      query = Esc(self.query),
    )?;
    write_search_form(out, self.query)?;

    if self.books.is_empty() {
      return out.write_str(
        r#"<div class="alert alert-info" role="alert">
<h4 class="alert-heading">No books found!</h4>
<p>We couldn't find any books matching your search criteria. Please try a different search term.</p>
<hr>
<p class="mb-0">Try searching for a book title, author name, or ISBN.</p>
</div>
<div class="text-center mt-4"><a href="/" class="btn btn-primary">Back to Home</a></div>
"#,
      );
    }

    out.write_str(r#"<div class="row row-cols-1 row-cols-md-2 row-cols-lg-3 g-4">"#)?;
    for book in self.books {
      write!(
        out,
        r#"<div class="col"><div class="card h-100 book-card">
<div class="card-body">
<h5 class="card-title">{title}</h5>
<h6 class="card-subtitle mb-2 text-muted">{author}</h6>
<div class="mt-3">"#,
        title = Esc(&book.title),
        author = Esc(&book.author),
      )?;
      write_status_badge(out, book)?;
      write!(
        out,
        r#"</div>
<p class="card-text mt-3"><strong>Location:</strong> {location}</p>
<p class="card-text"><small class="text-muted">ISBN: {isbn}</small></p>
</div>
<div class="card-footer"><a href="/book/{id}" class="btn btn-outline-primary btn-sm">View Details</a></div>
</div></div>
"#,
        location = Esc(&book.location_display()),
        isbn = Esc(&book.isbn),
        id = book.id,
      )?;
    }
    out.write_str("</div>\n")
  }
}

pub struct BookPage<'a> {
  pub book: &'a Book,
}

impl Page for BookPage<'_> {
  fn title(&self) -> String { format!("{} - {SITE_NAME}", self.book.title) }

  fn write_body(&self, out: &mut dyn Write) -> fmt::Result {
    let book = self.book;
    let unknown = "Unknown";

    write!(
      out,
      r#"<nav aria-label="breadcrumb"><ol class="breadcrumb">
<li class="breadcrumb-item"><a href="/">Home</a></li>
<li class="breadcrumb-item"><a href="/search?query={search}">Search Results</a></li>
<li class="breadcrumb-item active" aria-current="page">Book Details</li>
</ol></nav>
<div class="row">
<div class="col-md-8">
<h1 class="book-title">{title}</h1>
<p class="book-author">by {author}</p>
<div class="mb-4">"#,
      search = urlencoding::encode(&book.title),
      title = Esc(&book.title),
      author = Esc(&book.author),
    )?;
    write_status_badge(out, book)?;
    if let Some(category) = &book.category {
      write!(out, r#" <span class="badge bg-secondary ms-2">{}</span>"#, Esc(category))?;
    }
    out.write_str("</div>\n")?;

    if let Some(description) = &book.description {
      write!(
        out,
        r#"<div class="card mb-4"><div class="card-body">
<h5 class="card-title">Description</h5>
<p class="card-text">{}</p>
</div></div>
"#,
        Esc(description)
      )?;
    }

    write!(
      out,
      r#"<div class="card mb-4"><div class="card-body">
<h5 class="card-title">Book Details</h5>
<table class="table table-striped"><tbody>
<tr><th scope="row">ISBN</th><td>{isbn}</td></tr>
<tr><th scope="row">Publication Year</th><td>{year}</td></tr>
<tr><th scope="row">Publisher</th><td>{publisher}</td></tr>
<tr><th scope="row">Category</th><td>{category}</td></tr>
<tr><th scope="row">Status</th><td><span class="status-{status}">{label}</span></td></tr>
<tr><th scope="row">Date Added</th><td>{added}</td></tr>
</tbody></table>
</div></div>
</div>
"#,
      isbn = Esc(&book.isbn),
      year = book.publication_year_display(),
      publisher = Esc(book.publisher.as_deref().unwrap_or(unknown)),
      category = Esc(book.category.as_deref().unwrap_or(unknown)),
      status = Esc(book.status.as_str()),
      label = book.status_display(),
      added = book.date_added.format("%B %-d, %Y"),
    )?;

    write!(
      out,
      r#"<div class="col-md-4"><div class="card">
<div class="card-header bg-primary text-white"><h5 class="card-title mb-0">Book Location</h5></div>
<div class="card-body" id="book-location">
<h4 class="mb-3">{location}</h4>
<div class="d-flex justify-content-between mb-2"><span><strong>Shelf:</strong></span><span class="badge bg-primary">{shelf}</span></div>
<div class="d-flex justify-content-between mb-2"><span><strong>Column:</strong></span><span class="badge bg-info">{column}</span></div>
<div class="d-flex justify-content-between mb-2"><span><strong>Row:</strong></span><span class="badge bg-secondary">{row}</span></div>
</div>
<div class="card-footer"><a href="/" class="btn btn-outline-secondary btn-sm">Back to Home</a></div>
</div></div>
</div>
"#,
      location = Esc(&book.location_display()),
      shelf = Esc(&book.shelf),
      column = Esc(&book.column),
      row = Esc(&book.row),
    )
  }
}

pub struct ErrorPage {
  pub status:  StatusCode,
  pub message: &'static str,
}

impl ErrorPage {
  pub fn not_found() -> Self {
    Self { status: StatusCode::NOT_FOUND, message: "Page not found" }
  }

  pub fn internal() -> Self {
    Self { status: StatusCode::INTERNAL_SERVER_ERROR, message: "Internal server error" }
  }
}

impl Page for ErrorPage {
  fn title(&self) -> String { format!("{} - {SITE_NAME}", self.message) }

  fn write_body(&self, out: &mut dyn Write) -> fmt::Result {
    write!(
      out,
      r#"<div class="text-center py-5">
<h1 class="display-1">{code}</h1>
<h2>{message}</h2>
<a href="/" class="btn btn-primary mt-3">Return to Home</a>
</div>
"#,
      code = self.status.as_u16(),
      message = self.message,
    )
  }
}

// ─── Layout ──────────────────────────────────────────────────────────────────

fn write_document(out: &mut dyn Write, page: &dyn Page) -> fmt::Result {
  write!(
    out,
    r#"<!DOCTYPE html>
<html lang="en" data-bs-theme="dark">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<link rel="stylesheet" href="{BOOTSTRAP_CSS}">
<style>{STYLE}</style>
</head>
<body>
<nav class="navbar navbar-dark bg-dark"><div class="container">
<a class="navbar-brand" href="/">{SITE_NAME}</a>
</div></nav>
<main class="container my-4">
"#,
    title = Esc(&page.title()),
  )?;
  page.write_body(out)?;
  write!(
    out,
    r#"</main>
<footer class="bg-dark text-light py-4 mt-5"><div class="container">
<h5>{SITE_NAME}</h5>
<p>Find the exact shelf location of books in our library.</p>
</div></footer>
</body>
</html>
"#
  )
}

/// Render `page` into a complete HTML response.
pub fn respond(status: StatusCode, page: &dyn Page) -> Response {
  let mut html = String::new();
  match write_document(&mut html, page) {
    Ok(()) => (status, Html(html)).into_response(),
    Err(_) => {
      tracing::error!(
        status = status.as_u16(),
        title = %page.title(),
        "page rendering failed; serving fallback"
      );
      (status, Html(FALLBACK_PAGE)).into_response()
    }
  }
}
