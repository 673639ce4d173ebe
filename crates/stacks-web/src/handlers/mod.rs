pub mod book;
pub mod index;
pub mod search;

use crate::error::Error;

/// Fallback for every unrouted path.
pub async fn not_found() -> Error { Error::NotFound }
