//! Domain model for the Stacks book locator: book records, search queries,
//! the [`store::BookStore`] trait, and the bundled sample catalog.
//!
//! Nothing here touches HTTP or SQL; backends and the web front end build on
//! these types.

#![allow(async_fn_in_trait)]

pub mod book;
pub mod error;
pub mod query;
pub mod seed;
pub mod store;

pub use error::{Error, Result};
