//! Persisted list of careers pages to search.
//!
//! The list is a plain text file with one `company:url` record per line.

pub mod error;
pub mod store;

pub use error::{Result, StoreError};
pub use store::{parse_line, UrlStore};
