//! Catalog data retrieval: the request cache and the lecture fetcher.

pub mod cache;
pub mod catalog;

/// Result type alias for catalog retrieval operations.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

pub use cache::{RequestCache, SharedError};
pub use catalog::{CatalogClient, CatalogLocation, LIBERAL_ARTS_KEY, MAJORS_KEY};
