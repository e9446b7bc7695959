pub mod client;
pub mod document;

pub use client::{normalize_url, FetchResult, Fetcher};
pub use document::{Document, PageDocument, ResourceCounts};
