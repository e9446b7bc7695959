//! Independent heuristic analyzers over fetched pages.
//!
//! Each analyzer is a pure scoring function over a `FetchResult` plus a
//! thin async wrapper that performs the fetch. All nondeterminism lives
//! in the fetch layer; given identical fetched content, every analyzer
//! is deterministic.

pub mod conversion;
pub mod reputation;
pub mod seo;
pub mod social;
pub mod speed;
pub mod tracking;
