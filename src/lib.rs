//! Digital health audit engine for medical and dental practices.
//!
//! Scrapes a practice's website and public profiles with best-effort
//! tolerance for blocked or failing fetches, scores six independent
//! heuristics concurrently, and composes them into a single weighted
//! health score with per-category diagnostics.

pub mod analyzers;
pub mod audit;
pub mod cli;
pub mod config;
pub mod errors;
pub mod fetch;
pub mod models;
pub mod reporting;
pub mod store;
pub mod utils;
