//! Shared utilities used across the Koala browser crates.

/// Network fetch helpers (the HTTP client that backs the loader facade).
pub mod net;
/// Relative URL resolution.
pub mod url;
/// Deduplicated warning/parse-error sink.
pub mod warning;
