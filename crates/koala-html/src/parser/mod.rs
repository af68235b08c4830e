//! HTML tree construction: the token-driven insertion-mode state machine.

/// Insertion-mode state machine implementation.
pub mod core;

pub use core::{print_tree, HTMLParser, InsertionMode, ParseIssue};
