//! HTML tokenizer module.
//!
//! Implements the character-driven state machine of
//! [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//! of the WHATWG HTML Living Standard, reduced to the states needed to drive
//! the tree constructor in `crate::parser`.

/// HTML tokenizer state machine implementation.
pub mod core;
/// Helper methods for tokenizer state transitions (consuming, peeking, emitting).
pub mod helpers;
/// Token types produced by the tokenizer.
pub mod token;

pub use core::{HTMLTokenizer, TokenizerState};
pub use token::{Attribute, ContentModel, Token};
