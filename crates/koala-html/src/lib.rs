//! HTML tokenizer and tree constructor for the Koala browser.
//!
//! # Scope
//!
//! This crate implements the two-stage HTML parsing pipeline described by
//! [WHATWG § 13.2](https://html.spec.whatwg.org/multipage/parsing.html#parsing):
//!
//! - **Tokenizer** ([§ 13.2.5](https://html.spec.whatwg.org/multipage/parsing.html#tokenization))
//!   — the character-driven state machine that turns HTML source text into a
//!   lazy sequence of tokens: DOCTYPE, start tag, end tag, comment,
//!   character, end-of-file.
//! - **Tree constructor** ([§ 13.2.6](https://html.spec.whatwg.org/multipage/parsing.html#tree-construction))
//!   — the token-driven insertion-mode state machine that assembles those
//!   tokens into a [`koala_dom::DomTree`], plus the DOCTYPE quirks-mode
//!   decision table.
//!
//! # Not yet implemented
//!
//! These are explicit non-goals of the minimal implementation, not omissions:
//! character reference (entity) decoding, foreign content (SVG/MathML),
//! the active-formatting-elements adoption agency algorithm, template
//! content documents, table insertion modes, and encoding sniffing.
//! [`crate::parser`] documents which insertion modes are implemented.

/// The document and DOCTYPE metadata produced by a parse.
pub mod document;
/// Tree construction: the insertion-mode state machine.
pub mod parser;
/// DOCTYPE public/system identifier tables and the quirks-mode decision.
pub mod quirks;
/// Character-driven tokenizer.
pub mod tokenizer;

pub use document::Document;
pub use parser::{print_tree, HTMLParser, InsertionMode, ParseIssue};
pub use quirks::QuirksMode;
pub use tokenizer::{Attribute, ContentModel, HTMLTokenizer, Token};

/// Parse a complete HTML document from a string of HTML source.
///
/// This is the parser facade: it wires the tokenizer's lazy token stream
/// into the tree constructor, honoring the tree constructor's content-model
/// feedback (a start tag's `new_state` field, armed by [`HTMLParser`]'s
/// `parse_raw_text` helper) between each pulled token. The
/// caller supplies already-decoded Unicode source; encoding detection and
/// network fetch are external collaborators, not part of this crate.
#[must_use]
pub fn parse(input: String) -> (Document, Vec<ParseIssue>) {
    let mut tokenizer = HTMLTokenizer::new(input);
    HTMLParser::new().run(&mut tokenizer)
}

#[cfg(test)]
mod tests {
    use super::parse;

    #[test]
    fn parse_facade_produces_a_document() {
        let (document, issues) = parse(
            "<!DOCTYPE html><html><head><title>Hi</title></head><body><h1>Hello</h1><p>World</p></body></html>"
                .to_string(),
        );
        assert!(issues.is_empty());
        assert_eq!(document.title().as_deref(), Some("Hi"));
    }
}
