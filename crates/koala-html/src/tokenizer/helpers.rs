use koala_common::warning::warn_once;

use super::core::{HTMLTokenizer, TokenizerState};
use super::token::Token;

/// Replacement character substituted for U+0000 inside tag/attribute contexts.
pub const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

impl HTMLTokenizer {
    /// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
    ///
    /// "Switch to the X state" — move to a new state without reconsuming the
    /// current input character.
    pub(super) const fn switch_to(&mut self, state: TokenizerState) {
        self.state = state;
    }

    /// "Reconsume in the X state" — move to a new state and reprocess the
    /// current input character under it instead of consuming the next one.
    pub(super) const fn reconsume_in(&mut self, state: TokenizerState) {
        self.state = state;
        self.reconsume = true;
    }

    /// Consume the next input character, advancing the read position by its
    /// UTF-8 length. Returns `None` at end of input.
    pub(super) fn consume(&mut self) -> Option<char> {
        let c = self.input[self.current_pos..].chars().next();
        if let Some(ch) = c {
            self.current_pos += ch.len_utf8();
        }
        c
    }

    /// Look ahead `offset` code points without consuming them. `offset = 0`
    /// returns the character at the current position.
    pub(super) fn peek_codepoint(&self, offset: usize) -> Option<char> {
        self.input[self.current_pos..].chars().nth(offset)
    }

    /// Case-sensitive lookahead: does the input starting at the current
    /// position match `target`?
    pub(super) fn next_few_characters_are(&self, target: &str) -> bool {
        self.input[self.current_pos..].starts_with(target)
    }

    /// Case-insensitive lookahead over ASCII characters, used for the
    /// `PUBLIC` / `SYSTEM` DOCTYPE keywords.
    pub(super) fn next_few_characters_are_case_insensitive(&self, target: &str) -> bool {
        let mut chars = self.input[self.current_pos..].chars();
        for expected in target.chars() {
            match chars.next() {
                Some(actual) if actual.eq_ignore_ascii_case(&expected) => {}
                _ => return false,
            }
        }
        true
    }

    /// Consume exactly `target`'s length of input (ASCII only), used after a
    /// successful lookahead match to skip the matched prefix.
    pub(super) fn consume_string(&mut self, target: &str) {
        self.current_pos += target.len();
    }

    /// [§ 13.2.5 Common parser idioms](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
    ///
    /// Whitespace per the tokenizer's definition: tab, line feed, form feed,
    /// or space. Carriage return is deliberately excluded — input is assumed
    /// to already have newlines normalized.
    pub(super) const fn is_whitespace_char(c: char) -> bool {
        matches!(c, ' ' | '\t' | '\n' | '\x0C')
    }

    /// Push a finished token onto the output stream, updating bookkeeping
    /// that depends on token kind.
    ///
    /// This does *not* switch content model on `title`/`style`/`script` by
    /// tag name. The content-model switch is a one-shot instruction
    /// (`Token::new_state`) set by the tree constructor's `parse_raw_text`
    /// helper and honored by the caller of `next_token` after it observes
    /// the field on the returned token — see `HTMLTokenizer::switch_content_model`.
    pub(super) fn emit_token(&mut self, token: Token) {
        if let Token::StartTag { name, .. } = &token {
            self.last_start_tag_name = Some(name.clone());
        }
        self.pending.push_back(token);
    }

    pub(super) fn emit_character_token(&mut self, c: char) {
        self.emit_token(Token::new_character(c));
    }

    pub(super) fn emit_eof_token(&mut self) {
        self.emit_token(Token::new_eof());
        self.at_eof = true;
    }

    /// [§ 13.2.5.13 RCDATA end tag name state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-end-tag-name-state)
    ///
    /// "An appropriate end tag token is an end tag token whose tag name
    /// matches the tag name of the last start tag to have been emitted."
    pub(super) fn is_appropriate_end_tag_token(&self, name: &str) -> bool {
        self.last_start_tag_name.as_deref() == Some(name)
    }

    /// "Anything else" branch shared by the RCDATA end tag open/name states:
    /// the buffered `</…` was not an appropriate end tag, so it is emitted
    /// as literal character tokens and we fall back into RCDATA.
    pub(super) fn emit_rcdata_end_tag_name_anything_else(&mut self) {
        self.emit_character_token('<');
        self.emit_character_token('/');
        for c in self.temporary_buffer.clone().chars() {
            self.emit_character_token(c);
        }
        self.temporary_buffer.clear();
        self.current_token = None;
        self.reconsume_in(TokenizerState::Rcdata);
    }

    /// Check the current tag token's most recently started attribute for a
    /// duplicate name; if found, log a parse error and drop it.
    pub(super) fn check_duplicate_attribute(&mut self) {
        if let Some(token) = &self.current_token
            && token.current_attribute_name_is_duplicate()
        {
            self.log_parse_error("duplicate attribute");
            if let Some(token) = &mut self.current_token {
                token.remove_current_attribute();
            }
        }
    }

    /// Record a parse error. Per the error-handling design, the tokenizer
    /// never aborts on these; it records and continues with the permissive
    /// behavior defined for the state.
    pub(super) fn log_parse_error(&mut self, message: &str) {
        self.parse_errors.push(format!("{message} at position {}", self.current_pos));
        warn_once("HTML Tokenizer", message);
    }
}
