use std::collections::VecDeque;

use strum_macros::Display;

use super::helpers::REPLACEMENT_CHARACTER;
use super::token::{ContentModel, Token};

/// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
///
/// The tokenizer state machine, reduced to the states needed to drive the
/// insertion-mode tree constructor in `crate::parser`. RCDATA and RAWTEXT
/// content models share the [`TokenizerState::Rcdata`] family of states:
/// neither model expands character or entity references in this
/// implementation, so their tokenization behavior is identical and the only
/// externally visible difference is which tag name the tree constructor
/// associates with the element (tracked on the element itself, not here).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TokenizerState {
    /// [§ 13.2.5.1 Data state](https://html.spec.whatwg.org/multipage/parsing.html#data-state)
    Data,
    /// [§ 13.2.5.2 RCDATA state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-state)
    /// (also serves as the RAWTEXT content model; see type-level docs)
    Rcdata,
    /// [§ 13.2.5.6 Tag open state](https://html.spec.whatwg.org/multipage/parsing.html#tag-open-state)
    TagOpen,
    /// [§ 13.2.5.7 End tag open state](https://html.spec.whatwg.org/multipage/parsing.html#end-tag-open-state)
    EndTagOpen,
    /// [§ 13.2.5.8 Tag name state](https://html.spec.whatwg.org/multipage/parsing.html#tag-name-state)
    TagName,
    /// [§ 13.2.5.11 RCDATA less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-less-than-sign-state)
    RcdataLessThanSign,
    /// [§ 13.2.5.12 RCDATA end tag open state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-end-tag-open-state)
    RcdataEndTagOpen,
    /// [§ 13.2.5.13 RCDATA end tag name state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-end-tag-name-state)
    RcdataEndTagName,
    /// [§ 13.2.5.40 Self-closing start tag state](https://html.spec.whatwg.org/multipage/parsing.html#self-closing-start-tag-state)
    SelfClosingStartTag,
    /// [§ 13.2.5.32 Before attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#before-attribute-name-state)
    BeforeAttributeName,
    /// [§ 13.2.5.33 Attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-name-state)
    AttributeName,
    /// [§ 13.2.5.34 After attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#after-attribute-name-state)
    AfterAttributeName,
    /// [§ 13.2.5.35 Before attribute value state](https://html.spec.whatwg.org/multipage/parsing.html#before-attribute-value-state)
    BeforeAttributeValue,
    /// [§ 13.2.5.36 Attribute value (double-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(double-quoted)-state)
    AttributeValueDoubleQuoted,
    /// [§ 13.2.5.37 Attribute value (single-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(single-quoted)-state)
    AttributeValueSingleQuoted,
    /// [§ 13.2.5.38 Attribute value (unquoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(unquoted)-state)
    AttributeValueUnquoted,
    /// [§ 13.2.5.39 After attribute value (quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#after-attribute-value-(quoted)-state)
    AfterAttributeValueQuoted,
    /// [§ 13.2.5.42 Markup declaration open state](https://html.spec.whatwg.org/multipage/parsing.html#markup-declaration-open-state)
    MarkupDeclarationOpen,
    /// [§ 13.2.5.43 Comment start state](https://html.spec.whatwg.org/multipage/parsing.html#comment-start-state)
    CommentStart,
    /// [§ 13.2.5.44 Comment start dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-start-dash-state)
    CommentStartDash,
    /// [§ 13.2.5.45 Comment state](https://html.spec.whatwg.org/multipage/parsing.html#comment-state)
    Comment,
    /// [§ 13.2.5.46 Comment less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-state)
    CommentLessThanSign,
    /// [§ 13.2.5.47 Comment less-than sign bang state](https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-bang-state)
    CommentLessThanSignBang,
    /// [§ 13.2.5.48 Comment less-than sign bang dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-bang-dash-state)
    CommentLessThanSignBangDash,
    /// [§ 13.2.5.49 Comment less-than sign bang dash dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-bang-dash-dash-state)
    CommentLessThanSignBangDashDash,
    /// [§ 13.2.5.50 Comment end dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-end-dash-state)
    CommentEndDash,
    /// [§ 13.2.5.51 Comment end state](https://html.spec.whatwg.org/multipage/parsing.html#comment-end-state)
    CommentEnd,
    /// [§ 13.2.5.52 Comment end bang state](https://html.spec.whatwg.org/multipage/parsing.html#comment-end-bang-state)
    CommentEndBang,
    /// [§ 13.2.5.53 DOCTYPE state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-state)
    Doctype,
    /// [§ 13.2.5.54 Before DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-name-state)
    BeforeDoctypeName,
    /// [§ 13.2.5.55 DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-name-state)
    DoctypeName,
    /// [§ 13.2.5.56 After DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-name-state)
    AfterDoctypeName,
    /// [§ 13.2.5.57 After DOCTYPE public keyword state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-public-keyword-state)
    AfterDoctypePublicKeyword,
    /// [§ 13.2.5.58 Before DOCTYPE public identifier state](https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-public-identifier-state)
    BeforeDoctypePublicIdentifier,
    /// [§ 13.2.5.59 DOCTYPE public identifier (double-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-public-identifier-(double-quoted)-state)
    DoctypePublicIdentifierDoubleQuoted,
    /// [§ 13.2.5.60 DOCTYPE public identifier (single-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-public-identifier-(single-quoted)-state)
    DoctypePublicIdentifierSingleQuoted,
    /// [§ 13.2.5.61 After DOCTYPE public identifier state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-public-identifier-state)
    AfterDoctypePublicIdentifier,
    /// [§ 13.2.5.62 Between DOCTYPE public and system identifiers state](https://html.spec.whatwg.org/multipage/parsing.html#between-doctype-public-and-system-identifiers-state)
    BetweenDoctypePublicAndSystemIdentifiers,
    /// [§ 13.2.5.63 After DOCTYPE system keyword state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-system-keyword-state)
    AfterDoctypeSystemKeyword,
    /// [§ 13.2.5.64 Before DOCTYPE system identifier state](https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-system-identifier-state)
    BeforeDoctypeSystemIdentifier,
    /// [§ 13.2.5.65 DOCTYPE system identifier (double-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-system-identifier-(double-quoted)-state)
    DoctypeSystemIdentifierDoubleQuoted,
    /// [§ 13.2.5.66 DOCTYPE system identifier (single-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-system-identifier-(single-quoted)-state)
    DoctypeSystemIdentifierSingleQuoted,
    /// [§ 13.2.5.67 After DOCTYPE system identifier state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-system-identifier-state)
    AfterDoctypeSystemIdentifier,
    /// [§ 13.2.5.68 Bogus DOCTYPE state](https://html.spec.whatwg.org/multipage/parsing.html#bogus-doctype-state)
    BogusDoctype,
    /// [§ 13.2.5.41 Bogus comment state](https://html.spec.whatwg.org/multipage/parsing.html#bogus-comment-state)
    BogusComment,
    /// Minimal character reference hook. Per design scope, character
    /// references are not expanded; this state only exists so that `&`
    /// visibly "switches state" before falling straight back to the state it
    /// came from, honoring the letter of the feedback-channel design without
    /// implementing the numeric/named reference tables.
    CharacterReference,
}

/// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
///
/// Character-driven tokenizer producing a token at a time via [`Self::next_token`].
/// Holds the read position, current state, the scratch token under
/// construction, and the small bookkeeping fields ([`Self::temporary_buffer`],
/// [`Self::return_state`]) the state machine needs between steps.
pub struct HTMLTokenizer {
    pub(super) state: TokenizerState,
    pub(super) return_state: Option<TokenizerState>,
    pub(super) input: String,
    pub(super) current_pos: usize,
    pub(super) current_input_character: Option<char>,
    pub(super) current_token: Option<Token>,
    pub(super) at_eof: bool,
    pub(super) pending: VecDeque<Token>,
    pub(super) reconsume: bool,
    pub(super) last_start_tag_name: Option<String>,
    pub(super) temporary_buffer: String,
    pub(super) parse_errors: Vec<String>,
}

impl HTMLTokenizer {
    /// Create a tokenizer positioned at the start of `input` in the Data state.
    #[must_use]
    pub fn new(input: String) -> Self {
        Self {
            state: TokenizerState::Data,
            return_state: None,
            input,
            current_pos: 0,
            current_input_character: None,
            current_token: None,
            at_eof: false,
            pending: VecDeque::new(),
            reconsume: false,
            last_start_tag_name: None,
            temporary_buffer: String::new(),
            parse_errors: Vec::new(),
        }
    }

    /// Pull the next token, advancing the state machine as many steps as
    /// needed to produce one. Returns `Token::EndOfFile` on every call once
    /// end of input has been reached, rather than re-running the state
    /// machine against an exhausted input.
    pub fn next_token(&mut self) -> Token {
        if self.pending.is_empty() && self.at_eof {
            return Token::new_eof();
        }
        while self.pending.is_empty() {
            self.step();
        }
        self.pending.pop_front().expect("step() must enqueue a token before returning")
    }

    /// Honor the one-shot content-model feedback channel: after the tree
    /// constructor's `parse_raw_text` helper marks a start tag's
    /// [`Token::new_state`](super::token::Token), the driver loop calls this
    /// to switch the tokenizer before requesting the next token.
    pub fn switch_content_model(&mut self, model: ContentModel) {
        self.temporary_buffer.clear();
        match model {
            ContentModel::RcData | ContentModel::RawText => {
                self.switch_to(TokenizerState::Rcdata);
            }
        }
    }

    /// Run to completion, collecting every emitted token. Convenience entry
    /// point for tests and any caller that does not need to drive content
    /// model switches (e.g. input with no `title`/`style`/`script` elements).
    pub fn run(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    /// Parse errors recorded so far, in the order they were raised.
    #[must_use]
    pub fn parse_errors(&self) -> &[String] {
        &self.parse_errors
    }

    fn step(&mut self) {
        if self.reconsume {
            self.reconsume = false;
        } else {
            self.current_input_character = self.consume();
        }

        match self.state {
            TokenizerState::Data => self.handle_data_state(),
            TokenizerState::Rcdata => self.handle_rcdata_state(),
            TokenizerState::TagOpen => self.handle_tag_open_state(),
            TokenizerState::EndTagOpen => self.handle_end_tag_open_state(),
            TokenizerState::TagName => self.handle_tag_name_state(),
            TokenizerState::RcdataLessThanSign => self.handle_rcdata_less_than_sign_state(),
            TokenizerState::RcdataEndTagOpen => self.handle_rcdata_end_tag_open_state(),
            TokenizerState::RcdataEndTagName => self.handle_rcdata_end_tag_name_state(),
            TokenizerState::SelfClosingStartTag => self.handle_self_closing_start_tag_state(),
            TokenizerState::BeforeAttributeName => self.handle_before_attribute_name_state(),
            TokenizerState::AttributeName => self.handle_attribute_name_state(),
            TokenizerState::AfterAttributeName => self.handle_after_attribute_name_state(),
            TokenizerState::BeforeAttributeValue => self.handle_before_attribute_value_state(),
            TokenizerState::AttributeValueDoubleQuoted => {
                self.handle_attribute_value_quoted_state('"');
            }
            TokenizerState::AttributeValueSingleQuoted => {
                self.handle_attribute_value_quoted_state('\'');
            }
            TokenizerState::AttributeValueUnquoted => self.handle_attribute_value_unquoted_state(),
            TokenizerState::AfterAttributeValueQuoted => {
                self.handle_after_attribute_value_quoted_state();
            }
            TokenizerState::MarkupDeclarationOpen => self.handle_markup_declaration_open_state(),
            TokenizerState::CommentStart => self.handle_comment_start_state(),
            TokenizerState::CommentStartDash => self.handle_comment_start_dash_state(),
            TokenizerState::Comment => self.handle_comment_state(),
            TokenizerState::CommentLessThanSign => self.handle_comment_less_than_sign_state(),
            TokenizerState::CommentLessThanSignBang => {
                self.handle_comment_less_than_sign_bang_state();
            }
            TokenizerState::CommentLessThanSignBangDash => {
                self.handle_comment_less_than_sign_bang_dash_state();
            }
            TokenizerState::CommentLessThanSignBangDashDash => {
                self.handle_comment_less_than_sign_bang_dash_dash_state();
            }
            TokenizerState::CommentEndDash => self.handle_comment_end_dash_state(),
            TokenizerState::CommentEnd => self.handle_comment_end_state(),
            TokenizerState::CommentEndBang => self.handle_comment_end_bang_state(),
            TokenizerState::Doctype => self.handle_doctype_state(),
            TokenizerState::BeforeDoctypeName => self.handle_before_doctype_name_state(),
            TokenizerState::DoctypeName => self.handle_doctype_name_state(),
            TokenizerState::AfterDoctypeName => self.handle_after_doctype_name_state(),
            TokenizerState::AfterDoctypePublicKeyword => {
                self.handle_after_doctype_public_keyword_state();
            }
            TokenizerState::BeforeDoctypePublicIdentifier => {
                self.handle_before_doctype_public_identifier_state();
            }
            TokenizerState::DoctypePublicIdentifierDoubleQuoted => {
                self.handle_doctype_public_identifier_quoted_state('"');
            }
            TokenizerState::DoctypePublicIdentifierSingleQuoted => {
                self.handle_doctype_public_identifier_quoted_state('\'');
            }
            TokenizerState::AfterDoctypePublicIdentifier => {
                self.handle_after_doctype_public_identifier_state();
            }
            TokenizerState::BetweenDoctypePublicAndSystemIdentifiers => {
                self.handle_between_doctype_public_and_system_identifiers_state();
            }
            TokenizerState::AfterDoctypeSystemKeyword => {
                self.handle_after_doctype_system_keyword_state();
            }
            TokenizerState::BeforeDoctypeSystemIdentifier => {
                self.handle_before_doctype_system_identifier_state();
            }
            TokenizerState::DoctypeSystemIdentifierDoubleQuoted => {
                self.handle_doctype_system_identifier_quoted_state('"');
            }
            TokenizerState::DoctypeSystemIdentifierSingleQuoted => {
                self.handle_doctype_system_identifier_quoted_state('\'');
            }
            TokenizerState::AfterDoctypeSystemIdentifier => {
                self.handle_after_doctype_system_identifier_state();
            }
            TokenizerState::BogusDoctype => self.handle_bogus_doctype_state(),
            TokenizerState::BogusComment => self.handle_bogus_comment_state(),
            TokenizerState::CharacterReference => self.handle_character_reference_state(),
        }
    }

    /// [§ 13.2.5.1 Data state](https://html.spec.whatwg.org/multipage/parsing.html#data-state)
    fn handle_data_state(&mut self) {
        match self.current_input_character {
            Some('&') => {
                self.return_state = Some(TokenizerState::Data);
                self.switch_to(TokenizerState::CharacterReference);
            }
            Some('<') => self.switch_to(TokenizerState::TagOpen),
            Some('\0') => {
                self.log_parse_error("unexpected null character");
                self.emit_character_token('\0');
            }
            Some(c) => self.emit_character_token(c),
            None => self.emit_eof_token(),
        }
    }

    /// [§ 13.2.5.2 RCDATA state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-state)
    fn handle_rcdata_state(&mut self) {
        match self.current_input_character {
            Some('&') => {
                self.return_state = Some(TokenizerState::Rcdata);
                self.switch_to(TokenizerState::CharacterReference);
            }
            Some('<') => self.switch_to(TokenizerState::RcdataLessThanSign),
            Some('\0') => {
                self.log_parse_error("unexpected null character");
                self.emit_character_token(REPLACEMENT_CHARACTER);
            }
            Some(c) => self.emit_character_token(c),
            None => self.emit_eof_token(),
        }
    }

    /// [§ 13.2.5.72 Character reference state](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state)
    ///
    /// Numeric and named character references are an explicit non-goal: the
    /// `&` is recognized and switches state, per the design notes, but no
    /// table lookup happens. Per "flush code points consumed as a character
    /// reference", if the reference was consumed as part of an attribute the
    /// `&` is appended to the current attribute's value instead of being
    /// emitted as a document character token — otherwise `<a href="a&b">`
    /// would leak a stray `&` character token ahead of the `<a>` start tag.
    fn handle_character_reference_state(&mut self) {
        if self.is_consumed_as_part_of_attribute() {
            self.append_to_current_attribute_value('&');
        } else {
            self.emit_character_token('&');
        }
        let return_state = self.return_state.take().unwrap_or(TokenizerState::Data);
        self.reconsume_in(return_state);
    }

    /// [§ 13.2.5.72 Character reference state](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state)
    /// "If the character reference was consumed as part of an attribute" —
    /// true when the state that dispatched here is one of the attribute
    /// value states.
    fn is_consumed_as_part_of_attribute(&self) -> bool {
        matches!(
            self.return_state,
            Some(
                TokenizerState::AttributeValueDoubleQuoted
                    | TokenizerState::AttributeValueSingleQuoted
                    | TokenizerState::AttributeValueUnquoted
            )
        )
    }

    /// [§ 13.2.5.6 Tag open state](https://html.spec.whatwg.org/multipage/parsing.html#tag-open-state)
    fn handle_tag_open_state(&mut self) {
        match self.current_input_character {
            Some('!') => self.reconsume_in(TokenizerState::MarkupDeclarationOpen),
            Some('/') => self.switch_to(TokenizerState::EndTagOpen),
            Some(c) if c.is_ascii_alphabetic() => {
                self.current_token = Some(Token::new_start_tag());
                self.reconsume_in(TokenizerState::TagName);
            }
            Some('?') => {
                self.log_parse_error("unexpected question mark instead of tag name");
                self.current_token = Some(Token::new_comment());
                self.reconsume_in(TokenizerState::BogusComment);
            }
            None => {
                self.log_parse_error("eof before tag name");
                self.emit_character_token('<');
                self.emit_eof_token();
            }
            Some(_) => {
                self.log_parse_error("invalid first character of tag name");
                self.emit_character_token('<');
                self.reconsume_in(TokenizerState::Data);
            }
        }
    }

    /// [§ 13.2.5.7 End tag open state](https://html.spec.whatwg.org/multipage/parsing.html#end-tag-open-state)
    fn handle_end_tag_open_state(&mut self) {
        match self.current_input_character {
            Some(c) if c.is_ascii_alphabetic() => {
                self.current_token = Some(Token::new_end_tag());
                self.reconsume_in(TokenizerState::TagName);
            }
            Some('>') => {
                self.log_parse_error("missing end tag name");
                self.switch_to(TokenizerState::Data);
            }
            None => {
                self.log_parse_error("eof before tag name");
                self.emit_character_token('<');
                self.emit_character_token('/');
                self.emit_eof_token();
            }
            Some(_) => {
                self.log_parse_error("invalid first character of tag name");
                self.current_token = Some(Token::new_comment());
                self.reconsume_in(TokenizerState::BogusComment);
            }
        }
    }

    /// [§ 13.2.5.8 Tag name state](https://html.spec.whatwg.org/multipage/parsing.html#tag-name-state)
    fn handle_tag_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BeforeAttributeName);
            }
            Some('/') => self.switch_to(TokenizerState::SelfClosingStartTag),
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            Some(c) if c.is_ascii_uppercase() => {
                self.append_to_current_tag_name(c.to_ascii_lowercase());
            }
            Some('\0') => {
                self.log_parse_error("unexpected null character");
                self.append_to_current_tag_name(REPLACEMENT_CHARACTER);
            }
            Some(c) => self.append_to_current_tag_name(c),
            None => {
                self.log_parse_error("eof in tag");
                self.emit_eof_token();
            }
        }
    }

    /// [§ 13.2.5.11 RCDATA less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-less-than-sign-state)
    fn handle_rcdata_less_than_sign_state(&mut self) {
        if self.current_input_character == Some('/') {
            self.temporary_buffer.clear();
            self.switch_to(TokenizerState::RcdataEndTagOpen);
        } else {
            self.emit_character_token('<');
            self.reconsume_in(TokenizerState::Rcdata);
        }
    }

    /// [§ 13.2.5.12 RCDATA end tag open state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-end-tag-open-state)
    fn handle_rcdata_end_tag_open_state(&mut self) {
        match self.current_input_character {
            Some(c) if c.is_ascii_alphabetic() => {
                self.current_token = Some(Token::new_end_tag());
                self.reconsume_in(TokenizerState::RcdataEndTagName);
            }
            _ => {
                self.emit_character_token('<');
                self.emit_character_token('/');
                self.reconsume_in(TokenizerState::Rcdata);
            }
        }
    }

    /// [§ 13.2.5.13 RCDATA end tag name state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-end-tag-name-state)
    fn handle_rcdata_end_tag_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                if self.is_current_end_tag_appropriate() {
                    self.switch_to(TokenizerState::BeforeAttributeName);
                } else {
                    self.emit_rcdata_end_tag_name_anything_else();
                }
            }
            Some('/') => {
                if self.is_current_end_tag_appropriate() {
                    self.switch_to(TokenizerState::SelfClosingStartTag);
                } else {
                    self.emit_rcdata_end_tag_name_anything_else();
                }
            }
            Some('>') => {
                if self.is_current_end_tag_appropriate() {
                    self.switch_to(TokenizerState::Data);
                    self.emit_current_token();
                } else {
                    self.emit_rcdata_end_tag_name_anything_else();
                }
            }
            Some(c) if c.is_ascii_uppercase() => {
                self.append_to_current_tag_name(c.to_ascii_lowercase());
                self.temporary_buffer.push(c);
            }
            Some(c) if c.is_ascii_lowercase() => {
                self.append_to_current_tag_name(c);
                self.temporary_buffer.push(c);
            }
            _ => self.emit_rcdata_end_tag_name_anything_else(),
        }
    }

    fn is_current_end_tag_appropriate(&self) -> bool {
        self.current_token
            .as_ref()
            .and_then(Token::tag_name)
            .is_some_and(|name| self.is_appropriate_end_tag_token(name))
    }

    /// [§ 13.2.5.40 Self-closing start tag state](https://html.spec.whatwg.org/multipage/parsing.html#self-closing-start-tag-state)
    fn handle_self_closing_start_tag_state(&mut self) {
        match self.current_input_character {
            Some('>') => {
                if let Some(token) = &mut self.current_token {
                    token.set_self_closing();
                }
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            None => {
                self.log_parse_error("eof in tag");
                self.emit_eof_token();
            }
            Some(_) => {
                self.log_parse_error("unexpected solidus in tag");
                self.reconsume_in(TokenizerState::BeforeAttributeName);
            }
        }
    }

    /// [§ 13.2.5.32 Before attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#before-attribute-name-state)
    fn handle_before_attribute_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some('/' | '>') | None => self.reconsume_in(TokenizerState::AfterAttributeName),
            Some('=') => {
                self.log_parse_error("unexpected equals sign before attribute name");
                self.start_new_attribute();
                self.append_to_current_attribute_name('=');
                self.switch_to(TokenizerState::AttributeName);
            }
            Some(_) => {
                self.start_new_attribute();
                self.reconsume_in(TokenizerState::AttributeName);
            }
        }
    }

    /// [§ 13.2.5.33 Attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-name-state)
    fn handle_attribute_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) || c == '/' || c == '>' => {
                self.reconsume_in(TokenizerState::AfterAttributeName);
            }
            None => self.reconsume_in(TokenizerState::AfterAttributeName),
            Some('=') => {
                self.check_duplicate_attribute();
                self.switch_to(TokenizerState::BeforeAttributeValue);
            }
            Some(c) if c.is_ascii_uppercase() => {
                self.append_to_current_attribute_name(c.to_ascii_lowercase());
            }
            Some('\0') => {
                self.log_parse_error("unexpected null character");
                self.append_to_current_attribute_name(REPLACEMENT_CHARACTER);
            }
            Some(c) => self.append_to_current_attribute_name(c),
        }
    }

    /// [§ 13.2.5.34 After attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#after-attribute-name-state)
    fn handle_after_attribute_name_state(&mut self) {
        self.check_duplicate_attribute();
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some('/') => self.switch_to(TokenizerState::SelfClosingStartTag),
            Some('=') => self.switch_to(TokenizerState::BeforeAttributeValue),
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            None => {
                self.log_parse_error("eof in tag");
                self.emit_eof_token();
            }
            Some(_) => {
                self.start_new_attribute();
                self.reconsume_in(TokenizerState::AttributeName);
            }
        }
    }

    /// [§ 13.2.5.35 Before attribute value state](https://html.spec.whatwg.org/multipage/parsing.html#before-attribute-value-state)
    fn handle_before_attribute_value_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some('"') => self.switch_to(TokenizerState::AttributeValueDoubleQuoted),
            Some('\'') => self.switch_to(TokenizerState::AttributeValueSingleQuoted),
            Some('>') => {
                self.log_parse_error("missing attribute value");
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            _ => self.reconsume_in(TokenizerState::AttributeValueUnquoted),
        }
    }

    /// [§ 13.2.5.36 Attribute value (double-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(double-quoted)-state)
    /// and [§ 13.2.5.37 Attribute value (single-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(single-quoted)-state)
    fn handle_attribute_value_quoted_state(&mut self, quote: char) {
        match self.current_input_character {
            Some(c) if c == quote => self.switch_to(TokenizerState::AfterAttributeValueQuoted),
            Some('&') => {
                self.return_state = Some(self.state);
                self.switch_to(TokenizerState::CharacterReference);
            }
            Some('\0') => {
                self.log_parse_error("unexpected null character");
                self.append_to_current_attribute_value(REPLACEMENT_CHARACTER);
            }
            Some(c) => self.append_to_current_attribute_value(c),
            None => {
                self.log_parse_error("eof in tag");
                self.emit_eof_token();
            }
        }
    }

    /// [§ 13.2.5.38 Attribute value (unquoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(unquoted)-state)
    fn handle_attribute_value_unquoted_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BeforeAttributeName);
            }
            Some('&') => {
                self.return_state = Some(TokenizerState::AttributeValueUnquoted);
                self.switch_to(TokenizerState::CharacterReference);
            }
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            Some('\0') => {
                self.log_parse_error("unexpected null character");
                self.append_to_current_attribute_value(REPLACEMENT_CHARACTER);
            }
            Some(c) => self.append_to_current_attribute_value(c),
            None => {
                self.log_parse_error("eof in tag");
                self.emit_eof_token();
            }
        }
    }

    /// [§ 13.2.5.39 After attribute value (quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#after-attribute-value-(quoted)-state)
    fn handle_after_attribute_value_quoted_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BeforeAttributeName);
            }
            Some('/') => self.switch_to(TokenizerState::SelfClosingStartTag),
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            None => {
                self.log_parse_error("eof in tag");
                self.emit_eof_token();
            }
            Some(_) => {
                self.log_parse_error("missing whitespace between attributes");
                self.reconsume_in(TokenizerState::BeforeAttributeName);
            }
        }
    }

    /// [§ 13.2.5.42 Markup declaration open state](https://html.spec.whatwg.org/multipage/parsing.html#markup-declaration-open-state)
    fn handle_markup_declaration_open_state(&mut self) {
        if self.next_few_characters_are("--") {
            self.consume_string("--");
            self.current_token = Some(Token::new_comment());
            self.switch_to(TokenizerState::CommentStart);
        } else if self.next_few_characters_are_case_insensitive("DOCTYPE") {
            self.consume_string("DOCTYPE");
            self.switch_to(TokenizerState::Doctype);
        } else {
            self.log_parse_error("incorrectly opened comment");
            self.current_token = Some(Token::new_comment());
            self.switch_to(TokenizerState::BogusComment);
        }
    }

    /// [§ 13.2.5.43 Comment start state](https://html.spec.whatwg.org/multipage/parsing.html#comment-start-state)
    fn handle_comment_start_state(&mut self) {
        match self.current_input_character {
            Some('-') => self.switch_to(TokenizerState::CommentStartDash),
            Some('>') => {
                self.log_parse_error("abrupt closing of empty comment");
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            _ => self.reconsume_in(TokenizerState::Comment),
        }
    }

    /// [§ 13.2.5.44 Comment start dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-start-dash-state)
    fn handle_comment_start_dash_state(&mut self) {
        match self.current_input_character {
            Some('-') => self.switch_to(TokenizerState::CommentEnd),
            Some('>') => {
                self.log_parse_error("abrupt closing of empty comment");
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            None => {
                self.log_parse_error("eof in comment");
                self.emit_current_token();
                self.emit_eof_token();
            }
            Some(_) => {
                self.append_to_current_comment('-');
                self.reconsume_in(TokenizerState::Comment);
            }
        }
    }

    /// [§ 13.2.5.45 Comment state](https://html.spec.whatwg.org/multipage/parsing.html#comment-state)
    fn handle_comment_state(&mut self) {
        match self.current_input_character {
            Some('<') => {
                self.append_to_current_comment('<');
                self.switch_to(TokenizerState::CommentLessThanSign);
            }
            Some('-') => self.switch_to(TokenizerState::CommentEndDash),
            Some('\0') => {
                self.log_parse_error("unexpected null character");
                self.append_to_current_comment(REPLACEMENT_CHARACTER);
            }
            Some(c) => self.append_to_current_comment(c),
            None => {
                self.log_parse_error("eof in comment");
                self.emit_current_token();
                self.emit_eof_token();
            }
        }
    }

    /// [§ 13.2.5.46 Comment less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-state)
    fn handle_comment_less_than_sign_state(&mut self) {
        match self.current_input_character {
            Some('!') => {
                self.append_to_current_comment('!');
                self.switch_to(TokenizerState::CommentLessThanSignBang);
            }
            Some('<') => self.append_to_current_comment('<'),
            _ => self.reconsume_in(TokenizerState::Comment),
        }
    }

    /// [§ 13.2.5.47 Comment less-than sign bang state](https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-bang-state)
    fn handle_comment_less_than_sign_bang_state(&mut self) {
        if self.current_input_character == Some('-') {
            self.switch_to(TokenizerState::CommentLessThanSignBangDash);
        } else {
            self.reconsume_in(TokenizerState::Comment);
        }
    }

    /// [§ 13.2.5.48 Comment less-than sign bang dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-bang-dash-state)
    fn handle_comment_less_than_sign_bang_dash_state(&mut self) {
        if self.current_input_character == Some('-') {
            self.switch_to(TokenizerState::CommentLessThanSignBangDashDash);
        } else {
            self.reconsume_in(TokenizerState::CommentEndDash);
        }
    }

    /// [§ 13.2.5.49 Comment less-than sign bang dash dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-bang-dash-dash-state)
    fn handle_comment_less_than_sign_bang_dash_dash_state(&mut self) {
        match self.current_input_character {
            Some('>') | None => self.reconsume_in(TokenizerState::CommentEnd),
            Some(_) => {
                self.log_parse_error("nested comment");
                self.reconsume_in(TokenizerState::CommentEnd);
            }
        }
    }

    /// [§ 13.2.5.50 Comment end dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-end-dash-state)
    fn handle_comment_end_dash_state(&mut self) {
        match self.current_input_character {
            Some('-') => self.switch_to(TokenizerState::CommentEnd),
            None => {
                self.log_parse_error("eof in comment");
                self.emit_current_token();
                self.emit_eof_token();
            }
            Some(_) => {
                self.append_to_current_comment('-');
                self.reconsume_in(TokenizerState::Comment);
            }
        }
    }

    /// [§ 13.2.5.51 Comment end state](https://html.spec.whatwg.org/multipage/parsing.html#comment-end-state)
    fn handle_comment_end_state(&mut self) {
        match self.current_input_character {
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            Some('!') => self.switch_to(TokenizerState::CommentEndBang),
            Some('-') => self.append_to_current_comment('-'),
            None => {
                self.log_parse_error("eof in comment");
                self.emit_current_token();
                self.emit_eof_token();
            }
            Some(_) => {
                self.append_to_current_comment('-');
                self.append_to_current_comment('-');
                self.reconsume_in(TokenizerState::Comment);
            }
        }
    }

    /// [§ 13.2.5.52 Comment end bang state](https://html.spec.whatwg.org/multipage/parsing.html#comment-end-bang-state)
    fn handle_comment_end_bang_state(&mut self) {
        match self.current_input_character {
            Some('-') => {
                self.append_to_current_comment('-');
                self.append_to_current_comment('-');
                self.append_to_current_comment('!');
                self.switch_to(TokenizerState::CommentEndDash);
            }
            Some('>') => {
                self.log_parse_error("incorrectly closed comment");
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            None => {
                self.log_parse_error("eof in comment");
                self.emit_current_token();
                self.emit_eof_token();
            }
            Some(_) => {
                self.append_to_current_comment('-');
                self.append_to_current_comment('-');
                self.append_to_current_comment('!');
                self.reconsume_in(TokenizerState::Comment);
            }
        }
    }

    /// [§ 13.2.5.53 DOCTYPE state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-state)
    fn handle_doctype_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BeforeDoctypeName);
            }
            Some('>') => self.reconsume_in(TokenizerState::BeforeDoctypeName),
            None => {
                self.log_parse_error("eof in doctype");
                let mut token = Token::new_doctype();
                token.set_force_quirks();
                self.emit_token(token);
                self.emit_eof_token();
            }
            Some(_) => {
                self.log_parse_error("missing whitespace before doctype name");
                self.reconsume_in(TokenizerState::BeforeDoctypeName);
            }
        }
    }

    /// [§ 13.2.5.54 Before DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-name-state)
    fn handle_before_doctype_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some(c) if c.is_ascii_uppercase() => {
                self.current_token = Some(Token::new_doctype());
                self.append_to_current_doctype_name(c.to_ascii_lowercase());
                self.switch_to(TokenizerState::DoctypeName);
            }
            Some('\0') => {
                self.log_parse_error("unexpected null character");
                self.current_token = Some(Token::new_doctype());
                self.append_to_current_doctype_name(REPLACEMENT_CHARACTER);
                self.switch_to(TokenizerState::DoctypeName);
            }
            Some('>') => {
                self.log_parse_error("missing doctype name");
                let mut token = Token::new_doctype();
                token.set_force_quirks();
                self.emit_token(token);
                self.switch_to(TokenizerState::Data);
            }
            None => {
                self.log_parse_error("eof in doctype");
                let mut token = Token::new_doctype();
                token.set_force_quirks();
                self.emit_token(token);
                self.emit_eof_token();
            }
            Some(c) => {
                self.current_token = Some(Token::new_doctype());
                self.append_to_current_doctype_name(c);
                self.switch_to(TokenizerState::DoctypeName);
            }
        }
    }

    /// [§ 13.2.5.55 DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-name-state)
    fn handle_doctype_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::AfterDoctypeName);
            }
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            Some(c) if c.is_ascii_uppercase() => {
                self.append_to_current_doctype_name(c.to_ascii_lowercase());
            }
            Some('\0') => {
                self.log_parse_error("unexpected null character");
                self.append_to_current_doctype_name(REPLACEMENT_CHARACTER);
            }
            Some(c) => self.append_to_current_doctype_name(c),
            None => {
                self.log_parse_error("eof in doctype");
                self.force_quirks_on_current_doctype();
                self.emit_current_token();
                self.emit_eof_token();
            }
        }
    }

    /// [§ 13.2.5.56 After DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-name-state)
    fn handle_after_doctype_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            None => {
                self.log_parse_error("eof in doctype");
                self.force_quirks_on_current_doctype();
                self.emit_current_token();
                self.emit_eof_token();
            }
            Some(c) if c.eq_ignore_ascii_case(&'p') && self.next_few_characters_are_case_insensitive("ublic") => {
                self.consume_string("ublic");
                self.switch_to(TokenizerState::AfterDoctypePublicKeyword);
            }
            Some(c) if c.eq_ignore_ascii_case(&'s') && self.next_few_characters_are_case_insensitive("ystem") => {
                self.consume_string("ystem");
                self.switch_to(TokenizerState::AfterDoctypeSystemKeyword);
            }
            Some(_) => {
                self.log_parse_error("invalid character sequence after doctype name");
                self.force_quirks_on_current_doctype();
                self.reconsume_in(TokenizerState::BogusDoctype);
            }
        }
    }

    /// [§ 13.2.5.57 After DOCTYPE public keyword state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-public-keyword-state)
    fn handle_after_doctype_public_keyword_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BeforeDoctypePublicIdentifier);
            }
            Some('"') => {
                self.log_parse_error("missing whitespace after doctype public keyword");
                self.set_current_doctype_public_identifier_empty();
                self.switch_to(TokenizerState::DoctypePublicIdentifierDoubleQuoted);
            }
            Some('\'') => {
                self.log_parse_error("missing whitespace after doctype public keyword");
                self.set_current_doctype_public_identifier_empty();
                self.switch_to(TokenizerState::DoctypePublicIdentifierSingleQuoted);
            }
            Some('>') => {
                self.log_parse_error("missing doctype public identifier");
                self.force_quirks_on_current_doctype();
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            None => {
                self.log_parse_error("eof in doctype");
                self.force_quirks_on_current_doctype();
                self.emit_current_token();
                self.emit_eof_token();
            }
            Some(_) => {
                self.log_parse_error("missing quote before doctype public identifier");
                self.force_quirks_on_current_doctype();
                self.reconsume_in(TokenizerState::BogusDoctype);
            }
        }
    }

    /// [§ 13.2.5.58 Before DOCTYPE public identifier state](https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-public-identifier-state)
    fn handle_before_doctype_public_identifier_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some('"') => {
                self.set_current_doctype_public_identifier_empty();
                self.switch_to(TokenizerState::DoctypePublicIdentifierDoubleQuoted);
            }
            Some('\'') => {
                self.set_current_doctype_public_identifier_empty();
                self.switch_to(TokenizerState::DoctypePublicIdentifierSingleQuoted);
            }
            Some('>') => {
                self.log_parse_error("missing doctype public identifier");
                self.force_quirks_on_current_doctype();
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            None => {
                self.log_parse_error("eof in doctype");
                self.force_quirks_on_current_doctype();
                self.emit_current_token();
                self.emit_eof_token();
            }
            Some(_) => {
                self.log_parse_error("missing quote before doctype public identifier");
                self.force_quirks_on_current_doctype();
                self.reconsume_in(TokenizerState::BogusDoctype);
            }
        }
    }

    /// [§ 13.2.5.59 DOCTYPE public identifier (double-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-public-identifier-(double-quoted)-state)
    /// and [§ 13.2.5.60 DOCTYPE public identifier (single-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-public-identifier-(single-quoted)-state)
    fn handle_doctype_public_identifier_quoted_state(&mut self, quote: char) {
        match self.current_input_character {
            Some(c) if c == quote => self.switch_to(TokenizerState::AfterDoctypePublicIdentifier),
            Some('\0') => {
                self.log_parse_error("unexpected null character");
                self.append_to_current_doctype_public_identifier(REPLACEMENT_CHARACTER);
            }
            Some('>') => {
                self.log_parse_error("abrupt doctype public identifier");
                self.force_quirks_on_current_doctype();
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            Some(c) => self.append_to_current_doctype_public_identifier(c),
            None => {
                self.log_parse_error("eof in doctype");
                self.force_quirks_on_current_doctype();
                self.emit_current_token();
                self.emit_eof_token();
            }
        }
    }

    /// [§ 13.2.5.61 After DOCTYPE public identifier state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-public-identifier-state)
    fn handle_after_doctype_public_identifier_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BetweenDoctypePublicAndSystemIdentifiers);
            }
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            Some('"') => {
                self.log_parse_error("missing whitespace between doctype public and system identifiers");
                self.set_current_doctype_system_identifier_empty();
                self.switch_to(TokenizerState::DoctypeSystemIdentifierDoubleQuoted);
            }
            Some('\'') => {
                self.log_parse_error("missing whitespace between doctype public and system identifiers");
                self.set_current_doctype_system_identifier_empty();
                self.switch_to(TokenizerState::DoctypeSystemIdentifierSingleQuoted);
            }
            None => {
                self.log_parse_error("eof in doctype");
                self.force_quirks_on_current_doctype();
                self.emit_current_token();
                self.emit_eof_token();
            }
            Some(_) => {
                self.log_parse_error("missing quote before doctype system identifier");
                self.force_quirks_on_current_doctype();
                self.reconsume_in(TokenizerState::BogusDoctype);
            }
        }
    }

    /// [§ 13.2.5.62 Between DOCTYPE public and system identifiers state](https://html.spec.whatwg.org/multipage/parsing.html#between-doctype-public-and-system-identifiers-state)
    fn handle_between_doctype_public_and_system_identifiers_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            Some('"') => {
                self.set_current_doctype_system_identifier_empty();
                self.switch_to(TokenizerState::DoctypeSystemIdentifierDoubleQuoted);
            }
            Some('\'') => {
                self.set_current_doctype_system_identifier_empty();
                self.switch_to(TokenizerState::DoctypeSystemIdentifierSingleQuoted);
            }
            None => {
                self.log_parse_error("eof in doctype");
                self.force_quirks_on_current_doctype();
                self.emit_current_token();
                self.emit_eof_token();
            }
            Some(_) => {
                self.log_parse_error("missing quote before doctype system identifier");
                self.force_quirks_on_current_doctype();
                self.reconsume_in(TokenizerState::BogusDoctype);
            }
        }
    }

    /// [§ 13.2.5.63 After DOCTYPE system keyword state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-system-keyword-state)
    fn handle_after_doctype_system_keyword_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BeforeDoctypeSystemIdentifier);
            }
            Some('"') => {
                self.log_parse_error("missing whitespace after doctype system keyword");
                self.set_current_doctype_system_identifier_empty();
                self.switch_to(TokenizerState::DoctypeSystemIdentifierDoubleQuoted);
            }
            Some('\'') => {
                self.log_parse_error("missing whitespace after doctype system keyword");
                self.set_current_doctype_system_identifier_empty();
                self.switch_to(TokenizerState::DoctypeSystemIdentifierSingleQuoted);
            }
            Some('>') => {
                self.log_parse_error("missing doctype system identifier");
                self.force_quirks_on_current_doctype();
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            None => {
                self.log_parse_error("eof in doctype");
                self.force_quirks_on_current_doctype();
                self.emit_current_token();
                self.emit_eof_token();
            }
            Some(_) => {
                self.log_parse_error("missing quote before doctype system identifier");
                self.force_quirks_on_current_doctype();
                self.reconsume_in(TokenizerState::BogusDoctype);
            }
        }
    }

    /// [§ 13.2.5.64 Before DOCTYPE system identifier state](https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-system-identifier-state)
    fn handle_before_doctype_system_identifier_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some('"') => {
                self.set_current_doctype_system_identifier_empty();
                self.switch_to(TokenizerState::DoctypeSystemIdentifierDoubleQuoted);
            }
            Some('\'') => {
                self.set_current_doctype_system_identifier_empty();
                self.switch_to(TokenizerState::DoctypeSystemIdentifierSingleQuoted);
            }
            Some('>') => {
                self.log_parse_error("missing doctype system identifier");
                self.force_quirks_on_current_doctype();
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            None => {
                self.log_parse_error("eof in doctype");
                self.force_quirks_on_current_doctype();
                self.emit_current_token();
                self.emit_eof_token();
            }
            Some(_) => {
                self.log_parse_error("missing quote before doctype system identifier");
                self.force_quirks_on_current_doctype();
                self.reconsume_in(TokenizerState::BogusDoctype);
            }
        }
    }

    /// [§ 13.2.5.65 DOCTYPE system identifier (double-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-system-identifier-(double-quoted)-state)
    /// and [§ 13.2.5.66 DOCTYPE system identifier (single-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-system-identifier-(single-quoted)-state)
    fn handle_doctype_system_identifier_quoted_state(&mut self, quote: char) {
        match self.current_input_character {
            Some(c) if c == quote => self.switch_to(TokenizerState::AfterDoctypeSystemIdentifier),
            Some('\0') => {
                self.log_parse_error("unexpected null character");
                self.append_to_current_doctype_system_identifier(REPLACEMENT_CHARACTER);
            }
            Some('>') => {
                self.log_parse_error("abrupt doctype system identifier");
                self.force_quirks_on_current_doctype();
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            Some(c) => self.append_to_current_doctype_system_identifier(c),
            None => {
                self.log_parse_error("eof in doctype");
                self.force_quirks_on_current_doctype();
                self.emit_current_token();
                self.emit_eof_token();
            }
        }
    }

    /// [§ 13.2.5.67 After DOCTYPE system identifier state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-system-identifier-state)
    fn handle_after_doctype_system_identifier_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            None => {
                self.log_parse_error("eof in doctype");
                self.force_quirks_on_current_doctype();
                self.emit_current_token();
                self.emit_eof_token();
            }
            Some(_) => {
                self.log_parse_error("unexpected character after doctype system identifier");
                self.reconsume_in(TokenizerState::BogusDoctype);
            }
        }
    }

    /// [§ 13.2.5.68 Bogus DOCTYPE state](https://html.spec.whatwg.org/multipage/parsing.html#bogus-doctype-state)
    fn handle_bogus_doctype_state(&mut self) {
        match self.current_input_character {
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            Some('\0') => self.log_parse_error("unexpected null character"),
            Some(_) => {}
            None => {
                self.emit_current_token();
                self.emit_eof_token();
            }
        }
    }

    /// [§ 13.2.5.41 Bogus comment state](https://html.spec.whatwg.org/multipage/parsing.html#bogus-comment-state)
    fn handle_bogus_comment_state(&mut self) {
        match self.current_input_character {
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            None => {
                self.emit_current_token();
                self.emit_eof_token();
            }
            Some('\0') => {
                self.log_parse_error("unexpected null character");
                self.append_to_current_comment(REPLACEMENT_CHARACTER);
            }
            Some(c) => self.append_to_current_comment(c),
        }
    }

    fn emit_current_token(&mut self) {
        if let Some(token) = self.current_token.take() {
            self.emit_token(token);
        }
    }

    fn append_to_current_tag_name(&mut self, c: char) {
        if let Some(token) = &mut self.current_token {
            token.append_to_tag_name(c);
        }
    }

    fn append_to_current_comment(&mut self, c: char) {
        if let Some(token) = &mut self.current_token {
            token.append_to_comment(c);
        }
    }

    fn append_to_current_doctype_name(&mut self, c: char) {
        if let Some(token) = &mut self.current_token {
            token.append_to_doctype_name(c);
        }
    }

    fn append_to_current_doctype_public_identifier(&mut self, c: char) {
        if let Some(token) = &mut self.current_token {
            token.append_to_doctype_public_identifier(c);
        }
    }

    fn append_to_current_doctype_system_identifier(&mut self, c: char) {
        if let Some(token) = &mut self.current_token {
            token.append_to_doctype_system_identifier(c);
        }
    }

    fn set_current_doctype_public_identifier_empty(&mut self) {
        if let Some(token) = &mut self.current_token {
            token.set_doctype_public_identifier_empty();
        }
    }

    fn set_current_doctype_system_identifier_empty(&mut self) {
        if let Some(token) = &mut self.current_token {
            token.set_doctype_system_identifier_empty();
        }
    }

    fn force_quirks_on_current_doctype(&mut self) {
        if let Some(token) = &mut self.current_token {
            token.set_force_quirks();
        }
    }

    fn start_new_attribute(&mut self) {
        if let Some(token) = &mut self.current_token {
            token.start_new_attribute();
        }
    }

    fn append_to_current_attribute_name(&mut self, c: char) {
        if let Some(token) = &mut self.current_token {
            token.append_to_current_attribute_name(c);
        }
    }

    fn append_to_current_attribute_value(&mut self, c: char) {
        if let Some(token) = &mut self.current_token {
            token.append_to_current_attribute_value(c);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{HTMLTokenizer, Token};

    fn tokenize(input: &str) -> Vec<Token> {
        HTMLTokenizer::new(input.to_string()).run()
    }

    #[test]
    fn data_state_emits_characters_then_eof() {
        let tokens = tokenize("Hi");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0], Token::new_character('H'));
        assert_eq!(tokens[1], Token::new_character('i'));
        assert!(tokens[2].is_eof());
    }

    #[test]
    fn doctype_with_public_identifier_is_captured() {
        let tokens = tokenize("<!DOCTYPE HTML PUBLIC \"-//IETF//DTD HTML 2.0//EN\">");
        match &tokens[0] {
            Token::Doctype {
                name,
                public_identifier,
                ..
            } => {
                assert_eq!(name.as_deref(), Some("html"));
                assert_eq!(public_identifier.as_deref(), Some("-//IETF//DTD HTML 2.0//EN"));
            }
            other => panic!("expected DOCTYPE token, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_attribute_is_dropped() {
        let tokens = tokenize("<div class='x' class=\"y\">");
        match &tokens[0] {
            Token::StartTag { attributes, .. } => {
                assert_eq!(attributes.len(), 1);
                assert_eq!(attributes[0].name, "class");
                assert_eq!(attributes[0].value, "x");
            }
            other => panic!("expected StartTag token, got {other:?}"),
        }
    }

    #[test]
    fn self_closing_flag_is_set() {
        let tokens = tokenize("<br/>");
        match &tokens[0] {
            Token::StartTag { self_closing, .. } => assert!(self_closing),
            other => panic!("expected StartTag token, got {other:?}"),
        }
    }

    #[test]
    fn rcdata_end_tag_mismatch_emits_literal_characters() {
        let mut tokenizer = HTMLTokenizer::new("a</b>c".to_string());
        tokenizer.switch_content_model(super::ContentModel::RcData);
        tokenizer.last_start_tag_name = Some("title".to_string());
        let tokens = tokenizer.run();
        // `</b>` is not an appropriate end tag for `title`, so it is emitted
        // back out as literal characters rather than closing the element.
        let chars: String = tokens
            .iter()
            .filter_map(|t| match t {
                Token::Character { data } => Some(*data),
                _ => None,
            })
            .collect();
        assert_eq!(chars, "a</b>c");
    }
}
