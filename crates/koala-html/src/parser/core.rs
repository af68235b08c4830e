use strum_macros::Display;

use koala_common::warning::warn_once;
use koala_dom::{AttributesMap, DomTree, ElementData, NodeId, NodeType};

use crate::document::Document;
use crate::quirks::{self, QuirksMode};
use crate::tokenizer::{Attribute, ContentModel, HTMLTokenizer, Token};

/// [§ 13.2.4.1 The insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#the-insertion-mode)
///
/// "The insertion mode is a state variable that controls the primary operation
/// of the tree construction stage." Reduced to the modes this implementation
/// drives; table/select/template/frameset modes and the after-body family are
/// out of scope (see crate-level docs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InsertionMode {
    /// [§ 13.2.6.4.1 The "initial" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#the-initial-insertion-mode)
    Initial,
    /// [§ 13.2.6.4.2 The "before html" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#the-before-html-insertion-mode)
    BeforeHtml,
    /// [§ 13.2.6.4.3 The "before head" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#the-before-head-insertion-mode)
    BeforeHead,
    /// [§ 13.2.6.4.4 The "in head" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inhead)
    InHead,
    /// [§ 13.2.6.4.6 The "after head" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#the-after-head-insertion-mode)
    AfterHead,
    /// [§ 13.2.6.4.7 The "in body" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inbody)
    InBody,
    /// [§ 13.2.6.4.8 The "text" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-incdata)
    Text,
}

/// [§ 13.2.2 Parse errors](https://html.spec.whatwg.org/multipage/parsing.html#parse-errors)
///
/// "The handling of parse errors is well-defined... a conformance checker
/// must report at least one parse error condition to the user if one or more
/// parse error conditions exist in the document."
#[derive(Debug, Clone)]
pub struct ParseIssue {
    /// Description of the parse error.
    pub message: String,
    /// Best-effort position: how many tokens had been processed so far.
    pub token_index: usize,
}

const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "center", "details", "dialog", "dir", "div",
    "dl", "fieldset", "figcaption", "figure", "footer", "header", "hgroup", "main", "menu", "nav",
    "ol", "search", "section", "summary", "ul",
];

const HEADINGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Default scope boundary markers for [§ 13.2.4.2 has an element in
/// scope](https://html.spec.whatwg.org/multipage/parsing.html#has-an-element-in-scope),
/// minus the MathML/SVG entries (foreign content is out of scope here).
const SCOPE_BOUNDARY: &[&str] = &[
    "applet", "caption", "html", "table", "td", "th", "marquee", "object", "template",
];

/// [§ 13.2.6 Tree construction](https://html.spec.whatwg.org/multipage/parsing.html#tree-construction)
///
/// Token-driven insertion-mode state machine that builds a [`Document`] from
/// a pull-based [`HTMLTokenizer`].
pub struct HTMLParser {
    insertion_mode: InsertionMode,
    original_insertion_mode: Option<InsertionMode>,
    stack_of_open_elements: Vec<NodeId>,
    head_element_pointer: Option<NodeId>,
    tree: DomTree,
    stopped: bool,
    issues: Vec<ParseIssue>,
    token_index: usize,
    doctype_name: Option<String>,
    public_identifier: Option<String>,
    system_identifier: Option<String>,
    quirks_mode: QuirksMode,
}

impl Default for HTMLParser {
    fn default() -> Self {
        Self::new()
    }
}

impl HTMLParser {
    /// Create a parser with an empty tree, ready to run from the initial
    /// insertion mode.
    #[must_use]
    pub fn new() -> Self {
        Self {
            insertion_mode: InsertionMode::Initial,
            original_insertion_mode: None,
            stack_of_open_elements: Vec::new(),
            head_element_pointer: None,
            tree: DomTree::new(),
            stopped: false,
            issues: Vec::new(),
            token_index: 0,
            doctype_name: None,
            public_identifier: None,
            system_identifier: None,
            quirks_mode: QuirksMode::NoQuirks,
        }
    }

    /// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
    ///
    /// Drive `tokenizer` one token at a time, feeding each to the insertion
    /// mode currently in effect. After a token is processed, if it carries a
    /// one-shot [`Token::new_state`] request (set by [`Self::parse_raw_text`]),
    /// the tokenizer's content model is switched before the next token is
    /// pulled — this is the interleaving the generic RCDATA/raw text element
    /// parsing algorithms depend on.
    #[must_use]
    pub fn run(mut self, tokenizer: &mut HTMLTokenizer) -> (Document, Vec<ParseIssue>) {
        loop {
            let mut token = tokenizer.next_token();
            let is_eof = token.is_eof();

            self.process_token(&mut token);

            if let Token::StartTag {
                new_state: Some(model),
                ..
            } = &token
            {
                tokenizer.switch_content_model(*model);
            }

            self.token_index += 1;
            if is_eof || self.stopped {
                break;
            }
        }

        let issues = std::mem::take(&mut self.issues);
        let document = Document::new(
            self.tree,
            self.doctype_name,
            self.public_identifier,
            self.system_identifier,
            self.quirks_mode,
        );
        (document, issues)
    }

    fn parse_warning(&mut self, message: &str) {
        warn_once("HTML Parser", message);
        self.issues.push(ParseIssue {
            message: message.to_string(),
            token_index: self.token_index,
        });
    }

    /// [§ 13.2.6 Tree construction](https://html.spec.whatwg.org/multipage/parsing.html#tree-construction-dispatcher)
    fn process_token(&mut self, token: &mut Token) {
        match self.insertion_mode {
            InsertionMode::Initial => self.handle_initial_mode(token),
            InsertionMode::BeforeHtml => self.handle_before_html_mode(token),
            InsertionMode::BeforeHead => self.handle_before_head_mode(token),
            InsertionMode::InHead => self.handle_in_head_mode(token),
            InsertionMode::AfterHead => self.handle_after_head_mode(token),
            InsertionMode::InBody => self.handle_in_body_mode(token),
            InsertionMode::Text => self.handle_text_mode(token),
        }
    }

    /// "Reprocess the token" in the (by now updated) insertion mode.
    fn reprocess_token(&mut self, token: &mut Token) {
        self.process_token(token);
    }

    /// [§ 12.1.4 ASCII whitespace](https://infra.spec.whatwg.org/#ascii-whitespace)
    const fn is_whitespace(c: char) -> bool {
        matches!(c, '\t' | '\n' | '\x0C' | '\r' | ' ')
    }

    fn current_node(&self) -> Option<NodeId> {
        self.stack_of_open_elements.last().copied()
    }

    /// [§ 13.2.6.1 Appropriate place for inserting a node](https://html.spec.whatwg.org/multipage/parsing.html#appropriate-place-for-inserting-a-node)
    ///
    /// Simplified: always the current node. Foster parenting (the table-only
    /// exception to this rule) does not apply; this implementation has no
    /// table insertion modes.
    fn insertion_location(&self) -> NodeId {
        self.current_node().unwrap_or(NodeId::ROOT)
    }

    fn attributes_to_map(attributes: &[Attribute]) -> AttributesMap {
        attributes.iter().map(|attr| (attr.name.clone(), attr.value.clone())).collect()
    }

    fn create_element(&mut self, tag_name: &str, attributes: &[Attribute]) -> NodeId {
        self.tree.alloc(NodeType::Element(ElementData {
            tag_name: tag_name.to_string(),
            attrs: Self::attributes_to_map(attributes),
        }))
    }

    fn append_child(&mut self, parent_id: NodeId, child_id: NodeId) {
        self.tree.append_child(parent_id, child_id);
    }

    /// [§ 13.2.6.1 Insert a character](https://html.spec.whatwg.org/multipage/parsing.html#insert-a-character)
    ///
    /// Appends to the last child if it is already a Text node, so that a run
    /// of character tokens coalesces into a single text node instead of one
    /// node per character.
    fn insert_character(&mut self, c: char) {
        let parent_id = self.insertion_location();

        if let Some(&last_child_id) = self.tree.children(parent_id).last()
            && let Some(node) = self.tree.get_mut(last_child_id)
            && let NodeType::Text(text) = &mut node.node_type
        {
            text.push(c);
            return;
        }

        let text_id = self.tree.alloc(NodeType::Text(c.to_string()));
        self.append_child(parent_id, text_id);
    }

    /// [§ 13.2.6.1 Insert a comment](https://html.spec.whatwg.org/multipage/parsing.html#insert-a-comment)
    fn insert_comment(&mut self, data: &str) {
        let parent_id = self.insertion_location();
        let comment_id = self.tree.alloc(NodeType::Comment(data.to_string()));
        self.append_child(parent_id, comment_id);
    }

    fn insert_comment_to_document(&mut self, data: &str) {
        let comment_id = self.tree.alloc(NodeType::Comment(data.to_string()));
        self.append_child(NodeId::ROOT, comment_id);
    }

    /// [§ 13.2.6.1 Insert an HTML element](https://html.spec.whatwg.org/multipage/parsing.html#insert-an-html-element)
    ///
    /// # Panics
    ///
    /// Panics if `token` is not a `StartTag`, indicating a caller bug.
    fn insert_html_element(&mut self, token: &Token) -> NodeId {
        let Token::StartTag { name, attributes, .. } = token else {
            panic!("insert_html_element called with non-StartTag token");
        };

        let element_id = self.create_element(name, attributes);
        let parent_id = self.insertion_location();
        self.append_child(parent_id, element_id);
        self.stack_of_open_elements.push(element_id);
        element_id
    }

    fn get_tag_name(&self, id: NodeId) -> Option<&str> {
        self.tree.as_element(id).map(|data| data.tag_name.as_str())
    }

    fn pop_until_tag(&mut self, tag_name: &str) {
        while let Some(id) = self.stack_of_open_elements.pop() {
            if self.get_tag_name(id) == Some(tag_name) {
                break;
            }
        }
    }

    fn pop_until_one_of(&mut self, tag_names: &[&str]) {
        while let Some(id) = self.stack_of_open_elements.pop() {
            if let Some(name) = self.get_tag_name(id)
                && tag_names.contains(&name)
            {
                break;
            }
        }
    }

    /// [§ 13.2.4.2 Has an element in scope](https://html.spec.whatwg.org/multipage/parsing.html#has-an-element-in-scope)
    ///
    /// Walks the stack of open elements from the current node down, stopping
    /// (failure) at the first [`SCOPE_BOUNDARY`] element, or succeeding if
    /// `tag_name` is found first.
    fn has_element_in_scope(&self, tag_name: &str) -> bool {
        for &id in self.stack_of_open_elements.iter().rev() {
            match self.get_tag_name(id) {
                Some(name) if name == tag_name => return true,
                Some(name) if SCOPE_BOUNDARY.contains(&name) => return false,
                _ => {}
            }
        }
        false
    }

    /// Closes an open `p` (or other `tag_name`) element if one is in scope,
    /// per the "close a p element" step used by block-level start tags.
    fn close_element_if_in_scope(&mut self, tag_name: &str) {
        if self.has_element_in_scope(tag_name) {
            self.pop_until_tag(tag_name);
        }
    }

    /// [§ 13.2.6.2 Generic RCDATA/raw text element parsing
    /// algorithms](https://html.spec.whatwg.org/multipage/parsing.html#generic-rawtext-element-parsing-algorithm)
    ///
    /// Inserts the element, saves the current insertion mode as the original
    /// one, switches to [`InsertionMode::Text`], and arms the token's
    /// [`Token::new_state`] feedback field so the driver loop in
    /// [`Self::run`] switches the tokenizer's content model once this start
    /// tag has been fully processed.
    fn parse_raw_text(&mut self, token: &mut Token) {
        let model = if token.tag_name() == Some("title") {
            ContentModel::RcData
        } else {
            ContentModel::RawText
        };
        let _ = self.insert_html_element(token);
        self.original_insertion_mode = Some(self.insertion_mode);
        self.insertion_mode = InsertionMode::Text;
        token.set_new_state(model);
    }

    /// [§ 13.2.6.4.1 The "initial" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#the-initial-insertion-mode)
    fn handle_initial_mode(&mut self, token: &mut Token) {
        match token {
            Token::Character { data } if Self::is_whitespace(*data) => {}
            Token::Character { .. } => {
                self.quirks_mode = QuirksMode::Quirks;
                self.insertion_mode = InsertionMode::BeforeHtml;
                self.reprocess_token(token);
            }
            Token::Comment { data } => self.insert_comment_to_document(data),
            Token::Doctype {
                name,
                public_identifier,
                system_identifier,
                force_quirks,
            } => {
                self.quirks_mode = quirks::determine_quirks_mode(
                    name.as_deref(),
                    public_identifier.as_deref(),
                    system_identifier.as_deref(),
                    *force_quirks,
                );
                self.doctype_name = name.clone();
                self.public_identifier = public_identifier.clone();
                self.system_identifier = system_identifier.clone();
                self.insertion_mode = InsertionMode::BeforeHtml;
            }
            _ => {
                self.quirks_mode = QuirksMode::Quirks;
                self.insertion_mode = InsertionMode::BeforeHtml;
                self.reprocess_token(token);
            }
        }
    }

    /// [§ 13.2.6.4.2 The "before html" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#the-before-html-insertion-mode)
    fn handle_before_html_mode(&mut self, token: &mut Token) {
        match token {
            Token::Doctype { .. } => self.parse_warning("unexpected DOCTYPE before html"),
            Token::Comment { data } => self.insert_comment_to_document(data),
            Token::Character { data } if Self::is_whitespace(*data) => {}
            Token::StartTag { name, attributes, .. } if name == "html" => {
                let html_id = self.create_element(name, attributes);
                self.append_child(NodeId::ROOT, html_id);
                self.stack_of_open_elements.push(html_id);
                self.insertion_mode = InsertionMode::BeforeHead;
            }
            Token::EndTag { name, .. } if matches!(name.as_str(), "head" | "body" | "html" | "br") => {
                self.before_html_anything_else(token);
            }
            Token::EndTag { .. } => self.parse_warning("unexpected end tag before html"),
            _ => self.before_html_anything_else(token),
        }
    }

    fn before_html_anything_else(&mut self, token: &mut Token) {
        let html_id = self.create_element("html", &[]);
        self.append_child(NodeId::ROOT, html_id);
        self.stack_of_open_elements.push(html_id);
        self.insertion_mode = InsertionMode::BeforeHead;
        self.reprocess_token(token);
    }

    /// [§ 13.2.6.4.3 The "before head" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#the-before-head-insertion-mode)
    fn handle_before_head_mode(&mut self, token: &mut Token) {
        match token {
            Token::Character { data } if Self::is_whitespace(*data) => {}
            Token::Comment { data } => self.insert_comment(data),
            Token::Doctype { .. } => self.parse_warning("unexpected DOCTYPE before head"),
            Token::StartTag { name, .. } if name == "html" => self.handle_in_body_mode(token),
            Token::StartTag { name, .. } if name == "head" => {
                let head_id = self.insert_html_element(token);
                self.head_element_pointer = Some(head_id);
                self.insertion_mode = InsertionMode::InHead;
            }
            Token::EndTag { name, .. } if matches!(name.as_str(), "head" | "body" | "html" | "br") => {
                self.before_head_anything_else(token);
            }
            Token::EndTag { .. } => self.parse_warning("unexpected end tag before head"),
            _ => self.before_head_anything_else(token),
        }
    }

    fn before_head_anything_else(&mut self, token: &mut Token) {
        let head_id = self.create_element("head", &[]);
        let parent_id = self.insertion_location();
        self.append_child(parent_id, head_id);
        self.stack_of_open_elements.push(head_id);
        self.head_element_pointer = Some(head_id);
        self.insertion_mode = InsertionMode::InHead;
        self.reprocess_token(token);
    }

    /// [§ 13.2.6.4.4 The "in head" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inhead)
    fn handle_in_head_mode(&mut self, token: &mut Token) {
        match token {
            Token::Character { data } if Self::is_whitespace(*data) => self.insert_character(*data),
            Token::Comment { data } => self.insert_comment(data),
            Token::Doctype { .. } => self.parse_warning("unexpected DOCTYPE in head"),
            Token::StartTag { name, .. } if name == "html" => self.handle_in_body_mode(token),
            Token::StartTag { name, .. }
                if matches!(name.as_str(), "base" | "basefont" | "bgsound" | "link" | "meta") =>
            {
                let _ = self.insert_html_element(token);
                let _ = self.stack_of_open_elements.pop();
            }
            Token::StartTag { name, .. }
                if matches!(name.as_str(), "title" | "style" | "noframes" | "script") =>
            {
                self.parse_raw_text(token);
            }
            Token::EndTag { name, .. } if name == "head" => {
                let _ = self.stack_of_open_elements.pop();
                self.insertion_mode = InsertionMode::AfterHead;
            }
            Token::EndTag { name, .. } if matches!(name.as_str(), "body" | "html" | "br") => {
                self.in_head_anything_else(token);
            }
            Token::EndTag { .. } => self.parse_warning("unexpected end tag in head"),
            _ => self.in_head_anything_else(token),
        }
    }

    fn in_head_anything_else(&mut self, token: &mut Token) {
        let _ = self.stack_of_open_elements.pop();
        self.insertion_mode = InsertionMode::AfterHead;
        self.reprocess_token(token);
    }

    /// [§ 13.2.6.4.8 The "text" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-incdata)
    fn handle_text_mode(&mut self, token: &mut Token) {
        match token {
            Token::Character { data } => self.insert_character(*data),
            Token::EndOfFile => {
                self.parse_warning("eof inside RCDATA/RAWTEXT element");
                let _ = self.stack_of_open_elements.pop();
                self.insertion_mode = self.original_insertion_mode.unwrap_or(InsertionMode::InBody);
                self.reprocess_token(token);
            }
            Token::EndTag { .. } => {
                let _ = self.stack_of_open_elements.pop();
                self.insertion_mode = self.original_insertion_mode.unwrap_or(InsertionMode::InBody);
            }
            _ => self.parse_warning("unexpected token in text mode"),
        }
    }

    /// [§ 13.2.6.4.6 The "after head" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#the-after-head-insertion-mode)
    fn handle_after_head_mode(&mut self, token: &mut Token) {
        match token {
            Token::Character { data } if Self::is_whitespace(*data) => self.insert_character(*data),
            Token::Comment { data } => self.insert_comment(data),
            Token::Doctype { .. } => self.parse_warning("unexpected DOCTYPE after head"),
            Token::StartTag { name, .. } if name == "html" => self.handle_in_body_mode(token),
            Token::StartTag { name, .. } if name == "body" => {
                let _ = self.insert_html_element(token);
                self.insertion_mode = InsertionMode::InBody;
            }
            Token::StartTag { name, .. } if name == "head" => {
                self.parse_warning("unexpected head start tag after head");
            }
            Token::EndTag { name, .. } if matches!(name.as_str(), "body" | "html" | "br") => {
                self.after_head_anything_else(token);
            }
            Token::EndTag { .. } => self.parse_warning("unexpected end tag after head"),
            _ => self.after_head_anything_else(token),
        }
    }

    fn after_head_anything_else(&mut self, token: &mut Token) {
        let body_id = self.create_element("body", &[]);
        let parent_id = self.insertion_location();
        self.append_child(parent_id, body_id);
        self.stack_of_open_elements.push(body_id);
        self.insertion_mode = InsertionMode::InBody;
        self.reprocess_token(token);
    }

    /// [§ 13.2.6.4.7 The "in body" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inbody)
    ///
    /// Covers character/comment/DOCTYPE handling, block-level and heading
    /// elements with p-closing, void elements, and a generic fallback that
    /// inserts any other start tag as an ordinary element. The active
    /// formatting elements list and adoption agency algorithm are out of
    /// scope; inline formatting elements (`b`, `i`, `em`, ...) fall through to
    /// the generic start-tag case.
    fn handle_in_body_mode(&mut self, token: &mut Token) {
        match token {
            Token::Character { data: '\0' } => self.parse_warning("unexpected null character"),
            Token::Character { data } => self.insert_character(*data),
            Token::Comment { data } => self.insert_comment(data),
            Token::Doctype { .. } => self.parse_warning("unexpected DOCTYPE in body"),

            // "A start tag whose tag name is 'html'": merge any attributes not
            // already present onto the root html element.
            Token::StartTag { name, attributes, .. } if name == "html" => {
                self.parse_warning("unexpected html start tag in body");
                if let Some(&html_id) = self.stack_of_open_elements.first()
                    && let Some(node) = self.tree.get_mut(html_id)
                    && let NodeType::Element(data) = &mut node.node_type
                {
                    for attr in attributes {
                        let _ = data.attrs.entry(attr.name.clone()).or_insert_with(|| attr.value.clone());
                    }
                }
            }

            Token::StartTag { name, .. } if BLOCK_ELEMENTS.contains(&name.as_str()) => {
                self.close_element_if_in_scope("p");
                let _ = self.insert_html_element(token);
            }

            Token::StartTag { name, .. } if name == "p" => {
                self.close_element_if_in_scope("p");
                let _ = self.insert_html_element(token);
            }

            Token::StartTag { name, .. } if HEADINGS.contains(&name.as_str()) => {
                self.close_element_if_in_scope("p");
                if let Some(id) = self.current_node()
                    && self.get_tag_name(id).is_some_and(|tag| HEADINGS.contains(&tag))
                {
                    let _ = self.stack_of_open_elements.pop();
                }
                let _ = self.insert_html_element(token);
            }

            Token::StartTag { name, .. } if VOID_ELEMENTS.contains(&name.as_str()) => {
                let _ = self.insert_html_element(token);
                let _ = self.stack_of_open_elements.pop();
            }

            Token::StartTag { name, .. } if matches!(name.as_str(), "title" | "style" | "script") => {
                self.parse_raw_text(token);
            }

            Token::StartTag { .. } => {
                let _ = self.insert_html_element(token);
            }

            Token::EndTag { name, .. } if matches!(name.as_str(), "body" | "html") => {
                self.stopped = true;
            }

            Token::EndTag { name, .. } if HEADINGS.contains(&name.as_str()) => {
                if HEADINGS.iter().any(|h| self.has_element_in_scope(h)) {
                    self.pop_until_one_of(HEADINGS);
                } else {
                    self.parse_warning("heading end tag with no matching heading in scope");
                }
            }

            Token::EndTag { name, .. } => {
                if self.has_element_in_scope(name) {
                    self.pop_until_tag(name);
                } else {
                    self.parse_warning("end tag with no matching element in scope");
                }
            }

            Token::EndOfFile => self.stopped = true,
        }
    }
}

/// Pretty-print a subtree for debugging and test assertions, one element or
/// text/comment node per line with indentation showing nesting depth.
pub fn print_tree(tree: &DomTree, id: NodeId, indent: usize) {
    let Some(node) = tree.get(id) else { return };
    let pad = "  ".repeat(indent);
    match &node.node_type {
        NodeType::Document => println!("{pad}#document"),
        NodeType::Element(data) => println!("{pad}<{}>", data.tag_name),
        NodeType::Text(text) => println!("{pad}{text:?}"),
        NodeType::Comment(data) => println!("{pad}<!--{data}-->"),
    }
    for &child in tree.children(id) {
        print_tree(tree, child, indent + 1);
    }
}

#[cfg(test)]
mod tests {
    use koala_dom::NodeType;

    use super::HTMLParser;
    use crate::quirks::QuirksMode;
    use crate::tokenizer::HTMLTokenizer;

    fn parse(input: &str) -> (crate::document::Document, Vec<super::ParseIssue>) {
        let mut tokenizer = HTMLTokenizer::new(input.to_string());
        HTMLParser::new().run(&mut tokenizer)
    }

    #[test]
    fn builds_minimal_tree_with_title_and_heading() {
        let (document, _) = parse("<!DOCTYPE html><html><head><title>Hi</title></head><body><h1>Hi</h1><p>there</p></body></html>");
        assert_eq!(document.quirks_mode(), QuirksMode::NoQuirks);
        assert_eq!(document.title().as_deref(), Some("Hi"));
        let body = document.body().expect("body element");
        let children = document.tree().children(body);
        assert_eq!(document.tree().as_element(children[0]).unwrap().tag_name, "h1");
        assert_eq!(document.tree().as_element(children[1]).unwrap().tag_name, "p");
    }

    #[test]
    fn unclosed_paragraphs_become_siblings() {
        let (document, _) = parse("<body><p>first<p>second</body>");
        let body = document.body().expect("body element");
        let children = document.tree().children(body);
        assert_eq!(children.len(), 2);
        assert!(children.iter().all(|&id| document.tree().as_element(id).unwrap().tag_name == "p"));
    }

    #[test]
    fn title_text_is_not_entity_decoded() {
        let (document, _) = parse("<html><head><title>A&B</title></head><body></body></html>");
        assert_eq!(document.title().as_deref(), Some("A&B"));
    }

    #[test]
    fn legacy_doctype_forces_quirks_mode() {
        let (document, _) = parse(
            "<!DOCTYPE HTML PUBLIC \"-//IETF//DTD HTML 2.0//EN\"><html><body></body></html>",
        );
        assert_eq!(document.quirks_mode(), QuirksMode::Quirks);
    }

    #[test]
    fn duplicate_attribute_keeps_first_value() {
        let (document, _) = parse("<body><div id=\"a\" id=\"b\"></div></body>");
        let body = document.body().expect("body element");
        let div = document.tree().children(body)[0];
        let element = document.tree().as_element(div).unwrap();
        assert_eq!(element.attrs.get("id").map(String::as_str), Some("a"));
    }

    #[test]
    fn script_content_is_kept_as_raw_text() {
        let (document, _) = parse("<head><script>a<b</script></head><body></body></html>");
        let head = document.head().expect("head element");
        let script = document
            .tree()
            .children(head)
            .iter()
            .copied()
            .find(|&id| document.tree().as_element(id).is_some_and(|e| e.tag_name == "script"))
            .expect("script element");
        let text: String = document
            .tree()
            .children(script)
            .iter()
            .filter_map(|&id| match &document.tree().get(id).unwrap().node_type {
                NodeType::Text(data) => Some(data.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(text, "a<b");
    }
}
