use koala_dom::{DomTree, NodeId, NodeType};

use crate::quirks::QuirksMode;

/// [§ 2.1 Documents](https://dom.spec.whatwg.org/#interface-document)
///
/// The result of parsing: the DOM tree plus the DOCTYPE and quirks-mode
/// metadata that only exist for the lifetime of a single parse, not as part
/// of the tree itself.
pub struct Document {
    tree: DomTree,
    doctype_name: Option<String>,
    public_identifier: Option<String>,
    system_identifier: Option<String>,
    quirks_mode: QuirksMode,
}

impl Document {
    pub(crate) fn new(
        tree: DomTree,
        doctype_name: Option<String>,
        public_identifier: Option<String>,
        system_identifier: Option<String>,
        quirks_mode: QuirksMode,
    ) -> Self {
        Self {
            tree,
            doctype_name,
            public_identifier,
            system_identifier,
            quirks_mode,
        }
    }

    /// The underlying arena-backed tree.
    #[must_use]
    pub const fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// The DOCTYPE name, if a DOCTYPE token was seen (e.g. `"html"`).
    #[must_use]
    pub fn doctype_name(&self) -> Option<&str> {
        self.doctype_name.as_deref()
    }

    /// The DOCTYPE's public identifier, if present.
    #[must_use]
    pub fn public_identifier(&self) -> Option<&str> {
        self.public_identifier.as_deref()
    }

    /// The DOCTYPE's system identifier, if present.
    #[must_use]
    pub fn system_identifier(&self) -> Option<&str> {
        self.system_identifier.as_deref()
    }

    /// [§ 13.2.6.2 The "initial" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#the-initial-insertion-mode)
    #[must_use]
    pub const fn quirks_mode(&self) -> QuirksMode {
        self.quirks_mode
    }

    /// The root `html` element, if the document has one.
    #[must_use]
    pub fn document_element(&self) -> Option<NodeId> {
        self.tree.document_element()
    }

    /// The `head` element, found by walking the document element's children.
    #[must_use]
    pub fn head(&self) -> Option<NodeId> {
        let html = self.document_element()?;
        self.tree
            .children(html)
            .iter()
            .find(|&&child| self.tree.as_element(child).is_some_and(|e| e.tag_name == "head"))
            .copied()
    }

    /// The `body` element.
    #[must_use]
    pub fn body(&self) -> Option<NodeId> {
        self.tree.body()
    }

    /// The concatenated text content of the first `title` element under
    /// `head`, or `None` if there is no title element.
    #[must_use]
    pub fn title(&self) -> Option<String> {
        let head = self.head()?;
        let title_id = self
            .tree
            .children(head)
            .iter()
            .find(|&&child| self.tree.as_element(child).is_some_and(|e| e.tag_name == "title"))
            .copied()?;

        let mut text = String::new();
        for child in self.tree.children(title_id) {
            if let Some(NodeType::Text(data)) = self.tree.get(*child).map(|n| &n.node_type) {
                text.push_str(data);
            }
        }
        Some(text)
    }
}
