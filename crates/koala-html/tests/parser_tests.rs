//! Integration tests for the HTML parser facade.

use koala_dom::{DomTree, Node, NodeId, NodeType};
use koala_html::{parse, Document, QuirksMode};

/// Helper to parse HTML and return the resulting document.
fn parse_document(html: &str) -> Document {
    parse(html.to_string()).0
}

/// Helper to get element by tag name (first match, depth-first).
fn find_element(tree: &DomTree, from: NodeId, tag: &str) -> Option<NodeId> {
    if let Some(data) = tree.as_element(from)
        && data.tag_name == tag
    {
        return Some(from);
    }
    for &child_id in tree.children(from) {
        if let Some(found) = find_element(tree, child_id, tag) {
            return Some(found);
        }
    }
    None
}

/// Helper to get concatenated text content of a node.
fn text_content(tree: &DomTree, id: NodeId) -> String {
    let mut result = String::new();
    if let Some(node) = tree.get(id) {
        match &node.node_type {
            NodeType::Text(data) => result.push_str(data),
            _ => {
                for &child_id in tree.children(id) {
                    result.push_str(&text_content(tree, child_id));
                }
            }
        }
    }
    result
}

fn get_node(tree: &DomTree, id: NodeId) -> &Node {
    tree.get(id).expect("node not found")
}

#[test]
fn document_structure_has_html_head_body() {
    let document = parse_document("<!DOCTYPE html><html><head></head><body></body></html>");
    let tree = document.tree();

    let root = get_node(tree, NodeId::ROOT);
    assert!(matches!(root.node_type, NodeType::Document));

    let html_id = find_element(tree, NodeId::ROOT, "html").expect("html element");
    assert!(find_element(tree, html_id, "head").is_some());
    assert!(find_element(tree, html_id, "body").is_some());
    assert_eq!(document.quirks_mode(), QuirksMode::NoQuirks);
}

#[test]
fn text_node_is_preserved() {
    let document = parse_document("<html><body>Hello World</body></html>");
    let tree = document.tree();
    let body_id = find_element(tree, NodeId::ROOT, "body").unwrap();

    assert_eq!(text_content(tree, body_id), "Hello World");
}

#[test]
fn missing_doctype_triggers_quirks_mode() {
    let document = parse_document("<html><body>no doctype here</body></html>");
    assert_eq!(document.quirks_mode(), QuirksMode::Quirks);
}

#[test]
fn implicit_html_head_body_are_synthesized() {
    // No <html>, <head>, or <body> tags at all.
    let document = parse_document("<title>Implicit</title><p>content</p>");
    let tree = document.tree();

    let html_id = find_element(tree, NodeId::ROOT, "html").expect("implicit html");
    assert!(find_element(tree, html_id, "head").is_some());
    let body_id = find_element(tree, html_id, "body").expect("implicit body");
    assert!(find_element(tree, body_id, "p").is_some());
    assert_eq!(document.title().as_deref(), Some("Implicit"));
}

#[test]
fn comment_node_is_inserted() {
    let document = parse_document("<html><body><!-- a comment --></body></html>");
    let tree = document.tree();
    let body_id = find_element(tree, NodeId::ROOT, "body").unwrap();
    let comment_id = tree.children(body_id)[0];

    match &get_node(tree, comment_id).node_type {
        NodeType::Comment(data) => assert_eq!(data, " a comment "),
        other => panic!("expected comment node, got {other:?}"),
    }
}

#[test]
fn adjacent_character_tokens_coalesce_into_one_text_node() {
    let document = parse_document("<html><body>a<!---->bc</body></html>");
    let tree = document.tree();
    let body_id = find_element(tree, NodeId::ROOT, "body").unwrap();

    let text_nodes: Vec<NodeId> = tree
        .children(body_id)
        .iter()
        .copied()
        .filter(|&id| matches!(get_node(tree, id).node_type, NodeType::Text(_)))
        .collect();
    assert_eq!(text_nodes.len(), 2, "comment between runs should split them into two text nodes");
    assert_eq!(text_content(tree, text_nodes[0]), "a");
    assert_eq!(text_content(tree, text_nodes[1]), "bc");
}

#[test]
fn heading_start_tag_closes_previous_open_heading() {
    let document = parse_document("<body><h1>one<h2>two</body>");
    let tree = document.tree();
    let body_id = find_element(tree, NodeId::ROOT, "body").unwrap();
    let children = tree.children(body_id);

    assert_eq!(children.len(), 2);
    assert_eq!(tree.as_element(children[0]).unwrap().tag_name, "h1");
    assert_eq!(tree.as_element(children[1]).unwrap().tag_name, "h2");
}

#[test]
fn style_element_content_is_raw_text() {
    let document = parse_document("<html><head><style>body > p { color: red; }</style></head><body></body></html>");
    let tree = document.tree();
    let style_id = find_element(tree, NodeId::ROOT, "style").expect("style element");

    assert_eq!(text_content(tree, style_id), "body > p { color: red; }");
}

#[test]
fn no_attribute_names_escape_lowercasing() {
    let document = parse_document("<html><body><DIV CLASS=\"Wrapper\"></DIV></body></html>");
    let tree = document.tree();
    let div_id = find_element(tree, NodeId::ROOT, "div").expect("lowercased div");
    let element = tree.as_element(div_id).unwrap();

    assert!(element.attrs.contains_key("class"));
    assert_eq!(element.attrs.get("class").map(String::as_str), Some("Wrapper"));
}
