#![forbid(unsafe_code)]

//! Test utilities for asserting over rendered node trees.
//!
//! Mirrors the query style of browser testing libraries: locate nodes
//! by their stable test id or role instead of visual text, then assert
//! on attributes and content. The flattening helpers turn a tree into
//! deterministic text for snapshot-style assertions.

use std::fmt::Write as _;

use plinth_dom::{ClickTarget, Node, Role};
use unicode_width::UnicodeWidthStr;

/// Find the node carrying `id`, panicking with a readable message when
/// it is absent. Test-only ergonomics; use [`query_by_test_id`] when
/// absence is a valid outcome.
pub fn get_by_test_id<'a>(root: &'a Node, id: &str) -> &'a Node {
    root.find_by_test_id(id)
        .unwrap_or_else(|| panic!("no node with test id `{id}` in rendered tree"))
}

/// Find the node carrying `id`, if any.
pub fn query_by_test_id<'a>(root: &'a Node, id: &str) -> Option<&'a Node> {
    root.find_by_test_id(id)
}

/// All nodes of the given role in document order.
pub fn all_by_role(root: &Node, role: Role) -> Vec<&Node> {
    root.all_by_role(role)
}

/// The click binding of a node, panicking when the node is not
/// interactive.
pub fn click_target(node: &Node) -> &ClickTarget {
    node.click()
        .unwrap_or_else(|| panic!("node `{:?}` has no click target", node.id()))
}

/// Concatenated text of a node and all its descendants, in document
/// order, separated by single spaces.
pub fn text_content(node: &Node) -> String {
    let mut parts = Vec::new();
    collect_text(node, &mut parts);
    parts.join(" ")
}

fn collect_text<'a>(node: &'a Node, out: &mut Vec<&'a str>) {
    if let Some(text) = node.text_content() {
        out.push(text);
    }
    for child in node.children() {
        collect_text(child, out);
    }
}

/// Flatten a tree into indented text, one node per line:
/// `role[test-id] "text"` with the text column aligned per depth so
/// wide glyphs (emoji) do not skew the layout. Deterministic, intended
/// for snapshot-style comparisons.
pub fn node_to_text(root: &Node) -> String {
    let mut out = String::new();
    write_node(root, 0, &mut out);
    out
}

fn write_node(node: &Node, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    let mut line = format!("{indent}{:?}", node.role());
    if let Some(id) = node.id() {
        let _ = write!(line, "[{id}]");
    }
    if let Some(text) = node.text_content() {
        // pad to a stable column, measuring display width
        let width = UnicodeWidthStr::width(line.as_str());
        let pad = width.div_ceil(8) * 8 + 2;
        for _ in width..pad {
            line.push(' ');
        }
        let _ = write!(line, "\"{text}\"");
    }
    out.push_str(&line);
    out.push('\n');
    for child in node.children() {
        write_node(child, depth + 1, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Node {
        Node::new(Role::Container)
            .test_id("root")
            .child(Node::new(Role::Text).text("hello"))
            .child(
                Node::new(Role::Button)
                    .test_id("go")
                    .text("Go")
                    .click_target("w1".into(), 4),
            )
    }

    #[test]
    fn get_by_test_id_finds_nested_nodes() {
        let tree = tree();
        assert_eq!(get_by_test_id(&tree, "go").role(), Role::Button);
    }

    #[test]
    #[should_panic(expected = "no node with test id `missing`")]
    fn get_by_test_id_panics_with_message() {
        get_by_test_id(&tree(), "missing");
    }

    #[test]
    fn query_returns_none_for_absent_id() {
        assert!(query_by_test_id(&tree(), "missing").is_none());
    }

    #[test]
    fn click_target_exposes_widget_and_index() {
        let tree = tree();
        let target = click_target(get_by_test_id(&tree, "go"));
        assert_eq!(target.index, 4);
    }

    #[test]
    fn text_content_concatenates_descendants() {
        assert_eq!(text_content(&tree()), "hello Go");
    }

    #[test]
    fn node_to_text_is_deterministic() {
        let a = node_to_text(&tree());
        let b = node_to_text(&tree());
        assert_eq!(a, b);
        assert!(a.contains("Container[root]"));
        assert!(a.contains("\"Go\""));
    }

    #[test]
    fn node_to_text_indents_children() {
        let rendered = node_to_text(&tree());
        let lines: Vec<&str> = rendered.lines().collect();
        assert!(lines[0].starts_with("Container"));
        assert!(lines[1].starts_with("  "));
    }
}
