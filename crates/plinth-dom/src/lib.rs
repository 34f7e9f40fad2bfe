#![forbid(unsafe_code)]

//! The node tree components emit.
//!
//! A [`Node`] is a retained, renderer-agnostic description of one UI
//! element: a role, a stable test id, attributes, optional text, state
//! flags, an optional click binding, and children. Components build
//! trees of them; a rendering backend (out of scope here) paints them;
//! tests query them.
//!
//! # Click routing
//!
//! Interactive nodes carry a [`ClickTarget`]: the owning widget's id
//! plus a `u64` payload (by convention, the option index). The runtime
//! resolves a pointer event to a `ClickTarget` and hands it back to the
//! owning component's state, which computes the new value and writes it
//! to the store. Nodes never hold callbacks.

use bitflags::bitflags;
use plinth_proto::WidgetId;

/// Semantic role of a node. Closed set; components never emit an
/// undefined role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Container,
    Dialog,
    Button,
    /// Navigable hyperlink. Distinct from `Button`: activating it must
    /// never submit a form.
    Link,
    Text,
    Icon,
    Video,
    Label,
    Tooltip,
}

bitflags! {
    /// Boolean presentation state of a node.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct NodeFlags: u8 {
        /// Rendered non-interactive; pointer events are not routed.
        const DISABLED = 1 << 0;
        /// Receives the selected visual treatment.
        const HIGHLIGHTED = 1 << 1;
        /// Occupies space but is not visible.
        const HIDDEN = 1 << 2;
        /// Removed from layout entirely.
        const COLLAPSED = 1 << 3;
    }
}

/// Click binding of an interactive node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickTarget {
    /// Widget that owns the interaction.
    pub widget: WidgetId,
    /// Payload identifying what was clicked (option index for groups).
    pub index: u64,
}

/// One element of the rendered tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    role: Role,
    test_id: Option<&'static str>,
    attrs: Vec<(&'static str, String)>,
    text: Option<String>,
    flags: NodeFlags,
    click: Option<ClickTarget>,
    children: Vec<Node>,
}

impl Node {
    /// Create an empty node with the given role.
    pub fn new(role: Role) -> Self {
        Self {
            role,
            test_id: None,
            attrs: Vec::new(),
            text: None,
            flags: NodeFlags::empty(),
            click: None,
            children: Vec::new(),
        }
    }

    /// Tag the node with a stable test id.
    #[must_use]
    pub fn test_id(mut self, id: &'static str) -> Self {
        self.test_id = Some(id);
        self
    }

    /// Append an attribute. Attributes keep insertion order; callers
    /// set each name at most once and lookup returns the first match.
    #[must_use]
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    /// Set the node's own text content.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Add presentation flags.
    #[must_use]
    pub fn flag(mut self, flags: NodeFlags) -> Self {
        self.flags |= flags;
        self
    }

    /// Bind a click target.
    #[must_use]
    pub fn click_target(mut self, widget: WidgetId, index: u64) -> Self {
        self.click = Some(ClickTarget { widget, index });
        self
    }

    /// Append a child node.
    #[must_use]
    pub fn child(mut self, node: Node) -> Self {
        self.children.push(node);
        self
    }

    // --- read access -------------------------------------------------

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn id(&self) -> Option<&'static str> {
        self.test_id
    }

    /// Look up an attribute by name (first match).
    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// The node's own text (not including descendants).
    pub fn text_content(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn flags(&self) -> NodeFlags {
        self.flags
    }

    pub fn is_disabled(&self) -> bool {
        self.flags.contains(NodeFlags::DISABLED)
    }

    pub fn is_highlighted(&self) -> bool {
        self.flags.contains(NodeFlags::HIGHLIGHTED)
    }

    pub fn click(&self) -> Option<&ClickTarget> {
        self.click.as_ref()
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    // --- tree walks --------------------------------------------------

    /// Depth-first search for the first node carrying `id`.
    pub fn find_by_test_id(&self, id: &str) -> Option<&Node> {
        if self.test_id == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_by_test_id(id))
    }

    /// All nodes with the given role, in document (depth-first) order.
    pub fn all_by_role(&self, role: Role) -> Vec<&Node> {
        let mut out = Vec::new();
        self.collect_by_role(role, &mut out);
        out
    }

    fn collect_by_role<'a>(&'a self, role: Role, out: &mut Vec<&'a Node>) {
        if self.role == role {
            out.push(self);
        }
        for child in &self.children {
            child.collect_by_role(role, out);
        }
    }
}
