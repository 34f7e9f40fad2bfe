//! Alert component.
//!
//! Maps a `(kind, body, icon)` triple to a kind-tagged container. Pure:
//! no store access, no side effects.

use plinth_dom::{Node, Role};
use plinth_proto::element::{Alert, AlertKind};

use crate::Widget;

/// A non-interactive alert box.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertElement {
    body: String,
    kind: AlertKind,
    icon: Option<String>,
}

impl AlertElement {
    /// Create an alert with the given body and kind.
    pub fn new(body: impl Into<String>, kind: AlertKind) -> Self {
        Self {
            body: body.into(),
            kind,
            icon: None,
        }
    }

    /// Set the icon string. Empty strings are treated as no icon.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

impl From<&Alert> for AlertElement {
    fn from(element: &Alert) -> Self {
        Self {
            body: element.body.clone(),
            kind: element.kind,
            icon: element.icon.clone(),
        }
    }
}

/// Test id of the kind-tagged content region.
fn content_test_id(kind: AlertKind) -> &'static str {
    match kind {
        AlertKind::Error => "alert-content-error",
        AlertKind::Warning => "alert-content-warning",
        AlertKind::Success => "alert-content-success",
        AlertKind::Info => "alert-content-info",
    }
}

fn kind_attr(kind: AlertKind) -> &'static str {
    match kind {
        AlertKind::Error => "error",
        AlertKind::Warning => "warning",
        AlertKind::Success => "success",
        AlertKind::Info => "info",
    }
}

impl Widget for AlertElement {
    fn render(&self) -> Node {
        let mut content = Node::new(Role::Container).test_id(content_test_id(self.kind));

        // Icon region exists only when an icon was actually supplied.
        if let Some(icon) = self.icon.as_deref().filter(|s| !s.is_empty()) {
            content = content.child(Node::new(Role::Icon).test_id("alert-icon").text(icon));
        }
        content = content.child(Node::new(Role::Text).text(&self.body));

        Node::new(Role::Container)
            .test_id("alert")
            .attr("kind", kind_attr(self.kind))
            .child(content)
    }
}
