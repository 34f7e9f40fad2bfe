//! Button vocabulary shared by standalone buttons and button groups.
//!
//! `BaseLinkButton` is a separate component rather than a variant of a
//! plain button because link behavior requires a navigable node: it must
//! never act as a submit control, and disabling it removes it from tab
//! order without touching its navigation target.

use plinth_dom::{Node, NodeFlags, Role};
use plinth_proto::{Icon, WidgetId};

use crate::Widget;

/// Visual kind of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BaseButtonKind {
    #[default]
    Primary,
    Secondary,
    Tertiary,
    Pills,
    SegmentedControl,
    /// Icon-only button without chrome, used by borderless groups.
    BorderlessIcon,
}

impl BaseButtonKind {
    /// Stable attribute string for test discovery.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Tertiary => "tertiary",
            Self::Pills => "pills",
            Self::SegmentedControl => "segmented_control",
            Self::BorderlessIcon => "borderless_icon",
        }
    }
}

/// Size of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BaseButtonSize {
    XSmall,
    Small,
    #[default]
    Medium,
    Large,
}

impl BaseButtonSize {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::XSmall => "xsmall",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

/// Rendering size of an icon inside a button label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconSize {
    #[default]
    Base,
    Lg,
}

impl IconSize {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Lg => "lg",
        }
    }
}

/// Label content of a button: text plus an optional icon with sizing
/// hints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicButtonLabel {
    pub label: String,
    pub icon: Option<Icon>,
    pub icon_size: IconSize,
    pub smaller_font: bool,
}

impl DynamicButtonLabel {
    /// Render the label as a node: an icon region (when present)
    /// followed by the text.
    pub fn render(&self) -> Node {
        let mut node = Node::new(Role::Label)
            .test_id("dynamic-button-label")
            .attr("icon-size", self.icon_size.as_str())
            .attr("smaller-font", if self.smaller_font { "true" } else { "false" });
        if let Some(icon) = &self.icon {
            let test_id = match icon {
                Icon::Material(_) => "icon-material",
                Icon::Glyph(_) => "icon-glyph",
            };
            node = node.child(
                Node::new(Role::Icon)
                    .test_id(test_id)
                    .attr("size", self.icon_size.as_str())
                    .text(icon.display_text()),
            );
        }
        if !self.label.is_empty() {
            node = node.child(Node::new(Role::Text).text(&self.label));
        }
        node
    }
}

/// A styled hyperlink that looks like a button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseLinkButton {
    kind: BaseButtonKind,
    size: BaseButtonSize,
    disabled: bool,
    fluid_width: bool,
    auto_focus: bool,
    href: String,
    target: Option<String>,
    rel: Option<String>,
    label: String,
    on_click: Option<WidgetId>,
}

impl BaseLinkButton {
    /// Create a link button with defaults: primary kind, medium size,
    /// enabled, fixed width, no autofocus.
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            kind: BaseButtonKind::default(),
            size: BaseButtonSize::default(),
            disabled: false,
            fluid_width: false,
            auto_focus: false,
            href: href.into(),
            target: None,
            rel: None,
            label: label.into(),
            on_click: None,
        }
    }

    #[must_use]
    pub fn kind(mut self, kind: BaseButtonKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn size(mut self, size: BaseButtonSize) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn fluid_width(mut self, fluid: bool) -> Self {
        self.fluid_width = fluid;
        self
    }

    #[must_use]
    pub fn auto_focus(mut self, auto_focus: bool) -> Self {
        self.auto_focus = auto_focus;
        self
    }

    #[must_use]
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    #[must_use]
    pub fn rel(mut self, rel: impl Into<String>) -> Self {
        self.rel = Some(rel.into());
        self
    }

    /// Route activation to `widget`. The runtime resolves a click on
    /// the link to this binding and invokes the registered handler
    /// before navigating; navigation to `href` is skipped when the
    /// handler cancels it.
    #[must_use]
    pub fn on_click(mut self, widget: WidgetId) -> Self {
        self.on_click = Some(widget);
        self
    }
}

impl Widget for BaseLinkButton {
    fn render(&self) -> Node {
        // Exactly one of three visual variants, falling back to the
        // primary variant for any non-link kind.
        let (variant, test_id): (&'static str, &'static str) = match self.kind {
            BaseButtonKind::Secondary => ("secondary-link", "base-link-button-secondary"),
            BaseButtonKind::Tertiary => ("tertiary-link", "base-link-button-tertiary"),
            _ => ("primary-link", "base-link-button-primary"),
        };

        let mut node = Node::new(Role::Link)
            .test_id(test_id)
            .attr("variant", variant)
            .attr("kind", self.kind.as_str())
            .attr("size", self.size.as_str())
            .attr("href", &self.href)
            // Disabled links stay navigable targets but leave tab order.
            .attr("tabindex", if self.disabled { "-1" } else { "0" })
            .attr("fluid-width", if self.fluid_width { "true" } else { "false" })
            .attr("auto-focus", if self.auto_focus { "true" } else { "false" })
            .text(&self.label);
        if let Some(target) = &self.target {
            node = node.attr("target", target);
        }
        if let Some(rel) = &self.rel {
            node = node.attr("rel", rel);
        }
        if self.disabled {
            // Disabled links expose no activation binding.
            node = node.flag(NodeFlags::DISABLED);
        } else if let Some(widget) = &self.on_click {
            node = node.click_target(widget.clone(), 0);
        }
        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_primary_medium_enabled() {
        let tree = BaseLinkButton::new("https://example.com", "Go").render();
        assert_eq!(tree.id(), Some("base-link-button-primary"));
        assert_eq!(tree.attr_value("variant"), Some("primary-link"));
        assert_eq!(tree.attr_value("size"), Some("medium"));
        assert_eq!(tree.attr_value("tabindex"), Some("0"));
        assert_eq!(tree.attr_value("fluid-width"), Some("false"));
        assert_eq!(tree.attr_value("auto-focus"), Some("false"));
        assert!(!tree.is_disabled());
    }

    #[test]
    fn renders_a_link_not_a_button() {
        let tree = BaseLinkButton::new("https://example.com", "Go").render();
        assert_eq!(tree.role(), Role::Link);
    }

    #[test]
    fn secondary_and_tertiary_variants() {
        let secondary = BaseLinkButton::new("h", "x")
            .kind(BaseButtonKind::Secondary)
            .render();
        assert_eq!(secondary.id(), Some("base-link-button-secondary"));
        assert_eq!(secondary.attr_value("variant"), Some("secondary-link"));

        let tertiary = BaseLinkButton::new("h", "x")
            .kind(BaseButtonKind::Tertiary)
            .render();
        assert_eq!(tertiary.attr_value("variant"), Some("tertiary-link"));
    }

    #[test]
    fn non_link_kind_falls_back_to_primary_variant() {
        let tree = BaseLinkButton::new("h", "x")
            .kind(BaseButtonKind::Pills)
            .render();
        assert_eq!(tree.attr_value("variant"), Some("primary-link"));
        // the kind attribute still reports what was asked for
        assert_eq!(tree.attr_value("kind"), Some("pills"));
    }

    #[test]
    fn disabled_leaves_tab_order_but_keeps_href() {
        let tree = BaseLinkButton::new("https://example.com/docs", "Docs")
            .disabled(true)
            .render();
        assert_eq!(tree.attr_value("tabindex"), Some("-1"));
        assert_eq!(tree.attr_value("href"), Some("https://example.com/docs"));
        assert!(tree.is_disabled());
    }

    #[test]
    fn activation_binding_is_exposed_when_enabled() {
        let tree = BaseLinkButton::new("https://example.com", "Go")
            .on_click(WidgetId::new("link-1"))
            .render();
        let click = tree.click().unwrap();
        assert_eq!(click.widget, WidgetId::new("link-1"));
        // navigation target stays alongside the binding
        assert_eq!(tree.attr_value("href"), Some("https://example.com"));
    }

    #[test]
    fn disabled_link_exposes_no_activation_binding() {
        let tree = BaseLinkButton::new("https://example.com", "Go")
            .on_click(WidgetId::new("link-1"))
            .disabled(true)
            .render();
        assert!(tree.click().is_none());
        assert!(tree.is_disabled());
    }

    #[test]
    fn link_without_handler_has_no_binding() {
        let tree = BaseLinkButton::new("https://example.com", "Go").render();
        assert!(tree.click().is_none());
    }

    #[test]
    fn target_and_rel_are_forwarded() {
        let tree = BaseLinkButton::new("h", "x")
            .target("_blank")
            .rel("noopener")
            .render();
        assert_eq!(tree.attr_value("target"), Some("_blank"));
        assert_eq!(tree.attr_value("rel"), Some("noopener"));
    }

    #[test]
    fn label_renders_icon_and_text() {
        let label = DynamicButtonLabel {
            label: "foo".into(),
            icon: Icon::parse(":material/star:"),
            icon_size: IconSize::Lg,
            smaller_font: false,
        };
        let node = label.render();
        assert_eq!(node.attr_value("icon-size"), Some("lg"));
        assert_eq!(node.attr_value("smaller-font"), Some("false"));
        let icon = node.find_by_test_id("icon-material").unwrap();
        assert_eq!(icon.text_content(), Some("star"));
    }

    #[test]
    fn label_without_icon_has_no_icon_node() {
        let label = DynamicButtonLabel {
            label: "foo".into(),
            icon: None,
            icon_size: IconSize::Base,
            smaller_font: true,
        };
        let node = label.render();
        assert!(node.all_by_role(Role::Icon).is_empty());
    }

    #[test]
    fn emoji_icon_uses_glyph_region() {
        let label = DynamicButtonLabel {
            label: String::new(),
            icon: Icon::parse("🔥"),
            icon_size: IconSize::Base,
            smaller_font: true,
        };
        let node = label.render();
        assert!(node.find_by_test_id("icon-glyph").is_some());
        assert!(node.find_by_test_id("icon-material").is_none());
    }
}
