//! Element descriptors.
//!
//! Each struct mirrors one protocol message. Fields are `#[serde(default)]`
//! so older backends that omit newer fields still deserialize cleanly.

use serde::{Deserialize, Serialize};

use crate::ident::{FormId, WidgetId};

/// Semantic kind of an alert element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    Error,
    Warning,
    Success,
    #[default]
    Info,
}

/// A non-interactive alert box.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Alert {
    /// Body text shown inside the alert.
    pub body: String,
    pub kind: AlertKind,
    /// Optional icon string; empty or absent means no icon region is
    /// rendered at all.
    pub icon: Option<String>,
}

/// How a click mutates the selection of a button group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickMode {
    #[default]
    SingleSelect,
    MultiSelect,
}

/// Which rendered buttons receive the highlighted visual treatment.
///
/// This is independent of the underlying selection: `AllUpToSelected`
/// is used for progressive indicators such as rating scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionVisualization {
    #[default]
    OnlySelected,
    AllUpToSelected,
}

/// Visual shape of the group's buttons. Governs sizing and icon
/// treatment only, never selection semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupStyle {
    Borderless,
    Pills,
    #[default]
    SegmentedControl,
}

/// Whether and how a widget label is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelVisibility {
    #[default]
    Visible,
    /// Label occupies space but is not visible.
    Hidden,
    /// Label is removed entirely.
    Collapsed,
}

/// One selectable entry in a button group.
///
/// The `selected_*` fields are an optional override shown while the
/// option is selected. An option carrying such an override communicates
/// selection through its own content and is therefore excluded from the
/// default highlight visualization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonGroupOption {
    pub content: Option<String>,
    pub content_icon: Option<String>,
    pub selected_content: Option<String>,
    pub selected_content_icon: Option<String>,
}

impl ButtonGroupOption {
    /// Whether this option carries custom selected content or icon.
    ///
    /// Empty strings do not count as an override.
    #[must_use]
    pub fn has_selection_override(&self) -> bool {
        let non_empty = |s: &Option<String>| s.as_deref().is_some_and(|s| !s.is_empty());
        non_empty(&self.selected_content) || non_empty(&self.selected_content_icon)
    }
}

/// A group of N options rendered as clickable buttons.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonGroupDef {
    pub id: WidgetId,
    pub label: Option<String>,
    pub label_visibility: LabelVisibility,
    /// Optional help text rendered as a hover tooltip.
    pub help: Option<String>,
    pub options: Vec<ButtonGroupOption>,
    /// Default selection, read once when the widget mounts.
    pub default: Vec<usize>,
    pub click_mode: ClickMode,
    pub style: GroupStyle,
    pub selection_visualization: SelectionVisualization,
    pub disabled: bool,
    /// Form this widget belongs to, if any. Membership registers the
    /// default so a clear-on-submit form can reset the widget later.
    pub form_id: Option<FormId>,
    /// Value pushed by the backend, applied only when `set_value` is
    /// true.
    pub value: Vec<usize>,
    pub set_value: bool,
}

impl ClickMode {
    /// Stable attribute string for test discovery.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SingleSelect => "single_select",
            Self::MultiSelect => "multi_select",
        }
    }
}

impl GroupStyle {
    /// Stable attribute string for test discovery.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Borderless => "borderless",
            Self::Pills => "pills",
            Self::SegmentedControl => "segmented_control",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_button_group_deserializes_with_defaults() {
        let def: ButtonGroupDef = serde_json::from_str(r#"{"id": "w1"}"#).unwrap();
        assert_eq!(def.id, WidgetId::new("w1"));
        assert_eq!(def.click_mode, ClickMode::SingleSelect);
        assert_eq!(def.style, GroupStyle::SegmentedControl);
        assert_eq!(def.selection_visualization, SelectionVisualization::OnlySelected);
        assert!(def.options.is_empty());
        assert!(def.default.is_empty());
        assert!(!def.set_value);
        assert!(def.form_id.is_none());
    }

    #[test]
    fn enums_use_snake_case_on_the_wire() {
        let def: ButtonGroupDef = serde_json::from_str(
            r#"{"id": "w1", "click_mode": "multi_select", "style": "borderless"}"#,
        )
        .unwrap();
        assert_eq!(def.click_mode, ClickMode::MultiSelect);
        assert_eq!(def.style, GroupStyle::Borderless);
    }

    #[test]
    fn alert_defaults_to_info_without_icon() {
        let alert: Alert = serde_json::from_str(r#"{"body": "hello"}"#).unwrap();
        assert_eq!(alert.kind, AlertKind::Info);
        assert_eq!(alert.icon, None);
    }

    #[test]
    fn selection_override_detection() {
        let plain = ButtonGroupOption {
            content: Some("a".into()),
            ..Default::default()
        };
        assert!(!plain.has_selection_override());

        let with_content = ButtonGroupOption {
            selected_content: Some("a!".into()),
            ..Default::default()
        };
        assert!(with_content.has_selection_override());

        let with_icon = ButtonGroupOption {
            selected_content_icon: Some(":material/star:".into()),
            ..Default::default()
        };
        assert!(with_icon.has_selection_override());
    }

    #[test]
    fn empty_override_strings_do_not_count() {
        let opt = ButtonGroupOption {
            selected_content: Some(String::new()),
            selected_content_icon: Some(String::new()),
            ..Default::default()
        };
        assert!(!opt.has_selection_override());
    }
}
