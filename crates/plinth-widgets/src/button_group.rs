//! Button group component.
//!
//! Renders a set of options as clickable buttons and keeps the selection
//! synchronized with the widget-state store. Selection is an
//! insertion-ordered index set; every interaction replaces the whole set
//! and writes it through the store tagged with its origin.

use plinth_dom::{Node, NodeFlags, Role};
use plinth_proto::element::{
    ButtonGroupDef, ButtonGroupOption, ClickMode, GroupStyle, LabelVisibility,
    SelectionVisualization,
};
use plinth_proto::{FragmentId, Icon};
use plinth_state::{WidgetStateManager, WidgetValueSource};

use crate::StatefulWidget;
use crate::button::{BaseButtonKind, BaseButtonSize, DynamicButtonLabel, IconSize};

/// The button group component. Borrows its element definition; per
/// instance state lives in [`ButtonGroupState`].
#[derive(Debug, Clone)]
pub struct ButtonGroup<'a> {
    def: &'a ButtonGroupDef,
    disabled: bool,
    fragment: Option<&'a FragmentId>,
}

impl<'a> ButtonGroup<'a> {
    pub fn new(def: &'a ButtonGroupDef) -> Self {
        Self {
            def,
            disabled: false,
            fragment: None,
        }
    }

    /// Disable the whole group regardless of the element's own flag.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Fragment scope forwarded unchanged with every store write.
    #[must_use]
    pub fn fragment(mut self, fragment: &'a FragmentId) -> Self {
        self.fragment = Some(fragment);
        self
    }

    pub fn def(&self) -> &ButtonGroupDef {
        self.def
    }

    fn is_disabled(&self) -> bool {
        self.disabled || self.def.disabled
    }
}

/// Result of a button-group content mapping: the label plus the button
/// kind and size the option renders with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentElement {
    pub label: DynamicButtonLabel,
    pub kind: BaseButtonKind,
    pub size: BaseButtonSize,
}

/// Map an option's content to its button descriptor, keyed by group
/// style.
///
/// Borderless groups render icon-first: large icons, regular font,
/// extra-small icon-only buttons. Every other style maps 1:1 to a
/// same-named button kind with base icons and a reduced font, falling
/// back to the segmented-control treatment.
pub fn get_content_element(content: &str, icon: Option<&str>, style: GroupStyle) -> ContentElement {
    let (icon_size, smaller_font) = match style {
        GroupStyle::Borderless => (IconSize::Lg, false),
        _ => (IconSize::Base, true),
    };
    let kind = match style {
        GroupStyle::Borderless => BaseButtonKind::BorderlessIcon,
        GroupStyle::Pills => BaseButtonKind::Pills,
        _ => BaseButtonKind::SegmentedControl,
    };
    let size = match style {
        GroupStyle::Borderless => BaseButtonSize::XSmall,
        _ => BaseButtonSize::Medium,
    };
    ContentElement {
        label: DynamicButtonLabel {
            label: content.to_owned(),
            icon: icon.and_then(Icon::parse),
            icon_size,
            smaller_font,
        },
        kind,
        size,
    }
}

/// Compute the next selection for a click on `index`.
///
/// Single select: re-clicking the sole selected index clears the
/// selection, any other click replaces it. Multi select: clicking a
/// selected index removes it keeping the remaining insertion order,
/// clicking an unselected index appends it.
pub fn next_selection(mode: ClickMode, current: &[usize], index: usize) -> Vec<usize> {
    match mode {
        ClickMode::SingleSelect => {
            if current == [index] {
                Vec::new()
            } else {
                vec![index]
            }
        }
        ClickMode::MultiSelect => {
            if current.contains(&index) {
                current.iter().copied().filter(|&i| i != index).collect()
            } else {
                let mut next = current.to_vec();
                next.push(index);
                next
            }
        }
    }
}

/// Whether the button at `index` receives the highlighted treatment,
/// before the per-option selection-override suppression is applied.
pub fn is_visually_highlighted(
    selection: &[usize],
    visualization: SelectionVisualization,
    index: usize,
) -> bool {
    match visualization {
        SelectionVisualization::AllUpToSelected => selection
            .iter()
            .copied()
            .max()
            .is_some_and(|highest| index <= highest),
        _ => selection.contains(&index),
    }
}

/// Outcome of routing a click to a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickResult {
    /// The selection changed and was written to the store.
    Changed(Vec<usize>),
    /// The click was ignored (disabled group or out-of-range index).
    Ignored,
}

/// Mutable per-instance state of a [`ButtonGroup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonGroupState {
    selection: Vec<usize>,
}

impl ButtonGroupState {
    /// Initialize the state for one component instance.
    ///
    /// Runs the one-shot mount sequence: adopt the store's current
    /// value (falling back to the element default), write it tagged as
    /// programmatic, register the default with the owning form, then
    /// apply a backend-pushed value if the element carries one. This
    /// runs before any click can be routed, which is what guarantees
    /// the mount write is observable first.
    pub fn new(group: &ButtonGroup<'_>, mgr: &mut WidgetStateManager) -> Self {
        let def = group.def;
        let initial = mgr
            .index_array_value(&def.id)
            .map(<[usize]>::to_vec)
            .unwrap_or_else(|| def.default.clone());
        mgr.set_index_array_value(
            &def.id,
            initial.clone(),
            WidgetValueSource::PROGRAMMATIC,
            group.fragment,
        );
        if let Some(form) = &def.form_id {
            mgr.register_default_provider(form, &def.id, def.default.clone());
        }

        let mut state = Self { selection: initial };
        if def.set_value {
            state.selection = def.value.clone();
            mgr.set_index_array_value(
                &def.id,
                def.value.clone(),
                WidgetValueSource::PROGRAMMATIC,
                group.fragment,
            );
        }
        state
    }

    /// Current selection, in insertion order.
    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    /// Route a click on the option at `index`.
    ///
    /// Disabled groups ignore clicks entirely; nothing is written.
    pub fn handle_click(
        &mut self,
        group: &ButtonGroup<'_>,
        index: usize,
        mgr: &mut WidgetStateManager,
    ) -> ClickResult {
        if group.is_disabled() || index >= group.def.options.len() {
            return ClickResult::Ignored;
        }
        let next = next_selection(group.def.click_mode, &self.selection, index);
        self.selection = next.clone();
        mgr.set_index_array_value(
            &group.def.id,
            next.clone(),
            WidgetValueSource::FROM_UI,
            group.fragment,
        );
        ClickResult::Changed(next)
    }

    /// Reconcile with an external reset (form clear).
    ///
    /// Consumes the pending reset, adopts the reverted value and
    /// re-issues the write tagged as user-originated so downstream
    /// propagation treats the reset like any other change. Returns
    /// whether a reset was applied. Call once per render, before
    /// [`StatefulWidget::render`].
    pub fn sync(&mut self, group: &ButtonGroup<'_>, mgr: &mut WidgetStateManager) -> bool {
        match mgr.take_pending_reset(&group.def.id) {
            Some(value) => {
                self.selection = value.clone();
                mgr.set_index_array_value(
                    &group.def.id,
                    value,
                    WidgetValueSource::FROM_UI,
                    group.fragment,
                );
                true
            }
            None => false,
        }
    }
}

impl ButtonGroup<'_> {
    fn option_button(
        &self,
        index: usize,
        option: &ButtonGroupOption,
        selection: &[usize],
        disabled: bool,
    ) -> Node {
        let selected = selection.contains(&index);
        let has_override = option.has_selection_override();

        // Options with a selection override show their own selected
        // content and never take the default highlight.
        let (content, icon) = if selected && has_override {
            (
                option
                    .selected_content
                    .as_deref()
                    .or(option.content.as_deref())
                    .unwrap_or(""),
                option
                    .selected_content_icon
                    .as_deref()
                    .or(option.content_icon.as_deref()),
            )
        } else {
            (
                option.content.as_deref().unwrap_or(""),
                option.content_icon.as_deref(),
            )
        };

        let element = get_content_element(content, icon, self.def.style);
        let highlighted = !has_override
            && is_visually_highlighted(selection, self.def.selection_visualization, index);

        let mut node = Node::new(Role::Button)
            .test_id("button-group-button")
            .attr("kind", element.kind.as_str())
            .attr("size", element.size.as_str())
            .child(element.label.render());
        if highlighted {
            node = node.flag(NodeFlags::HIGHLIGHTED);
        }
        if disabled {
            node = node.flag(NodeFlags::DISABLED);
        } else {
            node = node.click_target(self.def.id.clone(), index as u64);
        }
        node
    }
}

impl StatefulWidget for ButtonGroup<'_> {
    type State = ButtonGroupState;

    fn render(&self, state: &mut ButtonGroupState) -> Node {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "ButtonGroup",
            id = %self.def.id,
            options = self.def.options.len()
        )
        .entered();

        // Selection must stay a subset of valid option indices.
        state.selection.retain(|&i| i < self.def.options.len());

        let disabled = self.is_disabled();
        let mut root = Node::new(Role::Container)
            .test_id("button-group")
            .attr("click-mode", self.def.click_mode.as_str())
            .attr("style", self.def.style.as_str());

        if let Some(label) = &self.def.label {
            let mut label_node = Node::new(Role::Label).test_id("widget-label").text(label);
            match self.def.label_visibility {
                LabelVisibility::Hidden => label_node = label_node.flag(NodeFlags::HIDDEN),
                LabelVisibility::Collapsed => label_node = label_node.flag(NodeFlags::COLLAPSED),
                LabelVisibility::Visible => {}
            }
            root = root.child(label_node);
        }
        if let Some(help) = &self.def.help {
            root = root.child(
                Node::new(Role::Tooltip)
                    .test_id("tooltip-hover-target")
                    .text(help),
            );
        }

        for (index, option) in self.def.options.iter().enumerate() {
            root = root.child(self.option_button(index, option, &state.selection, disabled));
        }
        root
    }
}
