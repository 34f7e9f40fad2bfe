#![forbid(unsafe_code)]

//! The external widget-state store.
//!
//! [`WidgetStateManager`] is the source of truth for every widget's
//! current value. Components write into it on mount (tagged as not
//! user-originated) and on each interaction (tagged as user-originated),
//! and the backend reads from it. Writes replace the whole value; the
//! store never mutates a value in place.
//!
//! # Forms
//!
//! Widgets can belong to a form. A form configured as clear-on-submit
//! reverts every registered widget to its registered default when the
//! form is submitted. The store does not call back into components:
//! it marks each reverted widget as *pending reset* and the owning
//! component picks the reset up on its next render via
//! [`WidgetStateManager::take_pending_reset`]. That keeps components
//! from caching a stale copy while keeping the store free of callbacks.
//!
//! # Ordering
//!
//! For one widget instance the mount write (`from_ui: false`) is always
//! observable before any click write (`from_ui: true`): initialization
//! happens when the component state is constructed and clicks require a
//! constructed state.

use std::collections::HashMap;

use plinth_proto::{FormId, FragmentId, WidgetId};

/// Origin tag of a value write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetValueSource {
    /// Whether the value change originated from user interaction, as
    /// opposed to programmatic initialization or a backend push.
    pub from_ui: bool,
}

impl WidgetValueSource {
    /// A user-originated change.
    pub const FROM_UI: Self = Self { from_ui: true };
    /// A programmatic change (mount default, backend push).
    pub const PROGRAMMATIC: Self = Self { from_ui: false };
}

/// One recorded write, kept so tests can assert call sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetWrite {
    pub value: Vec<usize>,
    pub source: WidgetValueSource,
    /// Fragment scope forwarded unchanged from the caller.
    pub fragment: Option<FragmentId>,
}

#[derive(Debug, Default)]
struct FormState {
    clear_on_submit: bool,
    /// Registered (widget, default) pairs, in registration order.
    defaults: Vec<(WidgetId, Vec<usize>)>,
}

/// Key-value store mapping widget identities to their current values.
#[derive(Debug, Default)]
pub struct WidgetStateManager {
    values: HashMap<WidgetId, Vec<usize>>,
    writes: HashMap<WidgetId, Vec<WidgetWrite>>,
    forms: HashMap<FormId, FormState>,
    pending_resets: HashMap<WidgetId, Vec<usize>>,
}

impl WidgetStateManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a widget's value with a new index set.
    ///
    /// Fire-and-forget: the write is recorded synchronously and never
    /// fails. The fragment id is stored unchanged.
    pub fn set_index_array_value(
        &mut self,
        widget: &WidgetId,
        value: Vec<usize>,
        source: WidgetValueSource,
        fragment: Option<&FragmentId>,
    ) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            widget = %widget,
            from_ui = source.from_ui,
            len = value.len(),
            "widget value write"
        );
        self.values.insert(widget.clone(), value.clone());
        self.writes.entry(widget.clone()).or_default().push(WidgetWrite {
            value,
            source,
            fragment: fragment.cloned(),
        });
    }

    /// Current value of a widget, if any write has happened.
    pub fn index_array_value(&self, widget: &WidgetId) -> Option<&[usize]> {
        self.values.get(widget).map(Vec::as_slice)
    }

    /// Every write issued for a widget, oldest first.
    pub fn writes(&self, widget: &WidgetId) -> &[WidgetWrite] {
        self.writes.get(widget).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The most recent write for a widget.
    pub fn last_write(&self, widget: &WidgetId) -> Option<&WidgetWrite> {
        self.writes.get(widget).and_then(|w| w.last())
    }

    /// Configure a form's submit behavior.
    pub fn set_form_submit_behavior(&mut self, form: &FormId, clear_on_submit: bool) {
        self.forms.entry(form.clone()).or_default().clear_on_submit = clear_on_submit;
    }

    /// Register a widget's default value with its form so the form can
    /// reset the widget later, independently of any interaction.
    ///
    /// Re-registering the same widget replaces its previous default.
    pub fn register_default_provider(
        &mut self,
        form: &FormId,
        widget: &WidgetId,
        default: Vec<usize>,
    ) {
        let form = self.forms.entry(form.clone()).or_default();
        match form.defaults.iter_mut().find(|(w, _)| w == widget) {
            Some((_, existing)) => *existing = default,
            None => form.defaults.push((widget.clone(), default)),
        }
    }

    /// Submit a form.
    ///
    /// For clear-on-submit forms this reverts every registered widget
    /// to its default and marks it pending reset; the owning component
    /// re-reads the value on its next render. Submitting a form with
    /// no clear-on-submit behavior (or an unknown form) changes no
    /// widget values.
    pub fn submit_form(&mut self, form: &FormId, _fragment: Option<&FragmentId>) {
        let Some(state) = self.forms.get(form) else {
            return;
        };
        if !state.clear_on_submit {
            return;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(form = %form, widgets = state.defaults.len(), "form clear on submit");
        let resets: Vec<(WidgetId, Vec<usize>)> = state.defaults.clone();
        for (widget, default) in resets {
            self.values.insert(widget.clone(), default.clone());
            self.pending_resets.insert(widget, default);
        }
    }

    /// Consume the pending reset for a widget, if one exists.
    ///
    /// Returns the reverted value exactly once per reset.
    pub fn take_pending_reset(&mut self, widget: &WidgetId) -> Option<Vec<usize>> {
        self.pending_resets.remove(widget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(id: &str) -> WidgetId {
        WidgetId::new(id)
    }

    #[test]
    fn write_then_read_back() {
        let mut mgr = WidgetStateManager::new();
        mgr.set_index_array_value(&w("a"), vec![2], WidgetValueSource::PROGRAMMATIC, None);
        assert_eq!(mgr.index_array_value(&w("a")), Some(&[2usize][..]));
    }

    #[test]
    fn unknown_widget_has_no_value() {
        let mgr = WidgetStateManager::new();
        assert_eq!(mgr.index_array_value(&w("nope")), None);
        assert!(mgr.writes(&w("nope")).is_empty());
        assert!(mgr.last_write(&w("nope")).is_none());
    }

    #[test]
    fn writes_replace_never_merge() {
        let mut mgr = WidgetStateManager::new();
        mgr.set_index_array_value(&w("a"), vec![0, 1], WidgetValueSource::FROM_UI, None);
        mgr.set_index_array_value(&w("a"), vec![3], WidgetValueSource::FROM_UI, None);
        assert_eq!(mgr.index_array_value(&w("a")), Some(&[3usize][..]));
    }

    #[test]
    fn write_log_keeps_order_and_tags() {
        let mut mgr = WidgetStateManager::new();
        mgr.set_index_array_value(&w("a"), vec![2], WidgetValueSource::PROGRAMMATIC, None);
        mgr.set_index_array_value(&w("a"), vec![1], WidgetValueSource::FROM_UI, None);

        let writes = mgr.writes(&w("a"));
        assert_eq!(writes.len(), 2);
        assert!(!writes[0].source.from_ui);
        assert!(writes[1].source.from_ui);
        assert_eq!(writes[1].value, vec![1]);
    }

    #[test]
    fn fragment_is_forwarded_unchanged() {
        let mut mgr = WidgetStateManager::new();
        let fragment = FragmentId::new("frag-7");
        mgr.set_index_array_value(&w("a"), vec![], WidgetValueSource::FROM_UI, Some(&fragment));
        assert_eq!(mgr.last_write(&w("a")).unwrap().fragment, Some(fragment));
    }

    #[test]
    fn submit_without_clear_behavior_is_a_no_op() {
        let mut mgr = WidgetStateManager::new();
        let form = FormId::new("f");
        mgr.register_default_provider(&form, &w("a"), vec![2]);
        mgr.set_index_array_value(&w("a"), vec![0], WidgetValueSource::FROM_UI, None);

        mgr.submit_form(&form, None);
        assert_eq!(mgr.index_array_value(&w("a")), Some(&[0usize][..]));
        assert!(mgr.take_pending_reset(&w("a")).is_none());
    }

    #[test]
    fn clear_on_submit_reverts_to_registered_default() {
        let mut mgr = WidgetStateManager::new();
        let form = FormId::new("f");
        mgr.set_form_submit_behavior(&form, true);
        mgr.register_default_provider(&form, &w("a"), vec![2]);
        mgr.set_index_array_value(&w("a"), vec![0, 1], WidgetValueSource::FROM_UI, None);

        mgr.submit_form(&form, None);
        assert_eq!(mgr.index_array_value(&w("a")), Some(&[2usize][..]));
        assert_eq!(mgr.take_pending_reset(&w("a")), Some(vec![2]));
    }

    #[test]
    fn pending_reset_is_consumed_once() {
        let mut mgr = WidgetStateManager::new();
        let form = FormId::new("f");
        mgr.set_form_submit_behavior(&form, true);
        mgr.register_default_provider(&form, &w("a"), vec![]);

        mgr.submit_form(&form, None);
        assert_eq!(mgr.take_pending_reset(&w("a")), Some(vec![]));
        assert_eq!(mgr.take_pending_reset(&w("a")), None);
    }

    #[test]
    fn reregistering_a_default_replaces_it() {
        let mut mgr = WidgetStateManager::new();
        let form = FormId::new("f");
        mgr.set_form_submit_behavior(&form, true);
        mgr.register_default_provider(&form, &w("a"), vec![0]);
        mgr.register_default_provider(&form, &w("a"), vec![5]);

        mgr.submit_form(&form, None);
        assert_eq!(mgr.take_pending_reset(&w("a")), Some(vec![5]));
    }

    #[test]
    fn submit_resets_every_registered_widget() {
        let mut mgr = WidgetStateManager::new();
        let form = FormId::new("f");
        mgr.set_form_submit_behavior(&form, true);
        mgr.register_default_provider(&form, &w("a"), vec![1]);
        mgr.register_default_provider(&form, &w("b"), vec![2]);

        mgr.submit_form(&form, None);
        assert_eq!(mgr.index_array_value(&w("a")), Some(&[1usize][..]));
        assert_eq!(mgr.index_array_value(&w("b")), Some(&[2usize][..]));
    }

    #[test]
    fn widget_and_form_sharing_a_raw_id_never_collide() {
        let mut mgr = WidgetStateManager::new();
        mgr.set_index_array_value(&w("x"), vec![3], WidgetValueSource::FROM_UI, None);
        mgr.set_form_submit_behavior(&FormId::new("x"), true);
        mgr.register_default_provider(&FormId::new("x"), &w("x"), vec![1]);

        // keyed in separate maps; configuring the form left the
        // widget value untouched
        assert_eq!(mgr.index_array_value(&w("x")), Some(&[3usize][..]));
        mgr.submit_form(&FormId::new("x"), None);
        assert_eq!(mgr.index_array_value(&w("x")), Some(&[1usize][..]));
    }

    #[test]
    fn submit_unknown_form_changes_nothing() {
        let mut mgr = WidgetStateManager::new();
        mgr.set_index_array_value(&w("a"), vec![4], WidgetValueSource::FROM_UI, None);
        mgr.submit_form(&FormId::new("ghost"), None);
        assert_eq!(mgr.index_array_value(&w("a")), Some(&[4usize][..]));
    }
}
