#![forbid(unsafe_code)]

//! Core components for Plinth.
//!
//! Components turn protocol elements into [`Node`] trees and report user
//! interaction through the widget-state store. They hold no global
//! state: each instance is handed its element and, where needed, a
//! reference to the store.

pub mod alert;
pub mod button;
pub mod button_group;
pub mod screencast;

pub use alert::AlertElement;
pub use button::{BaseButtonKind, BaseButtonSize, BaseLinkButton, DynamicButtonLabel, IconSize};
pub use button_group::{
    ButtonGroup, ButtonGroupState, ClickResult, ContentElement, get_content_element,
    is_visually_highlighted, next_selection,
};
pub use screencast::{DiskMediaEnv, MediaEnv, MemoryMediaEnv, VideoRecordedDialog};

use plinth_dom::Node;

/// A `Widget` is a component that renders as a pure function of its
/// props.
pub trait Widget {
    /// Produce the node tree for this component.
    fn render(&self) -> Node;
}

/// A `StatefulWidget` renders from mutable per-instance state.
pub trait StatefulWidget {
    type State;

    /// Produce the node tree, reconciling the state where needed.
    fn render(&self, state: &mut Self::State) -> Node;
}
