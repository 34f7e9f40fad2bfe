#![forbid(unsafe_code)]

//! Widget protocol: the element descriptors a backend sends to the
//! presentation layer.
//!
//! Elements are plain data. The backend serializes them, the
//! presentation layer turns them into node trees and reports user
//! interaction back through the widget-state store. Nothing here
//! renders or validates; every enum is a closed set and consumers are
//! expected to dispatch with an explicit default arm so an unexpected
//! value degrades to a safe rendering instead of failing.

pub mod element;
pub mod icon;
pub mod ident;

pub use element::{
    Alert, AlertKind, ButtonGroupDef, ButtonGroupOption, ClickMode, GroupStyle, LabelVisibility,
    SelectionVisualization,
};
pub use icon::Icon;
pub use ident::{FormId, FragmentId, WidgetId};
