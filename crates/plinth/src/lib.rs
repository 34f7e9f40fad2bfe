#![forbid(unsafe_code)]

//! Plinth public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports common types from internal crates and offers a lightweight
//! prelude for day-to-day usage.

use std::fmt;

// --- Protocol re-exports ---------------------------------------------------

pub use plinth_proto::{
    Alert, AlertKind, ButtonGroupDef, ButtonGroupOption, ClickMode, FormId, FragmentId,
    GroupStyle, Icon, LabelVisibility, SelectionVisualization, WidgetId,
};

// --- Node-tree re-exports --------------------------------------------------

pub use plinth_dom::{ClickTarget, Node, NodeFlags, Role};

// --- State re-exports ------------------------------------------------------

pub use plinth_state::{WidgetStateManager, WidgetValueSource, WidgetWrite};

// --- Component re-exports --------------------------------------------------

pub use plinth_widgets::{
    AlertElement, BaseButtonKind, BaseButtonSize, BaseLinkButton, ButtonGroup, ButtonGroupState,
    ClickResult, ContentElement, DiskMediaEnv, DynamicButtonLabel, IconSize, MediaEnv,
    MemoryMediaEnv, StatefulWidget, VideoRecordedDialog, Widget, get_content_element,
    is_visually_highlighted, next_selection,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for Plinth apps.
#[derive(Debug)]
pub enum Error {
    /// I/O failure while exporting or previewing media.
    Io(std::io::Error),
    /// Presentation-layer error with message.
    Widget(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Widget(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Standard result type for Plinth APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        AlertElement, BaseLinkButton, ButtonGroup, ButtonGroupState, ClickMode, Error, Node,
        Result, Role, StatefulWidget, VideoRecordedDialog, Widget, WidgetStateManager,
        WidgetValueSource,
    };

    pub use crate::{dom, proto, state, widgets};
}

pub use plinth_dom as dom;
pub use plinth_proto as proto;
pub use plinth_state as state;
pub use plinth_widgets as widgets;
