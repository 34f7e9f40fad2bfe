//! Identity newtypes shared across the protocol and the state store.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a widget instance inside the state store.
///
/// Two widget instances must never share an id; the backend derives ids
/// from the element's position and parameters and the presentation layer
/// treats them as opaque.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetId(String);

/// Identity of a form grouping widgets for submit/reset behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormId(String);

/// Opaque tag scoping a partial-update region.
///
/// Forwarded unchanged with every store write so the backend can route
/// the update to the right fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FragmentId(String);

macro_rules! impl_ident {
    ($ty:ident) => {
        impl $ty {
            /// Wrap a raw identifier.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// The raw identifier.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $ty {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }
    };
}

impl_ident!(WidgetId);
impl_ident!(FormId);
impl_ident!(FragmentId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widget_id_round_trip() {
        let id = WidgetId::new("button_group-1");
        assert_eq!(id.as_str(), "button_group-1");
        assert_eq!(id.to_string(), "button_group-1");
    }

    #[test]
    fn serde_is_transparent() {
        let id: WidgetId = serde_json::from_str("\"w1\"").unwrap();
        assert_eq!(id, WidgetId::new("w1"));
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"w1\"");
    }
}
