//! Icon references carried by protocol elements.
//!
//! An icon field is a plain string on the wire. The prefixed form
//! `:material/<name>:` names an icon from the bundled material set;
//! anything else is treated as a literal glyph (usually an emoji).

/// A parsed icon reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Icon {
    /// Named icon from the bundled material set.
    Material(String),
    /// Literal glyph or emoji rendered as-is.
    Glyph(String),
}

const MATERIAL_PREFIX: &str = ":material/";

impl Icon {
    /// Parse a raw icon string.
    ///
    /// Returns `None` for an empty string. Parsing is total: a string
    /// that looks like a prefixed reference but is malformed (missing
    /// trailing colon, empty name) falls back to a literal glyph.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }
        if let Some(rest) = raw.strip_prefix(MATERIAL_PREFIX)
            && let Some(name) = rest.strip_suffix(':')
            && !name.is_empty()
        {
            return Some(Self::Material(name.to_owned()));
        }
        Some(Self::Glyph(raw.to_owned()))
    }

    /// The text a renderer displays for this icon: the material icon
    /// name (resolved by the icon font downstream) or the glyph itself.
    #[must_use]
    pub fn display_text(&self) -> &str {
        match self {
            Self::Material(name) => name,
            Self::Glyph(glyph) => glyph,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_material_reference() {
        assert_eq!(
            Icon::parse(":material/thumb_up:"),
            Some(Icon::Material("thumb_up".into()))
        );
    }

    #[test]
    fn parses_emoji_as_glyph() {
        assert_eq!(Icon::parse("🔥"), Some(Icon::Glyph("🔥".into())));
    }

    #[test]
    fn empty_string_is_no_icon() {
        assert_eq!(Icon::parse(""), None);
    }

    #[test]
    fn unterminated_material_reference_is_a_glyph() {
        assert_eq!(
            Icon::parse(":material/thumb_up"),
            Some(Icon::Glyph(":material/thumb_up".into()))
        );
    }

    #[test]
    fn empty_material_name_is_a_glyph() {
        assert_eq!(Icon::parse(":material/:"), Some(Icon::Glyph(":material/:".into())));
    }

    #[test]
    fn display_text() {
        assert_eq!(Icon::parse(":material/star:").unwrap().display_text(), "star");
        assert_eq!(Icon::parse("⭐").unwrap().display_text(), "⭐");
    }
}
