// Copyright 2026 the Vellum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::{ParseRgbError, Rgb};

/// The wire value of a document color attribute: either the reserved `auto`
/// keyword or a concrete RGB literal.
///
/// Document schemas overload a single string attribute with both meanings;
/// this type is the parsed form. Note that `auto` ("let the renderer choose")
/// is distinct from the attribute being absent (inherit from the style
/// hierarchy); absence is represented at the element level, not here.
///
/// # Example
/// ```
/// use color_primitives::{ColorValue, Rgb};
///
/// assert_eq!(ColorValue::parse("auto"), Ok(ColorValue::Auto));
/// assert_eq!(
///     ColorValue::parse("4472C4"),
///     Ok(ColorValue::Rgb(Rgb::new(0x44, 0x72, 0xC4))),
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorValue {
    /// The reserved automatic marker: the renderer chooses the color.
    Auto,
    /// A concrete RGB literal.
    Rgb(Rgb),
}

impl ColorValue {
    /// The reserved keyword for the automatic color.
    ///
    /// Schema enumerations are case-sensitive, so only this exact spelling is
    /// recognized by [`ColorValue::parse`].
    pub const AUTO_KEYWORD: &'static str = "auto";

    /// Parses a color value: the `auto` keyword, or six hex digits.
    pub const fn parse(s: &str) -> Result<Self, ParseRgbError> {
        // `const` string equality; `s == Self::AUTO_KEYWORD` is not const-stable.
        let bytes = s.as_bytes();
        if let [b'a', b'u', b't', b'o'] = bytes {
            return Ok(Self::Auto);
        }
        match Rgb::parse(s) {
            Ok(rgb) => Ok(Self::Rgb(rgb)),
            Err(e) => Err(e),
        }
    }

    /// Returns `true` for the automatic marker.
    pub const fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }

    /// Returns the RGB literal, or `None` for the automatic marker.
    pub const fn as_rgb(self) -> Option<Rgb> {
        match self {
            Self::Auto => None,
            Self::Rgb(rgb) => Some(rgb),
        }
    }
}

impl From<Rgb> for ColorValue {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb(rgb)
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str(Self::AUTO_KEYWORD),
            Self::Rgb(rgb) => write!(f, "{rgb}"),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use super::{ColorValue, Rgb};
    use crate::ParseRgbErrorKind;
    use alloc::string::ToString;

    #[test]
    fn parse_auto_keyword() {
        assert_eq!(ColorValue::parse("auto"), Ok(ColorValue::Auto));
    }

    #[test]
    fn auto_keyword_is_case_sensitive() {
        // "AUTO" is not the keyword, so it falls through to hex parsing.
        let err = ColorValue::parse("AUTO").unwrap_err();
        assert_eq!(err.kind(), ParseRgbErrorKind::WrongLength);
    }

    #[test]
    fn parse_hex_literal() {
        assert_eq!(
            ColorValue::parse("1a2b3c"),
            Ok(ColorValue::Rgb(Rgb::new(0x1A, 0x2B, 0x3C))),
        );
    }

    #[test]
    fn accessors() {
        let auto = ColorValue::Auto;
        assert!(auto.is_auto());
        assert_eq!(auto.as_rgb(), None);

        let rgb = Rgb::new(1, 2, 3);
        let value = ColorValue::from(rgb);
        assert!(!value.is_auto());
        assert_eq!(value.as_rgb(), Some(rgb));
    }

    #[test]
    fn display_round_trips() {
        assert_eq!(ColorValue::Auto.to_string(), "auto");
        let value = ColorValue::Rgb(Rgb::new(0xAB, 0x00, 0x42));
        assert_eq!(value.to_string(), "AB0042");
        assert_eq!(ColorValue::parse(&value.to_string()), Ok(value));
    }
}
