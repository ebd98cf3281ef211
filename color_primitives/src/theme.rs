// Copyright 2026 the Vellum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Named theme color slots, after the `ST_ThemeColor` values of the
/// `WordprocessingML` schema.
///
/// A theme color is an indirection: the slot name is resolved to a concrete
/// color by a theme palette, which is outside this crate's scope. The wire
/// names (returned by [`as_str`](Self::as_str), accepted by
/// [`parse`](Self::parse)) are the schema's `camelCase` spellings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ThemeColor {
    /// Main dark color, typically used for body text.
    Dark1 = 0,
    /// Main light color, typically used for the page background.
    Light1 = 1,
    /// Secondary dark color.
    Dark2 = 2,
    /// Secondary light color.
    Light2 = 3,
    /// Accent color 1.
    Accent1 = 4,
    /// Accent color 2.
    Accent2 = 5,
    /// Accent color 3.
    Accent3 = 6,
    /// Accent color 4.
    Accent4 = 7,
    /// Accent color 5.
    Accent5 = 8,
    /// Accent color 6.
    Accent6 = 9,
    /// Color for unfollowed hyperlinks.
    Hyperlink = 10,
    /// Color for followed hyperlinks.
    FollowedHyperlink = 11,
    /// Explicit marker that no theme color applies (wire value `none`).
    ///
    /// Some producers write this instead of omitting the attribute; an element
    /// carrying it still counts as theme-referenced on read.
    NotThemeColor = 12,
    /// The dark-1 slot as remapped for backgrounds by the document's color map.
    Background1 = 13,
    /// The light-1 slot as remapped for text by the document's color map.
    Text1 = 14,
    /// The dark-2 slot as remapped for backgrounds by the document's color map.
    Background2 = 15,
    /// The light-2 slot as remapped for text by the document's color map.
    Text2 = 16,
    // NOTICE: If a new value is added, be sure to modify `MAX_VALUE`.
}

impl ThemeColor {
    /// Returns the maximum numeric value for known variants.
    ///
    /// This is primarily intended for use in fixed-size palettes keyed by
    /// `ThemeColor`.
    pub const MAX_VALUE: u8 = Self::Text2 as u8;

    /// Parses a theme color from its schema name.
    ///
    /// Matching is exact; schema enumerations are case-sensitive.
    ///
    /// ```
    /// use color_primitives::ThemeColor;
    ///
    /// assert_eq!(ThemeColor::parse("accent1"), Some(ThemeColor::Accent1));
    /// assert_eq!(ThemeColor::parse("Accent1"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "dark1" => Self::Dark1,
            "light1" => Self::Light1,
            "dark2" => Self::Dark2,
            "light2" => Self::Light2,
            "accent1" => Self::Accent1,
            "accent2" => Self::Accent2,
            "accent3" => Self::Accent3,
            "accent4" => Self::Accent4,
            "accent5" => Self::Accent5,
            "accent6" => Self::Accent6,
            "hyperlink" => Self::Hyperlink,
            "followedHyperlink" => Self::FollowedHyperlink,
            "none" => Self::NotThemeColor,
            "background1" => Self::Background1,
            "text1" => Self::Text1,
            "background2" => Self::Background2,
            "text2" => Self::Text2,
            _ => return None,
        })
    }

    /// Returns the schema name for this slot.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark1 => "dark1",
            Self::Light1 => "light1",
            Self::Dark2 => "dark2",
            Self::Light2 => "light2",
            Self::Accent1 => "accent1",
            Self::Accent2 => "accent2",
            Self::Accent3 => "accent3",
            Self::Accent4 => "accent4",
            Self::Accent5 => "accent5",
            Self::Accent6 => "accent6",
            Self::Hyperlink => "hyperlink",
            Self::FollowedHyperlink => "followedHyperlink",
            Self::NotThemeColor => "none",
            Self::Background1 => "background1",
            Self::Text1 => "text1",
            Self::Background2 => "background2",
            Self::Text2 => "text2",
        }
    }

    /// Returns a slice containing all theme color variants.
    pub const fn all() -> &'static [Self] {
        &[
            Self::Dark1,
            Self::Light1,
            Self::Dark2,
            Self::Light2,
            Self::Accent1,
            Self::Accent2,
            Self::Accent3,
            Self::Accent4,
            Self::Accent5,
            Self::Accent6,
            Self::Hyperlink,
            Self::FollowedHyperlink,
            Self::NotThemeColor,
            Self::Background1,
            Self::Text1,
            Self::Background2,
            Self::Text2,
        ]
    }
}

impl fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::ThemeColor;

    #[test]
    fn parse_round_trips_every_variant() {
        for &slot in ThemeColor::all() {
            assert_eq!(ThemeColor::parse(slot.as_str()), Some(slot));
        }
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert_eq!(ThemeColor::parse("accent7"), None);
        assert_eq!(ThemeColor::parse("ACCENT1"), None);
        assert_eq!(ThemeColor::parse("followedhyperlink"), None);
        assert_eq!(ThemeColor::parse(""), None);
    }

    #[test]
    fn all_is_exhaustive() {
        assert_eq!(ThemeColor::all().len(), ThemeColor::MAX_VALUE as usize + 1);
    }

    #[test]
    fn none_spells_not_theme_color() {
        assert_eq!(ThemeColor::parse("none"), Some(ThemeColor::NotThemeColor));
        assert_eq!(ThemeColor::NotThemeColor.as_str(), "none");
    }
}
