// Copyright 2026 the Vellum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Kinds of errors that can occur when parsing RGB hex strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseRgbErrorKind {
    /// The source string was not exactly six bytes long.
    WrongLength,
    /// The source string contained a byte that is not an ASCII hex digit.
    InvalidDigit,
}

/// Error returned when parsing RGB hex strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseRgbError {
    kind: ParseRgbErrorKind,
    at: usize,
}

impl ParseRgbError {
    const fn new(kind: ParseRgbErrorKind, at: usize) -> Self {
        Self { kind, at }
    }

    /// Returns the error kind.
    pub const fn kind(self) -> ParseRgbErrorKind {
        self.kind
    }

    /// Returns the byte offset into the source at which parsing failed.
    ///
    /// For [`ParseRgbErrorKind::WrongLength`] this is the source length when the
    /// string was too short, or `6` (the first excess byte) when it was too long.
    pub const fn byte_offset(self) -> usize {
        self.at
    }
}

impl fmt::Display for ParseRgbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseRgbErrorKind::WrongLength => write!(f, "expected exactly 6 hex digits"),
            ParseRgbErrorKind::InvalidDigit => write!(f, "invalid hex digit at byte {}", self.at),
        }
    }
}

impl core::error::Error for ParseRgbError {}

/// An immutable 24-bit RGB color value with no indirection.
///
/// This is the "literal" form a document records for a run color, as opposed
/// to a theme-slot reference ([`ThemeColor`](crate::ThemeColor)) or the
/// reserved automatic marker ([`ColorValue::Auto`](crate::ColorValue::Auto)).
///
/// The wire form is exactly six hex digits with no `#` prefix; [`Rgb::parse`]
/// accepts either letter case and the `Display` impl writes uppercase, so a
/// displayed value always re-parses to itself.
///
/// # Example
/// ```
/// use color_primitives::Rgb;
///
/// let rgb = Rgb::parse("1a2b3c").unwrap();
/// assert_eq!((rgb.r(), rgb.g(), rgb.b()), (0x1A, 0x2B, 0x3C));
/// assert_eq!(rgb.to_string(), "1A2B3C");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(C)]
pub struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

impl Rgb {
    /// Creates a color from red, green and blue components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the red component.
    pub const fn r(self) -> u8 {
        self.r
    }

    /// Returns the green component.
    pub const fn g(self) -> u8 {
        self.g
    }

    /// Returns the blue component.
    pub const fn b(self) -> u8 {
        self.b
    }

    /// Returns this color packed as `0x00RRGGBB`.
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Creates a color from a `0x00RRGGBB` packed value.
    ///
    /// Returns `None` if any bits above the low 24 are set.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "the guard keeps every component within eight bits"
    )]
    pub const fn from_u32(packed: u32) -> Option<Self> {
        if packed > 0x00FF_FFFF {
            return None;
        }
        Some(Self::new(
            (packed >> 16) as u8,
            (packed >> 8) as u8,
            packed as u8,
        ))
    }

    /// Parses a color from exactly six hex digits, such as `3C2F80`.
    ///
    /// Both letter cases are accepted. Prefixes (`#`), whitespace, and short
    /// forms are rejected; the wire shape is fixed by the document schema.
    ///
    /// # Example
    /// ```
    /// use color_primitives::{ParseRgbErrorKind, Rgb};
    ///
    /// assert_eq!(Rgb::parse("3C2F80"), Ok(Rgb::new(0x3C, 0x2F, 0x80)));
    /// let err = Rgb::parse("#3C2F80").unwrap_err();
    /// assert_eq!(err.kind(), ParseRgbErrorKind::WrongLength);
    /// ```
    pub const fn parse(s: &str) -> Result<Self, ParseRgbError> {
        let bytes = s.as_bytes();
        if bytes.len() != 6 {
            let at = if bytes.len() < 6 { bytes.len() } else { 6 };
            return Err(ParseRgbError::new(ParseRgbErrorKind::WrongLength, at));
        }
        let mut nibbles = [0_u8; 6];
        let mut i = 0;
        while i < 6 {
            nibbles[i] = match hex_nibble(bytes[i]) {
                Some(n) => n,
                None => return Err(ParseRgbError::new(ParseRgbErrorKind::InvalidDigit, i)),
            };
            i += 1;
        }
        Ok(Self::new(
            (nibbles[0] << 4) | nibbles[1],
            (nibbles[2] << 4) | nibbles[3],
            (nibbles[4] << 4) | nibbles[5],
        ))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

const fn hex_nibble(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use super::{ParseRgbErrorKind, Rgb};
    use alloc::format;
    use alloc::string::ToString;

    #[test]
    fn parse_accepts_both_cases() {
        let expected = Rgb::new(0x1A, 0x2B, 0x3C);
        assert_eq!(Rgb::parse("1A2B3C"), Ok(expected));
        assert_eq!(Rgb::parse("1a2b3c"), Ok(expected));
        assert_eq!(Rgb::parse("1A2b3C"), Ok(expected));
    }

    #[test]
    fn parse_rejects_wrong_length() {
        for (source, at) in [("", 0), ("12345", 5), ("1234567", 6), ("#1A2B3C", 6)] {
            let err = Rgb::parse(source).unwrap_err();
            assert_eq!(err.kind(), ParseRgbErrorKind::WrongLength, "source {source:?}");
            assert_eq!(err.byte_offset(), at, "source {source:?}");
        }
    }

    #[test]
    fn parse_rejects_non_hex_digits() {
        let err = Rgb::parse("ZZZZZZ").unwrap_err();
        assert_eq!(err.kind(), ParseRgbErrorKind::InvalidDigit);
        assert_eq!(err.byte_offset(), 0);

        let err = Rgb::parse("12345Z").unwrap_err();
        assert_eq!(err.kind(), ParseRgbErrorKind::InvalidDigit);
        assert_eq!(err.byte_offset(), 5);

        // Interior whitespace is not a digit either.
        let err = Rgb::parse("1A 2B3").unwrap_err();
        assert_eq!(err.kind(), ParseRgbErrorKind::InvalidDigit);
        assert_eq!(err.byte_offset(), 2);
    }

    #[test]
    fn display_is_uppercase_and_zero_padded() {
        assert_eq!(Rgb::new(0, 1, 2).to_string(), "000102");
        assert_eq!(Rgb::new(0xAB, 0xCD, 0xEF).to_string(), "ABCDEF");
    }

    #[test]
    fn display_round_trips_through_parse() {
        for packed in [0x000000, 0x0A0B0C, 0x123456, 0xFFFFFF] {
            let rgb = Rgb::from_u32(packed).unwrap();
            assert_eq!(Rgb::parse(&rgb.to_string()), Ok(rgb));
        }
    }

    #[test]
    fn packed_conversion() {
        let rgb = Rgb::new(0x1A, 0x2B, 0x3C);
        assert_eq!(rgb.to_u32(), 0x1A2B3C);
        assert_eq!(Rgb::from_u32(0x1A2B3C), Some(rgb));
        assert_eq!(Rgb::from_u32(0x0100_0000), None);
    }

    #[test]
    fn error_display() {
        let msg = format!("{}", Rgb::parse("12345").unwrap_err());
        assert!(msg.contains("6 hex digits"));

        let msg = format!("{}", Rgb::parse("12345Z").unwrap_err());
        assert!(msg.contains("byte 5"));
    }
}
