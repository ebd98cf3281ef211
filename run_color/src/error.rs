// Copyright 2026 the Vellum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::{String, ToString};

use color_primitives::ParseRgbError;

use crate::ColorElement;

/// Rich error type for run color reads.
///
/// Carries a non-exhaustive [`ErrorKind`] plus the wire name of the attribute
/// that failed and, when relevant, the raw attribute text and the underlying
/// parse failure.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// The wire name of the attribute that failed to read.
    attribute: &'static str,

    /// The raw attribute text that was rejected, when the attribute was present.
    raw: Option<String>,

    /// The underlying hex parse failure, for malformed color values.
    parse: Option<ParseRgbError>,
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The wire name of the attribute that failed to read.
    pub fn attribute(&self) -> &'static str {
        self.attribute
    }

    /// The raw attribute text that was rejected, if the attribute was present.
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// The underlying parse failure, when the error kind is
    /// [`ErrorKind::MalformedColorValue`].
    pub fn parse_error(&self) -> Option<ParseRgbError> {
        self.parse
    }

    pub(crate) fn malformed_color_value(raw: &str, parse: ParseRgbError) -> Self {
        Self {
            kind: ErrorKind::MalformedColorValue,
            attribute: ColorElement::VAL,
            raw: Some(raw.to_string()),
            parse: Some(parse),
        }
    }

    pub(crate) fn missing_color_value() -> Self {
        Self {
            kind: ErrorKind::MissingColorValue,
            attribute: ColorElement::VAL,
            raw: None,
            parse: None,
        }
    }

    pub(crate) fn unknown_theme_color(raw: &str) -> Self {
        Self {
            kind: ErrorKind::UnknownThemeColor,
            attribute: ColorElement::THEME_COLOR,
            raw: Some(raw.to_string()),
            parse: None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ErrorKind::MalformedColorValue => {
                if let (Some(raw), Some(parse)) = (&self.raw, self.parse) {
                    write!(
                        f,
                        "{} has malformed color value {:?}: {}",
                        self.attribute, raw, parse
                    )
                } else {
                    write!(f, "{} has a malformed color value", self.attribute)
                }
            }
            ErrorKind::MissingColorValue => {
                write!(f, "color element has no {} attribute", self.attribute)
            }
            ErrorKind::UnknownThemeColor => {
                if let Some(raw) = &self.raw {
                    write!(f, "{} names unknown theme color {:?}", self.attribute, raw)
                } else {
                    write!(f, "{} names an unknown theme color", self.attribute)
                }
            }
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The color value attribute held text that is neither a six-digit hex
    /// literal nor the `auto` keyword.
    MalformedColorValue,

    /// A color element is present but its required color value attribute is
    /// not.
    MissingColorValue,

    /// The theme reference attribute named a theme slot this crate does not
    /// recognize.
    UnknownThemeColor,
}
