// Copyright 2026 the Vellum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fundamental document color value types.
//!
//! This crate is intended as a lightweight, `no_std`-friendly vocabulary layer that can be shared
//! across document styling systems. It focuses on small, typed representations of the "leaf"
//! concepts of `WordprocessingML` color markup: literal sRGB values, the `auto` keyword, and named
//! theme color slots.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
//! - `bytemuck`: Implement traits from `bytemuck` on [`Rgb`] and [`ThemeColor`].
//!
//! ## Example
//!
//! ```
//! use color_primitives::{ColorValue, Rgb, ThemeColor};
//!
//! let rgb = Rgb::parse("1a2b3c").unwrap();
//! assert_eq!(rgb.to_string(), "1A2B3C");
//! assert_eq!(rgb.to_u32(), 0x001A_2B3C);
//!
//! assert_eq!(ColorValue::parse("auto"), Ok(ColorValue::Auto));
//! assert_eq!(ColorValue::parse("FF0000"), Ok(ColorValue::Rgb(Rgb::new(0xFF, 0, 0))));
//!
//! let slot = ThemeColor::parse("accent1").unwrap();
//! assert_eq!(slot.as_str(), "accent1");
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

mod color_value;
#[cfg(feature = "bytemuck")]
mod impl_bytemuck;
mod rgb;
mod theme;

pub use color_value::ColorValue;
pub use rgb::{ParseRgbError, ParseRgbErrorKind, Rgb};
pub use theme::ThemeColor;
