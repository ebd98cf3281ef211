// Copyright 2026 the Vellum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed access to the color formatting of character runs.
//!
//! `WordprocessingML` specifies a run's color with a single `w:color` element
//! whose attributes can express four distinct states: no color at all (the
//! effective color is inherited from the style hierarchy), an automatic
//! color, an explicit sRGB literal, or a reference to a named theme color
//! slot. [`ColorFormat`] is an accessor over that element: it classifies the
//! state without parsing, parses literals eagerly on read, and writes
//! explicit literals in place.
//!
//! The element's raw surface is exposed as [`ColorElement`] for producers
//! that need the states `ColorFormat` never writes, such as theme references
//! and automatic colors.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
//!
//! ## Example
//!
//! ```
//! use color_primitives::{ColorValue, Rgb, ThemeColor};
//! use property_tree::PropertyTree;
//! use run_color::{ColorElement, ColorFormat, ColorType};
//!
//! let mut tree = PropertyTree::new("w:rPr");
//! let props = tree.root();
//!
//! // A theme-referenced color written by some other producer.
//! let mut element = ColorElement::get_or_add(&mut tree, props);
//! element.set_theme_color(ThemeColor::Accent1);
//! element.set_val(ColorValue::Rgb(Rgb::new(0x4F, 0x81, 0xBD)));
//!
//! let mut color = ColorFormat::new(&mut tree, props);
//! assert_eq!(color.color_type(), Some(ColorType::Theme));
//! assert_eq!(color.theme_color(), Ok(Some(ThemeColor::Accent1)));
//!
//! // Setting a literal replaces the theme reference.
//! color.set_rgb(Rgb::new(0xFF, 0x00, 0x00));
//! assert_eq!(color.color_type(), Some(ColorType::Rgb));
//! assert_eq!(color.rgb(), Ok(Some(Rgb::new(0xFF, 0x00, 0x00))));
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

extern crate alloc;

mod color_element;
mod color_type;
mod error;
mod format;


pub use crate::color_element::ColorElement;
pub use crate::color_type::ColorType;
pub use crate::error::{Error, ErrorKind};
pub use crate::format::ColorFormat;
