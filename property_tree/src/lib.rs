// Copyright 2026 the Vellum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An arena-backed tree of tagged style property elements.
//!
//! Run and paragraph formatting in `WordprocessingML` is carried by small
//! property elements (`w:color`, `w:sz`, and friends) nested under a property
//! container. This crate stores such a tree in a single arena and hands out
//! [`ElementId`] handles instead of references, so higher-level accessors can
//! keep ids to the elements they care about while the tree is mutated
//! underneath them.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
//!
//! ## Example
//!
//! ```
//! use property_tree::PropertyTree;
//!
//! let mut tree = PropertyTree::new("w:rPr");
//! let color = tree.append_child(tree.root(), "w:color");
//! tree.set_attr(color, "w:val", "FF0000");
//!
//! assert_eq!(tree.child(tree.root(), "w:color"), Some(color));
//! assert_eq!(tree.attr(color, "w:val"), Some("FF0000"));
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

mod element;
mod tree;

pub use crate::element::ElementId;
pub use crate::tree::PropertyTree;
