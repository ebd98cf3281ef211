// Copyright 2026 the Vellum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use smallvec::SmallVec;

/// Identifier for an element in a [`PropertyTree`](crate::PropertyTree).
///
/// An id is a handle, not a reference: it stays valid for the lifetime of the
/// tree that produced it, including after the element has been unlinked from
/// its parent. Ids are never reused.
#[derive(Copy, Clone, PartialOrd, Ord, PartialEq, Eq, Hash, Debug)]
pub struct ElementId(u32);

impl ElementId {
    pub(crate) const fn new(index: u32) -> Self {
        Self(index)
    }

    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A named attribute on an element.
#[derive(Clone, Debug)]
pub(crate) struct Attr {
    pub(crate) name: &'static str,
    pub(crate) value: String,
}

/// A single element node: its tag, attributes, and child elements.
#[derive(Clone, Debug)]
pub(crate) struct Element {
    pub(crate) tag: &'static str,
    pub(crate) attrs: SmallVec<[Attr; 2]>,
    pub(crate) children: SmallVec<[ElementId; 2]>,
}

impl Element {
    pub(crate) fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: SmallVec::new(),
            children: SmallVec::new(),
        }
    }
}
