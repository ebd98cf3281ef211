// Copyright 2026 the Vellum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::element::{Attr, Element};
use crate::ElementId;

/// An arena of tagged elements forming a tree of style properties.
///
/// Elements are addressed through [`ElementId`] handles rather than
/// references, so a caller can hold ids to several elements while still
/// mutating the tree. Removing an element only unlinks it from its parent;
/// the element itself stays in the arena and remains accessible through its
/// id.
///
/// Ids are only meaningful for the tree that created them. Passing an id
/// from another tree may panic or address an unrelated element.
#[derive(Clone, Debug)]
pub struct PropertyTree {
    elements: Vec<Element>,
    root: ElementId,
}

impl PropertyTree {
    /// Create a tree containing a single root element with the given tag.
    pub fn new(root_tag: &'static str) -> Self {
        Self {
            elements: vec![Element::new(root_tag)],
            root: ElementId::new(0),
        }
    }

    /// Returns the id of the root element.
    #[inline]
    pub fn root(&self) -> ElementId {
        self.root
    }

    /// Returns the number of elements allocated in this tree.
    ///
    /// Unlinked elements still count; the arena never shrinks.
    #[expect(
        clippy::len_without_is_empty,
        reason = "A tree always contains at least its root element."
    )]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns the tag of an element.
    pub fn tag(&self, el: ElementId) -> &'static str {
        self.elements[el.index()].tag
    }

    /// Returns the first child of `parent` with the given tag, if any.
    pub fn child(&self, parent: ElementId, tag: &str) -> Option<ElementId> {
        self.elements[parent.index()]
            .children
            .iter()
            .copied()
            .find(|&child| self.elements[child.index()].tag == tag)
    }

    /// Iterate over the children of `parent`, in document order.
    pub fn children(&self, parent: ElementId) -> impl ExactSizeIterator<Item = ElementId> + '_ {
        self.elements[parent.index()].children.iter().copied()
    }

    /// Create a new element and link it as the last child of `parent`.
    pub fn append_child(&mut self, parent: ElementId, tag: &'static str) -> ElementId {
        let id = self.alloc(tag);
        self.elements[parent.index()].children.push(id);
        id
    }

    /// Create a new element and link it as a child of `parent`, immediately
    /// before the first existing child whose tag appears in `successors`.
    ///
    /// If no child carries a successor tag, the element is appended. This is
    /// how schema-ordered property lists insert a property without
    /// disturbing its siblings.
    pub fn insert_child_in_order(
        &mut self,
        parent: ElementId,
        tag: &'static str,
        successors: &[&str],
    ) -> ElementId {
        let id = self.alloc(tag);
        let at = self.elements[parent.index()]
            .children
            .iter()
            .position(|&child| successors.contains(&self.elements[child.index()].tag));
        match at {
            Some(at) => self.elements[parent.index()].children.insert(at, id),
            None => self.elements[parent.index()].children.push(id),
        }
        id
    }

    /// Unlink the first child of `parent` with the given tag.
    ///
    /// Returns `true` if a child was removed. The unlinked element stays in
    /// the arena, so ids pointing at it keep working; it is simply no longer
    /// reachable from `parent`.
    pub fn remove_child(&mut self, parent: ElementId, tag: &str) -> bool {
        let at = self.elements[parent.index()]
            .children
            .iter()
            .position(|&child| self.elements[child.index()].tag == tag);
        match at {
            Some(at) => {
                self.elements[parent.index()].children.remove(at);
                true
            }
            None => false,
        }
    }

    /// Returns the value of the named attribute on an element, if present.
    pub fn attr(&self, el: ElementId, name: &str) -> Option<&str> {
        self.elements[el.index()]
            .attrs
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    /// Set the named attribute on an element.
    ///
    /// An existing attribute is overwritten in place, keeping its position
    /// among its siblings; a new attribute is appended after the existing
    /// ones.
    pub fn set_attr(&mut self, el: ElementId, name: &'static str, value: impl Into<String>) {
        let value = value.into();
        let element = &mut self.elements[el.index()];
        match element.attrs.iter().position(|attr| attr.name == name) {
            Some(at) => element.attrs[at].value = value,
            None => element.attrs.push(Attr { name, value }),
        }
    }

    /// Remove the named attribute from an element.
    ///
    /// Returns `true` if the attribute was present.
    pub fn remove_attr(&mut self, el: ElementId, name: &str) -> bool {
        let element = &mut self.elements[el.index()];
        match element.attrs.iter().position(|attr| attr.name == name) {
            Some(at) => {
                element.attrs.remove(at);
                true
            }
            None => false,
        }
    }

    /// Iterate over the attributes of an element, in document order.
    pub fn attrs(&self, el: ElementId) -> impl ExactSizeIterator<Item = (&'static str, &str)> {
        self.elements[el.index()]
            .attrs
            .iter()
            .map(|attr| (attr.name, attr.value.as_str()))
    }

    fn alloc(&mut self, tag: &'static str) -> ElementId {
        let index =
            u32::try_from(self.elements.len()).expect("element arena exceeds u32 capacity");
        self.elements.push(Element::new(tag));
        ElementId::new(index)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use crate::PropertyTree;

    #[test]
    fn new_tree_has_only_a_root() {
        let tree = PropertyTree::new("w:rPr");
        assert_eq!(tree.tag(tree.root()), "w:rPr");
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.children(tree.root()).len(), 0);
    }

    #[test]
    fn append_and_find_child() {
        let mut tree = PropertyTree::new("w:rPr");
        let color = tree.append_child(tree.root(), "w:color");
        assert_eq!(tree.child(tree.root(), "w:color"), Some(color));
        assert_eq!(tree.child(tree.root(), "w:sz"), None);
        assert_eq!(tree.tag(color), "w:color");
    }

    #[test]
    fn child_returns_the_first_match() {
        let mut tree = PropertyTree::new("root");
        let first = tree.append_child(tree.root(), "dup");
        let second = tree.append_child(tree.root(), "dup");
        assert_ne!(first, second);
        assert_eq!(tree.child(tree.root(), "dup"), Some(first));
    }

    #[test]
    fn insert_child_in_order_goes_before_the_first_successor() {
        let mut tree = PropertyTree::new("w:rPr");
        let bold = tree.append_child(tree.root(), "w:b");
        let size = tree.append_child(tree.root(), "w:sz");
        let lang = tree.append_child(tree.root(), "w:lang");

        let color = tree.insert_child_in_order(tree.root(), "w:color", &["w:sz", "w:lang"]);

        let children: Vec<_> = tree.children(tree.root()).collect();
        assert_eq!(children, [bold, color, size, lang]);
    }

    #[test]
    fn insert_child_in_order_appends_without_a_successor() {
        let mut tree = PropertyTree::new("w:rPr");
        let bold = tree.append_child(tree.root(), "w:b");

        let color = tree.insert_child_in_order(tree.root(), "w:color", &["w:sz"]);

        let children: Vec<_> = tree.children(tree.root()).collect();
        assert_eq!(children, [bold, color]);
    }

    #[test]
    fn remove_child_unlinks_but_keeps_the_element() {
        let mut tree = PropertyTree::new("w:rPr");
        let color = tree.append_child(tree.root(), "w:color");
        tree.set_attr(color, "w:val", "FF0000");

        assert!(tree.remove_child(tree.root(), "w:color"));
        assert_eq!(tree.child(tree.root(), "w:color"), None);

        // The detached element is still addressable through its id.
        assert_eq!(tree.tag(color), "w:color");
        assert_eq!(tree.attr(color, "w:val"), Some("FF0000"));
    }

    #[test]
    fn remove_child_without_a_match_is_a_no_op() {
        let mut tree = PropertyTree::new("w:rPr");
        assert!(!tree.remove_child(tree.root(), "w:color"));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn ids_are_not_reused() {
        let mut tree = PropertyTree::new("root");
        let first = tree.append_child(tree.root(), "a");
        assert!(tree.remove_child(tree.root(), "a"));
        let second = tree.append_child(tree.root(), "a");
        assert_ne!(first, second);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn set_attr_overwrites_in_place() {
        let mut tree = PropertyTree::new("root");
        let el = tree.append_child(tree.root(), "el");
        tree.set_attr(el, "first", "1");
        tree.set_attr(el, "second", "2");
        tree.set_attr(el, "first", "updated");

        let attrs: Vec<_> = tree.attrs(el).collect();
        assert_eq!(attrs, [("first", "updated"), ("second", "2")]);
    }

    #[test]
    fn set_attr_appends_new_attributes() {
        let mut tree = PropertyTree::new("root");
        let el = tree.append_child(tree.root(), "el");
        assert_eq!(tree.attr(el, "name"), None);
        tree.set_attr(el, "name", "value");
        assert_eq!(tree.attr(el, "name"), Some("value"));
        assert_eq!(tree.attrs(el).len(), 1);
    }

    #[test]
    fn remove_attr_keeps_the_others() {
        let mut tree = PropertyTree::new("root");
        let el = tree.append_child(tree.root(), "el");
        tree.set_attr(el, "first", "1");
        tree.set_attr(el, "second", "2");

        assert!(tree.remove_attr(el, "first"));
        assert!(!tree.remove_attr(el, "first"));

        let attrs: Vec<_> = tree.attrs(el).collect();
        assert_eq!(attrs, [("second", "2")]);
    }

    #[test]
    fn children_iterates_in_document_order() {
        let mut tree = PropertyTree::new("root");
        let a = tree.append_child(tree.root(), "a");
        let b = tree.append_child(tree.root(), "b");
        let grandchild = tree.append_child(a, "c");

        let children: Vec<_> = tree.children(tree.root()).collect();
        assert_eq!(children, [a, b]);
        let children: Vec<_> = tree.children(a).collect();
        assert_eq!(children, [grandchild]);
    }
}
