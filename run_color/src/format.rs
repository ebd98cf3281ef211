// Copyright 2026 the Vellum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use color_primitives::{ColorValue, Rgb, ThemeColor};
use property_tree::{ElementId, PropertyTree};

use crate::color_element::{parse_theme, parse_val};
use crate::{ColorElement, ColorType, Error};

/// The unparsed shape of a run's color markup.
///
/// Classification never parses attribute text. It only looks at which
/// attributes are present, plus a keyword comparison to pick out automatic
/// colors; the raw value text is carried along untouched for the literal
/// read to parse.
#[derive(Debug)]
enum RawColor<'t> {
    /// No color element is present.
    Unset,

    /// The value is the `auto` keyword and there is no theme reference.
    Automatic,

    /// An explicit value with no theme reference.
    ///
    /// `val` is `None` when the element is present but its required value
    /// attribute is not; that malformation is classified here and reported
    /// by the literal read.
    Explicit { val: Option<&'t str> },

    /// A theme reference, with whatever literal sits alongside it.
    Themed { val: Option<&'t str> },
}

fn raw_color(tree: &PropertyTree, props: ElementId) -> RawColor<'_> {
    let Some(el) = tree.child(props, ColorElement::TAG) else {
        return RawColor::Unset;
    };
    let val = tree.attr(el, ColorElement::VAL);
    if tree.attr(el, ColorElement::THEME_COLOR).is_some() {
        return RawColor::Themed { val };
    }
    match val {
        Some(raw) if raw == ColorValue::AUTO_KEYWORD => RawColor::Automatic,
        val => RawColor::Explicit { val },
    }
}

/// Read/write access to the color of a run of text.
///
/// A `ColorFormat` addresses the `w:color` element under a run property
/// container, whether or not that element currently exists. Reads report the
/// element's state as-is, including states this accessor cannot produce
/// itself; writes create the element on demand.
///
/// ## Example
///
/// ```
/// use color_primitives::Rgb;
/// use property_tree::PropertyTree;
/// use run_color::{ColorFormat, ColorType};
///
/// let mut tree = PropertyTree::new("w:rPr");
/// let props = tree.root();
///
/// let mut color = ColorFormat::new(&mut tree, props);
/// assert_eq!(color.color_type(), None);
///
/// color.set_rgb(Rgb::new(0x1A, 0x2B, 0x3C));
/// assert_eq!(color.color_type(), Some(ColorType::Rgb));
/// assert_eq!(color.rgb(), Ok(Some(Rgb::new(0x1A, 0x2B, 0x3C))));
///
/// color.clear();
/// assert_eq!(color.color_type(), None);
/// ```
#[derive(Debug)]
pub struct ColorFormat<'a> {
    tree: &'a mut PropertyTree,
    props: ElementId,
}

impl<'a> ColorFormat<'a> {
    /// Create an accessor for the color element under `props`.
    ///
    /// `props` is the run property container (conventionally a `w:rPr`
    /// element). The color element itself need not exist yet.
    pub fn new(tree: &'a mut PropertyTree, props: ElementId) -> Self {
        Self { tree, props }
    }

    /// Classify the way this run's color is specified.
    ///
    /// Returns `None` when no color element is present, meaning the
    /// effective color is inherited from the style hierarchy. A theme
    /// reference wins over the value attribute, and a present-but-malformed
    /// value still classifies as [`ColorType::Rgb`]; the failure is reported
    /// by [`rgb`](Self::rgb) instead.
    pub fn color_type(&self) -> Option<ColorType> {
        match raw_color(self.tree, self.props) {
            RawColor::Unset => None,
            RawColor::Automatic => Some(ColorType::Auto),
            RawColor::Explicit { .. } => Some(ColorType::Rgb),
            RawColor::Themed { .. } => Some(ColorType::Theme),
        }
    }

    /// Read the run's color literal.
    ///
    /// Returns `Ok(None)` when there is nothing to read: no color element,
    /// or an automatic color. A theme-referenced color usually carries the
    /// literal last resolved for it, which is returned here; treat it as a
    /// hint, since the theme reference is what renders.
    ///
    /// Errors if the element is present but its value is missing or does not
    /// parse.
    pub fn rgb(&self) -> Result<Option<Rgb>, Error> {
        match raw_color(self.tree, self.props) {
            RawColor::Unset | RawColor::Automatic => Ok(None),
            RawColor::Explicit { val } | RawColor::Themed { val } => Ok(parse_val(val)?.as_rgb()),
        }
    }

    /// Read the run's theme color slot.
    ///
    /// Returns `Ok(None)` when no color element is present or the element
    /// carries no theme reference.
    pub fn theme_color(&self) -> Result<Option<ThemeColor>, Error> {
        match self.tree.child(self.props, ColorElement::TAG) {
            Some(el) => parse_theme(self.tree.attr(el, ColorElement::THEME_COLOR)),
            None => Ok(None),
        }
    }

    /// Set the run's color to an explicit literal.
    ///
    /// The color element is created on demand, in schema order among its
    /// siblings, and mutated in place when it already exists. Any theme
    /// reference is removed; this is the only operation here that drops one.
    /// The previous state does not matter.
    pub fn set_rgb(&mut self, rgb: Rgb) {
        let mut element = ColorElement::get_or_add(self.tree, self.props);
        element.remove_theme_color();
        element.set_val(ColorValue::Rgb(rgb));
    }

    /// Remove the run's color element entirely.
    ///
    /// Afterwards [`color_type`](Self::color_type) reports `None` and the
    /// effective color is inherited. Clearing an already-unset color is a
    /// no-op.
    pub fn clear(&mut self) {
        self.tree.remove_child(self.props, ColorElement::TAG);
    }
}
