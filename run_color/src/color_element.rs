// Copyright 2026 the Vellum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::ToString;

use color_primitives::{ColorValue, ThemeColor};
use property_tree::{ElementId, PropertyTree};

use crate::Error;

/// Tags that must follow `w:color` inside a run property container, in
/// schema order.
pub(crate) const COLOR_SUCCESSORS: &[&str] = &[
    "w:spacing",
    "w:w",
    "w:kern",
    "w:position",
    "w:sz",
    "w:szCs",
    "w:highlight",
    "w:u",
    "w:effect",
    "w:bdr",
    "w:shd",
    "w:fitText",
    "w:vertAlign",
    "w:rtl",
    "w:cs",
    "w:em",
    "w:lang",
    "w:eastAsianLayout",
    "w:specVanish",
    "w:oMath",
];

/// A typed handle over a single `w:color` element.
///
/// This is the write surface for everything the element can express,
/// including the theme reference and automatic value that
/// [`ColorFormat`](crate::ColorFormat) itself never writes. Producers that
/// need to emit theme-referenced or automatic colors can do so here, and
/// reads through `ColorFormat` classify the result faithfully.
#[derive(Debug)]
pub struct ColorElement<'a> {
    tree: &'a mut PropertyTree,
    el: ElementId,
}

impl<'a> ColorElement<'a> {
    /// The tag of the element this handle wraps.
    pub const TAG: &'static str = "w:color";

    /// The wire name of the color value attribute.
    pub const VAL: &'static str = "w:val";

    /// The wire name of the theme reference attribute.
    pub const THEME_COLOR: &'static str = "w:themeColor";

    /// Wrap an existing element.
    ///
    /// Returns `None` if the element's tag is not [`TAG`](Self::TAG).
    pub fn new(tree: &'a mut PropertyTree, el: ElementId) -> Option<Self> {
        (tree.tag(el) == Self::TAG).then_some(Self { tree, el })
    }

    /// Wrap the `w:color` child of `props`, creating it if necessary.
    ///
    /// A created element is linked in schema order among its siblings and
    /// starts with no attributes.
    pub fn get_or_add(tree: &'a mut PropertyTree, props: ElementId) -> Self {
        let el = match tree.child(props, Self::TAG) {
            Some(el) => el,
            None => tree.insert_child_in_order(props, Self::TAG, COLOR_SUCCESSORS),
        };
        Self { tree, el }
    }

    /// Returns the id of the underlying element.
    #[inline]
    pub fn id(&self) -> ElementId {
        self.el
    }

    /// Read the color value attribute as a typed value.
    pub fn val(&self) -> Result<ColorValue, Error> {
        parse_val(self.raw_val())
    }

    /// Returns the raw text of the color value attribute, if present.
    pub fn raw_val(&self) -> Option<&str> {
        self.tree.attr(self.el, Self::VAL)
    }

    /// Set the color value attribute.
    pub fn set_val(&mut self, value: ColorValue) {
        self.tree.set_attr(self.el, Self::VAL, value.to_string());
    }

    /// Read the theme reference attribute.
    ///
    /// Returns `Ok(None)` when the attribute is absent.
    pub fn theme_color(&self) -> Result<Option<ThemeColor>, Error> {
        parse_theme(self.tree.attr(self.el, Self::THEME_COLOR))
    }

    /// Set the theme reference attribute.
    pub fn set_theme_color(&mut self, slot: ThemeColor) {
        self.tree.set_attr(self.el, Self::THEME_COLOR, slot.as_str());
    }

    /// Remove the theme reference attribute.
    ///
    /// Returns `true` if the attribute was present.
    pub fn remove_theme_color(&mut self) -> bool {
        self.tree.remove_attr(self.el, Self::THEME_COLOR)
    }
}

/// Parse the text of a color value attribute, `None` meaning absent.
pub(crate) fn parse_val(raw: Option<&str>) -> Result<ColorValue, Error> {
    let raw = raw.ok_or_else(Error::missing_color_value)?;
    ColorValue::parse(raw).map_err(|parse| Error::malformed_color_value(raw, parse))
}

/// Parse the text of a theme reference attribute, `None` meaning absent.
pub(crate) fn parse_theme(raw: Option<&str>) -> Result<Option<ThemeColor>, Error> {
    match raw {
        Some(raw) => match ThemeColor::parse(raw) {
            Some(slot) => Ok(Some(slot)),
            None => Err(Error::unknown_theme_color(raw)),
        },
        None => Ok(None),
    }
}
