// Copyright 2026 the Vellum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// The way a run's color is specified.
///
/// Returned by [`ColorFormat::color_type`](crate::ColorFormat::color_type).
/// There is no variant for "no color applied"; that state is modeled as
/// `None` at the call site, since it means the effective color is inherited
/// from the style hierarchy rather than specified here.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorType {
    /// The color is an explicit sRGB literal.
    Rgb,

    /// The color references a named theme slot.
    ///
    /// The element usually carries a literal alongside the reference, but
    /// the theme slot is what renders.
    Theme,

    /// The color is chosen automatically by the consumer, typically to
    /// contrast with the background.
    Auto,
}
