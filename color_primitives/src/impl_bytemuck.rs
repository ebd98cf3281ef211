// Copyright 2026 the Vellum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Optional `bytemuck` trait impls.

#![allow(
    unsafe_code,
    reason = "The `bytemuck` marker traits are `unsafe` and require `unsafe impl`."
)]

use crate::{Rgb, ThemeColor};
use bytemuck::{Contiguous, NoUninit, Pod, Zeroable, checked::CheckedBitPattern};

// Safety: The enum is `repr(u8)` and has only fieldless variants.
unsafe impl NoUninit for ThemeColor {}

// Safety: The enum is `repr(u8)` and `0` is a valid value.
unsafe impl Zeroable for ThemeColor {}

// Safety: The enum is `repr(u8)`.
unsafe impl CheckedBitPattern for ThemeColor {
    type Bits = u8;

    fn is_valid_bit_pattern(bits: &u8) -> bool {
        // Don't need to compare against MIN_VALUE as this is u8 and 0 is the MIN_VALUE.
        *bits <= Self::MAX_VALUE
    }
}

// Safety: The enum is `repr(u8)`. All values are `u8` and fall within
// the min and max values.
unsafe impl Contiguous for ThemeColor {
    type Int = u8;
    const MIN_VALUE: u8 = Self::Dark1 as u8;
    #[allow(
        clippy::use_self,
        reason = "Using `Self::MAX_VALUE` here would refer to `Contiguous::MAX_VALUE` (self-reference)."
    )]
    const MAX_VALUE: u8 = ThemeColor::MAX_VALUE;
}

// Safety: The struct is `repr(C)` with three `u8` fields, so it has no
// padding and the all-zeroes pattern is valid (black).
unsafe impl Zeroable for Rgb {}

// Safety: The struct is `repr(C)` with three `u8` fields; any bit pattern
// is a valid color.
unsafe impl Pod for Rgb {}

#[cfg(test)]
mod tests {
    use super::{Rgb, ThemeColor};
    use bytemuck::{Contiguous, Zeroable, checked::try_from_bytes};
    use core::ptr;

    #[test]
    fn checked_bit_pattern() {
        let valid = bytemuck::bytes_of(&2_u8);
        let invalid = bytemuck::bytes_of(&200_u8);

        assert_eq!(Ok(&ThemeColor::Dark2), try_from_bytes::<ThemeColor>(valid));

        assert!(try_from_bytes::<ThemeColor>(invalid).is_err());
    }

    #[test]
    fn contiguous() {
        let tc1 = ThemeColor::Accent3;
        let tc2 = ThemeColor::from_integer(tc1.into_integer());
        assert_eq!(Some(tc1), tc2);

        assert_eq!(None, ThemeColor::from_integer(255));
    }

    #[test]
    fn zeroable() {
        let tc = ThemeColor::zeroed();
        assert_eq!(tc, ThemeColor::Dark1);

        let rgb = Rgb::zeroed();
        assert_eq!(rgb, Rgb::new(0, 0, 0));
    }

    #[test]
    fn rgb_bytes() {
        let rgb = Rgb::new(0x1A, 0x2B, 0x3C);
        assert_eq!(bytemuck::bytes_of(&rgb), &[0x1A, 0x2B, 0x3C]);

        let back: &Rgb = bytemuck::from_bytes(&[0x1A, 0x2B, 0x3C]);
        assert_eq!(*back, rgb);
    }

    /// Tests that the [`Contiguous`] impl for [`ThemeColor`] is not trivially incorrect.
    const _: () = {
        let mut value = 0;
        while value <= ThemeColor::MAX_VALUE {
            // Safety: In a const context, therefore if this makes an invalid ThemeColor, that will be detected.
            let it: ThemeColor = unsafe { ptr::read((&raw const value).cast()) };
            // Evaluate the enum value to ensure it actually has a valid tag.
            if it as u8 != value {
                unreachable!();
            }
            value += 1;
        }
    };
}

#[cfg(doctest)]
/// Doctests aren't collected under `cfg(test)`; we can use `cfg(doctest)` instead.
mod doctests {
    /// Validates that any new variants in `ThemeColor` has led to a change in the `Contiguous`
    /// impl.
    ///
    /// ```compile_fail,E0080
    /// use bytemuck::Contiguous;
    /// use color_primitives::ThemeColor;
    /// const {
    ///     let value = ThemeColor::MAX_VALUE + 1;
    ///     // Safety: In a const context, therefore if this makes an invalid ThemeColor, that will be detected.
    ///     // (Indeed, we rely upon that)
    ///     let it: ThemeColor = unsafe { core::ptr::read((&raw const value).cast()) };
    ///     // Evaluate the enum value to ensure it actually has an invalid tag.
    ///     if it as u8 != value {
    ///         unreachable!();
    ///     }
    /// }
    /// ```
    const _THEME_COLOR: () = {};
}
