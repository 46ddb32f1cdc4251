// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Boarding Numeric Trait
//!
//! Collects the bounds a time value needs inside the model and the solver
//! into a single alias. Durations are only ever added and compared, so the
//! trait does not require `Ord`: floating point instances are accepted as
//! they come from the instance files, and integer instances are produced by
//! discretizing at the boundary.

use num_traits::{NumCast, ToPrimitive, Zero};
use std::ops::{Add, Mul, Sub};

/// Numeric types usable as time values.
///
/// Implemented for every type satisfying the bounds, in practice `f32`,
/// `f64` and the signed integer types.
pub trait BoardingNumeric:
    Copy
    + PartialOrd
    + Zero
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + ToPrimitive
    + NumCast
    + std::fmt::Debug
    + std::fmt::Display
    + Send
    + Sync
{
    /// Returns the larger of two values. Incomparable values (NaN) keep `self`.
    #[inline]
    fn max_of(self, other: Self) -> Self {
        if other > self { other } else { self }
    }

    /// Returns true if the value is strictly below zero.
    #[inline]
    fn is_negative_value(&self) -> bool {
        *self < Self::zero()
    }

    /// Returns false for NaN and infinities. Integer values are always finite.
    #[inline]
    fn is_finite_value(&self) -> bool {
        self.to_f64().is_some_and(f64::is_finite)
    }
}

impl<T> BoardingNumeric for T where
    T: Copy
        + PartialOrd
        + Zero
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + ToPrimitive
        + NumCast
        + std::fmt::Debug
        + std::fmt::Display
        + Send
        + Sync
{
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_numeric<T: BoardingNumeric>() {}

    #[test]
    fn test_primitive_types_are_numeric() {
        assert_numeric::<f64>();
        assert_numeric::<f32>();
        assert_numeric::<i64>();
        assert_numeric::<i32>();
    }

    #[test]
    fn test_max_of() {
        assert_eq!(3i64.max_of(7), 7);
        assert_eq!(7i64.max_of(3), 7);
        assert_eq!(1.5f64.max_of(-2.0), 1.5);
    }

    #[test]
    fn test_is_negative_value() {
        assert!((-1i64).is_negative_value());
        assert!(!0i64.is_negative_value());
        assert!(!(0.0f64).is_negative_value());
        assert!((-0.5f64).is_negative_value());
    }

    #[test]
    fn test_is_finite_value() {
        assert!(3i64.is_finite_value());
        assert!(2.5f64.is_finite_value());
        assert!(!f64::NAN.is_finite_value());
        assert!(!f64::INFINITY.is_finite_value());
        assert!(!f64::NEG_INFINITY.is_finite_value());
    }
}
