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

use crate::num::BoardingNumeric;
use num_traits::Zero;
use std::{
    iter::Sum,
    ops::{Add, AddAssign, Sub},
};

/// An absolute instant on the boarding clock, measured from boarding start.
#[repr(transparent)]
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimePoint<T>(T);

impl<T> TimePoint<T> {
    #[inline]
    pub const fn new(value: T) -> Self {
        TimePoint(value)
    }

    #[inline]
    pub fn zero() -> Self
    where
        T: Zero,
    {
        TimePoint(T::zero())
    }

    #[inline]
    pub const fn value(&self) -> T
    where
        T: Copy,
    {
        self.0
    }

    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }

    /// The later of two instants.
    #[inline]
    pub fn latest(self, other: Self) -> Self
    where
        T: BoardingNumeric,
    {
        TimePoint(self.0.max_of(other.0))
    }

    #[inline]
    pub fn map<U, F>(self, f: F) -> TimePoint<U>
    where
        F: FnOnce(T) -> U,
    {
        TimePoint(f(self.0))
    }
}

impl<T: std::fmt::Display> std::fmt::Display for TimePoint<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TimePoint({})", self.0)
    }
}

impl<T: Zero> Default for TimePoint<T> {
    #[inline]
    fn default() -> Self {
        TimePoint(T::zero())
    }
}

impl<T: Add<Output = T>> Add<TimeDelta<T>> for TimePoint<T> {
    type Output = TimePoint<T>;

    #[inline]
    fn add(self, rhs: TimeDelta<T>) -> Self::Output {
        TimePoint(self.0 + rhs.0)
    }
}

impl<T: Add<Output = T> + Copy> AddAssign<TimeDelta<T>> for TimePoint<T> {
    #[inline]
    fn add_assign(&mut self, rhs: TimeDelta<T>) {
        self.0 = self.0 + rhs.0;
    }
}

impl<T: Sub<Output = T>> Sub<TimePoint<T>> for TimePoint<T> {
    type Output = TimeDelta<T>;

    #[inline]
    fn sub(self, rhs: TimePoint<T>) -> Self::Output {
        TimeDelta(self.0 - rhs.0)
    }
}

/// A non-absolute duration: a move time, a settle time, or the distance
/// between two `TimePoint`s.
#[repr(transparent)]
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeDelta<T>(T);

impl<T> TimeDelta<T> {
    #[inline]
    pub const fn new(value: T) -> Self {
        TimeDelta(value)
    }

    #[inline]
    pub fn zero() -> Self
    where
        T: Zero,
    {
        TimeDelta(T::zero())
    }

    #[inline]
    pub const fn value(&self) -> T
    where
        T: Copy,
    {
        self.0
    }

    #[inline]
    pub fn is_negative(&self) -> bool
    where
        T: BoardingNumeric,
    {
        self.0.is_negative_value()
    }

    #[inline]
    pub fn is_finite(&self) -> bool
    where
        T: BoardingNumeric,
    {
        self.0.is_finite_value()
    }

    #[inline]
    pub fn map<U, F>(self, f: F) -> TimeDelta<U>
    where
        F: FnOnce(T) -> U,
    {
        TimeDelta(f(self.0))
    }
}

impl<T: std::fmt::Display> std::fmt::Display for TimeDelta<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TimeDelta({})", self.0)
    }
}

impl<T: Zero> Default for TimeDelta<T> {
    #[inline]
    fn default() -> Self {
        TimeDelta(T::zero())
    }
}

impl<T> From<T> for TimeDelta<T> {
    #[inline]
    fn from(v: T) -> Self {
        TimeDelta(v)
    }
}

impl<T: Add<Output = T>> Add for TimeDelta<T> {
    type Output = TimeDelta<T>;

    #[inline]
    fn add(self, rhs: TimeDelta<T>) -> Self::Output {
        TimeDelta(self.0 + rhs.0)
    }
}

impl<T: Add<Output = T> + Copy> AddAssign for TimeDelta<T> {
    #[inline]
    fn add_assign(&mut self, rhs: TimeDelta<T>) {
        self.0 = self.0 + rhs.0;
    }
}

impl<T: Zero + Add<Output = T>> Sum for TimeDelta<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(TimeDelta(T::zero()), |acc, d| TimeDelta(acc.0 + d.0))
    }
}

impl<'a, T: Zero + Add<Output = T> + Copy> Sum<&'a TimeDelta<T>> for TimeDelta<T> {
    fn sum<I: Iterator<Item = &'a TimeDelta<T>>>(iter: I) -> Self {
        iter.fold(TimeDelta(T::zero()), |acc, d| TimeDelta(acc.0 + d.0))
    }
}
