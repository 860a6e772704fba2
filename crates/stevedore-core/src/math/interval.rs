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

use crate::num::LoadNumeric;

/// A closed interval `[low, high]` with both endpoints inclusive.
///
/// This struct represents a contiguous range of load values. Load windows of
/// containers and the signed change intervals derived from them are closed
/// on both ends, so unlike a half-open integer range this type is meaningful
/// for real-valued loads and for degenerate single-point windows such as
/// `[10, 10]`.
///
/// # Invariants
///
/// `low` must always be less than or equal to `high`.
#[derive(Clone, Copy, PartialEq, PartialOrd)]
pub struct ClosedInterval<T>
where
    T: LoadNumeric,
{
    low: T,
    high: T,
}

impl<T> ClosedInterval<T>
where
    T: LoadNumeric,
{
    /// Creates a new `ClosedInterval`.
    ///
    /// # Panics
    ///
    /// Panics if `low > high`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stevedore_core::math::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new(0, 10);
    /// assert_eq!(iv.low(), 0);
    /// assert_eq!(iv.high(), 10);
    /// ```
    #[inline]
    pub fn new(low: T, high: T) -> Self {
        assert!(
            low <= high,
            "Invalid interval: low must be less than or equal to high"
        );
        Self { low, high }
    }

    /// Creates a new `ClosedInterval` if the inputs are valid.
    ///
    /// Returns `None` if `low > high`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stevedore_core::math::interval::ClosedInterval;
    ///
    /// assert!(ClosedInterval::try_new(0, 10).is_some());
    /// assert!(ClosedInterval::try_new(10, 0).is_none());
    /// ```
    #[inline]
    pub fn try_new(low: T, high: T) -> Option<Self> {
        if low <= high {
            Some(Self { low, high })
        } else {
            None
        }
    }

    /// Creates a new `ClosedInterval` without checking invariants in release builds.
    ///
    /// # Safety
    ///
    /// The caller must ensure `low <= high`. This function contains a
    /// `debug_assert!` to catch errors during development.
    #[inline]
    pub fn new_unchecked(low: T, high: T) -> Self {
        debug_assert!(
            low <= high,
            "Invalid interval: low must be less than or equal to high"
        );
        Self { low, high }
    }

    /// Returns the inclusive lower bound of the interval.
    #[inline]
    pub fn low(&self) -> T {
        self.low
    }

    /// Returns the inclusive upper bound of the interval.
    #[inline]
    pub fn high(&self) -> T {
        self.high
    }

    /// Returns `true` if `value` lies within the interval, bounds included.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stevedore_core::math::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new(5, 10);
    /// assert!(iv.contains(5));
    /// assert!(iv.contains(10));
    /// assert!(!iv.contains(11));
    /// ```
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.low <= value && value <= self.high
    }

    /// Returns `true` if zero lies within the interval.
    ///
    /// For a signed change interval this is the validity test: a container
    /// whose required change interval contains zero already satisfies its
    /// load window.
    #[inline]
    pub fn contains_zero(&self) -> bool {
        self.contains(T::zero())
    }

    /// Returns the interval mirrored around zero: `[low, high]` becomes
    /// `[-high, -low]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stevedore_core::math::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new(-2, 5).mirror();
    /// assert_eq!(iv.low(), -5);
    /// assert_eq!(iv.high(), 2);
    /// ```
    #[inline]
    pub fn mirror(&self) -> Self {
        Self {
            low: -self.high,
            high: -self.low,
        }
    }

    /// Returns the intersection of this interval with `other`, or `None`
    /// if the two intervals do not overlap.
    ///
    /// Touching endpoints count as an overlap: the intersection of
    /// `[0, 5]` and `[5, 9]` is the single point `[5, 5]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stevedore_core::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(0, 6);
    /// let b = ClosedInterval::new(4, 9);
    /// let c = a.intersect(b).unwrap();
    /// assert_eq!(c.low(), 4);
    /// assert_eq!(c.high(), 6);
    ///
    /// let d = ClosedInterval::new(7, 9);
    /// assert!(a.intersect(d).is_none());
    /// ```
    #[inline]
    pub fn intersect(&self, other: Self) -> Option<Self> {
        let low = if self.low >= other.low {
            self.low
        } else {
            other.low
        };
        let high = if self.high <= other.high {
            self.high
        } else {
            other.high
        };
        Self::try_new(low, high)
    }
}

impl<T> std::fmt::Debug for ClosedInterval<T>
where
    T: LoadNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ClosedInterval({:?}, {:?})", self.low, self.high)
    }
}

impl<T> std::fmt::Display for ClosedInterval<T>
where
    T: LoadNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}
