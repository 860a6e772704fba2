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

//! # Load Numeric Trait
//!
//! Unified numeric bounds for the loading solver. `LoadNumeric` specifies
//! the capabilities required of quantities, profits, and load bounds:
//! signed arithmetic, total-order comparison where defined, and by-value
//! copying.
//!
//! ## Motivation
//!
//! A deployment may express loads as integers (units, crates) or as reals
//! (tons, cubic meters). The solver arithmetic — interval overlap, signed
//! change intervals, net transfer sums — works identically for both, so the
//! alias deliberately stops short of `PrimInt`: any `num_traits::Signed`
//! type with `PartialOrd` qualifies, which covers `i32`, `i64`, `f32`, and
//! `f64`.
//!
//! ## Notes
//!
//! Floats bring `NaN` along. The solver never produces a `NaN` from valid
//! inputs; feeding `NaN` quantities or bounds is unsupported and yields
//! unspecified (but memory-safe) assignments.

use num_traits::Signed;

/// A trait alias for numeric types usable as load quantities and bounds.
///
/// Implemented automatically for every type meeting the bounds, which in
/// practice means the signed primitive integers and the floating point
/// types.
pub trait LoadNumeric:
    Signed + PartialOrd + Copy + std::fmt::Debug + std::fmt::Display + Send + Sync
{
}

impl<T> LoadNumeric for T where
    T: Signed + PartialOrd + Copy + std::fmt::Debug + std::fmt::Display + Send + Sync
{
}

/// Returns `true` if `a` and `b` have strictly opposite signs.
///
/// This is the overflow-safe formulation of `a * b < 0`: the result is
/// `true` exactly when one operand is strictly negative and the other is
/// strictly positive. Zero on either side yields `false`.
///
/// # Examples
///
/// ```rust
/// # use stevedore_core::num::strictly_opposite;
///
/// assert!(strictly_opposite(-3, 7));
/// assert!(strictly_opposite(3, -7));
/// assert!(!strictly_opposite(0, -7));
/// assert!(!strictly_opposite(2.0, 5.0));
/// ```
#[inline]
pub fn strictly_opposite<T>(a: T, b: T) -> bool
where
    T: LoadNumeric,
{
    (a < T::zero() && b > T::zero()) || (a > T::zero() && b < T::zero())
}
