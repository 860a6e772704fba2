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

//! # Stevedore Core
//!
//! Foundational primitives for the Stevedore loading ecosystem. This crate
//! consolidates the reusable building blocks that underpin the model and
//! solver crates: numeric bounds, interval math, and typed indices.
//!
//! ## Modules
//!
//! - `math`: Closed interval `[low, high]` primitives with validation,
//!   membership queries, intersection, and mirroring around zero.
//! - `num`: The `LoadNumeric` trait alias collecting the numeric bounds the
//!   solver requires, satisfied by signed integers and floats alike.
//! - `utils`: Phantom-tagged, strongly typed indices (`TypedIndex<T>`).
//!
//! ## Purpose
//!
//! These primitives enable robust, generic code in the loading pipeline,
//! reducing accidental bugs (index mixing, inverted bounds) while keeping
//! runtime overhead at zero.

pub mod math;
pub mod num;
pub mod utils;
