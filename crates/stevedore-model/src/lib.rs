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

//! # Stevedore Model
//!
//! Problem data for the capacitated multi-container assignment problem.
//! This crate defines the immutable `Model` (order quantities and profits,
//! container load windows), the typed index spaces, the mutable
//! `Assignment` that the construction and repair phases operate on, the
//! frozen `Solution` summary, and a text-format `ProblemLoader`.
//!
//! ## Modules
//!
//! - `index`: `OrderIndex` and `ContainerIndex`, phantom-tagged indices.
//! - `model`: `Model` / `ModelBuilder` with build-time validation.
//! - `assignment`: the order-to-container mapping, the central mutable state.
//! - `solution`: read-only reporting of a finished assignment.
//! - `loading`: whitespace-token instance parser.

pub mod assignment;
pub mod index;
pub mod loading;
pub mod model;
pub mod solution;
