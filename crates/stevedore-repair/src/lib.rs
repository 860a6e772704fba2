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

//! # Stevedore Repair
//!
//! Randomized local-search repair for interval-constrained container
//! loading. Starting from an assignment that may leave containers outside
//! their required load windows, the engine exchanges orders pairwise
//! between containers until every window is satisfied, a budget monitor
//! calls a halt, or no container pair can plausibly improve.
//!
//! ## Modules
//!
//! - `ledger`: incremental load-sum and violation bookkeeping.
//! - `selector`: eligibility predicate and randomized pair choice.
//! - `trade`: acceptable-interval derivation and trade enumeration.
//! - `engine`: the driving loop tying the above together.
//! - `monitor`: pluggable termination and observation hooks.
//! - `stats` / `result`: run accounting and the reportable outcome.

pub mod engine;
pub mod ledger;
pub mod monitor;
pub mod result;
pub mod selector;
pub mod stats;
pub mod trade;
