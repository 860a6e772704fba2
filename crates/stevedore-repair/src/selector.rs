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

//! Eligibility filtering and randomized choice of container pairs.
//!
//! ## Motivation
//!
//! An exchange between two containers can only help when at least one of
//! them violates its load window and their required net changes point in
//! opposite directions: one container needs to shed load exactly where the
//! other needs to take some on (or vice versa). Enumerating only such pairs
//! keeps the repair loop from wasting iterations on exchanges that cannot
//! reduce the violation count.
//!
//! ## Highlights
//!
//! - `may_exchange` is the pure eligibility predicate over two change
//!   intervals.
//! - `PairSelector` owns the injected RNG, collects every eligible
//!   unordered pair, and draws one uniformly at random, reusing an
//!   internal buffer across calls to avoid per-iteration allocation.

use crate::ledger::LoadLedger;
use rand::Rng;
use stevedore_core::{
    math::interval::ClosedInterval,
    num::{strictly_opposite, LoadNumeric},
};
use stevedore_model::index::ContainerIndex;

/// Returns `true` if exchanging load between two containers with the given
/// change intervals could reduce the violation count.
///
/// A pair qualifies when the containers are not both valid and their
/// required net changes point in strictly opposite directions, judged on
/// the crossed interval endpoints.
#[inline]
pub fn may_exchange<T>(first: &ClosedInterval<T>, second: &ClosedInterval<T>) -> bool
where
    T: LoadNumeric,
{
    let both_valid = first.contains_zero() && second.contains_zero();
    if both_valid {
        return false;
    }
    strictly_opposite(first.low(), second.high()) || strictly_opposite(first.high(), second.low())
}

/// Collects eligible container pairs and draws one at random.
///
/// The selector owns the run's source of randomness but no problem data;
/// it reads change intervals from the ledger on every call, so it stays
/// valid across arbitrary assignment mutations between calls.
#[derive(Debug, Clone)]
pub struct PairSelector<R>
where
    R: Rng,
{
    rng: R,
    candidates: Vec<(ContainerIndex, ContainerIndex)>,
}

impl<R> PairSelector<R>
where
    R: Rng,
{
    /// Creates a new selector around the injected RNG.
    #[inline]
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            candidates: Vec::new(),
        }
    }

    /// Draws an eligible container pair uniformly at random.
    ///
    /// Returns `None` when no pair is eligible, which the engine treats as
    /// the search being stuck. The returned pair is unordered; callers must
    /// not rely on which container comes first.
    pub fn select_pair<T>(
        &mut self,
        ledger: &LoadLedger<T>,
    ) -> Option<(ContainerIndex, ContainerIndex)>
    where
        T: LoadNumeric,
    {
        self.candidates.clear();

        let num_containers = ledger.num_containers();
        for first in 0..num_containers {
            let first_index = ContainerIndex::new(first);
            let first_change = ledger.change_interval(first_index);
            for second in (first + 1)..num_containers {
                let second_index = ContainerIndex::new(second);
                let second_change = ledger.change_interval(second_index);
                if may_exchange(&first_change, &second_change) {
                    self.candidates.push((first_index, second_index));
                }
            }
        }

        if self.candidates.is_empty() {
            return None;
        }

        let choice = self.rng.random_range(0..self.candidates.len());
        Some(self.candidates[choice])
    }

    /// Returns the number of eligible pairs found by the last
    /// `select_pair` call.
    #[inline]
    pub fn last_candidate_count(&self) -> usize {
        self.candidates.len()
    }
}
