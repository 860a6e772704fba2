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

//! Incremental load bookkeeping for the repair loop.
//!
//! The `LoadLedger` tracks, for every container, the sum of quantities of
//! the orders currently assigned to it, together with a running count of
//! containers whose sum lies outside their load window. It is pure
//! bookkeeping with no decision logic: the full scan happens exactly once
//! at construction, and every later change flows through `apply_delta`,
//! which updates one sum and reconciles the violation count by comparing
//! validity before and after. Keeping all mutation behind a single method
//! makes the lock-step invariant between sums and the violation count
//! independently testable.

use stevedore_core::{math::interval::ClosedInterval, num::LoadNumeric};
use stevedore_model::{
    assignment::Assignment,
    index::{ContainerIndex, OrderIndex},
    model::Model,
};

/// Per-container load sums and the derived violation count.
///
/// # Invariants
///
/// - `load_sum(c)` equals the sum of quantities of orders currently
///   assigned to `c` under the assignment the ledger was built from, as
///   amended by every `apply_delta` issued since.
/// - `violation_count()` equals the number of containers whose load sum
///   lies outside their load window.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadLedger<T>
where
    T: LoadNumeric,
{
    load_windows: Vec<ClosedInterval<T>>,
    load_sums: Vec<T>,
    violations: usize,
}

impl<T> LoadLedger<T>
where
    T: LoadNumeric,
{
    /// Builds a ledger for `assignment` by a full scan of `model`.
    ///
    /// # Panics
    ///
    /// Panics if `assignment` does not have one slot per model order.
    pub fn new(model: &Model<T>, assignment: &Assignment) -> Self {
        assert_eq!(
            assignment.num_orders(),
            model.num_orders(),
            "called LoadLedger::new with inconsistent sizes: assignment has {} slots, model has {} orders",
            assignment.num_orders(),
            model.num_orders()
        );

        let mut load_sums = vec![T::zero(); model.num_containers()];
        for (index, slot) in assignment.slots().iter().enumerate() {
            if let Some(container) = slot {
                let quantity = model.order_quantity(OrderIndex::new(index));
                load_sums[container.get()] = load_sums[container.get()] + quantity;
            }
        }

        let load_windows = model.load_windows().to_vec();
        let violations = load_windows
            .iter()
            .zip(load_sums.iter())
            .filter(|(window, sum)| !window.contains(**sum))
            .count();

        Self {
            load_windows,
            load_sums,
            violations,
        }
    }

    /// Returns the number of containers tracked by the ledger.
    #[inline]
    pub fn num_containers(&self) -> usize {
        self.load_sums.len()
    }

    /// Returns the current load sum of `container`.
    ///
    /// # Panics
    ///
    /// Panics if `container` is out of bounds.
    #[inline]
    pub fn load_sum(&self, container: ContainerIndex) -> T {
        debug_assert!(
            container.get() < self.num_containers(),
            "called `LoadLedger::load_sum` with container index out of bounds: the len is {} but the index is {}",
            self.num_containers(),
            container.get()
        );

        self.load_sums[container.get()]
    }

    /// Returns the number of containers currently violating their load
    /// window.
    #[inline]
    pub fn violation_count(&self) -> usize {
        self.violations
    }

    /// Returns the signed interval of net quantity change that would bring
    /// `container` into (or keep it in) validity:
    /// `[min_load - load_sum, max_load - load_sum]`.
    ///
    /// The result is always a well-formed interval since
    /// `min_load <= max_load`.
    ///
    /// # Panics
    ///
    /// Panics if `container` is out of bounds.
    #[inline]
    pub fn change_interval(&self, container: ContainerIndex) -> ClosedInterval<T> {
        debug_assert!(
            container.get() < self.num_containers(),
            "called `LoadLedger::change_interval` with container index out of bounds: the len is {} but the index is {}",
            self.num_containers(),
            container.get()
        );

        let window = self.load_windows[container.get()];
        let sum = self.load_sums[container.get()];
        ClosedInterval::new_unchecked(window.low() - sum, window.high() - sum)
    }

    /// Returns `true` if `container` currently satisfies its load window.
    ///
    /// Equivalent to the change interval containing zero.
    #[inline]
    pub fn is_valid(&self, container: ContainerIndex) -> bool {
        self.change_interval(container).contains_zero()
    }

    /// Applies a net quantity change to `container`, reconciling the
    /// violation count.
    ///
    /// This is the only mutating operation; callers performing an exchange
    /// between two containers issue one `apply_delta` per side with equal
    /// and opposite deltas.
    ///
    /// # Panics
    ///
    /// Panics if `container` is out of bounds.
    #[inline]
    pub fn apply_delta(&mut self, container: ContainerIndex, delta: T) {
        debug_assert!(
            container.get() < self.num_containers(),
            "called `LoadLedger::apply_delta` with container index out of bounds: the len is {} but the index is {}",
            self.num_containers(),
            container.get()
        );

        let was_valid = self.is_valid(container);
        self.load_sums[container.get()] = self.load_sums[container.get()] + delta;
        let is_valid = self.is_valid(container);

        match (was_valid, is_valid) {
            (true, false) => self.violations += 1,
            (false, true) => self.violations -= 1,
            _ => {}
        }
    }

    /// Returns the total load currently assigned across all containers.
    #[inline]
    pub fn total_assigned_quantity(&self) -> T {
        self.load_sums
            .iter()
            .fold(T::zero(), |acc, &sum| acc + sum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stevedore_model::model::ModelBuilder;

    fn ci(index: usize) -> ContainerIndex {
        ContainerIndex::new(index)
    }

    fn oi(index: usize) -> OrderIndex {
        OrderIndex::new(index)
    }

    fn model() -> Model<i64> {
        ModelBuilder::new()
            .add_order(7, 1)
            .add_order(3, 1)
            .add_order(5, 1)
            .add_container(10, 10)
            .add_container(5, 5)
            .build()
            .unwrap()
    }

    #[test]
    fn test_new_scans_sums_and_violations() {
        let model = model();
        let mut assignment = Assignment::new_unassigned(3);
        assignment.assign(oi(0), Some(ci(1)));
        assignment.assign(oi(1), Some(ci(0)));
        assignment.assign(oi(2), Some(ci(0)));

        let ledger = LoadLedger::new(&model, &assignment);
        assert_eq!(ledger.num_containers(), 2);
        assert_eq!(ledger.load_sum(ci(0)), 8);
        assert_eq!(ledger.load_sum(ci(1)), 7);
        assert_eq!(ledger.violation_count(), 2);
        assert!(!ledger.is_valid(ci(0)));
        assert!(!ledger.is_valid(ci(1)));
    }

    #[test]
    fn test_change_interval_is_signed_distance_to_window() {
        let model = model();
        let mut assignment = Assignment::new_unassigned(3);
        assignment.assign(oi(1), Some(ci(0)));

        let ledger = LoadLedger::new(&model, &assignment);
        // Container 0 holds 3 against window [10, 10].
        let change = ledger.change_interval(ci(0));
        assert_eq!(change.low(), 7);
        assert_eq!(change.high(), 7);
        // Container 1 is empty against window [5, 5].
        let change = ledger.change_interval(ci(1));
        assert_eq!(change.low(), 5);
        assert_eq!(change.high(), 5);
    }

    #[test]
    fn test_apply_delta_reconciles_violations() {
        let model = model();
        let mut assignment = Assignment::new_unassigned(3);
        assignment.assign(oi(0), Some(ci(0)));
        assignment.assign(oi(1), Some(ci(0)));

        let mut ledger = LoadLedger::new(&model, &assignment);
        assert_eq!(ledger.load_sum(ci(0)), 10);
        assert_eq!(ledger.violation_count(), 1); // only container 1

        // Pushing container 0 out of its window raises the count.
        ledger.apply_delta(ci(0), -3);
        assert_eq!(ledger.load_sum(ci(0)), 7);
        assert_eq!(ledger.violation_count(), 2);

        // Restoring it lowers the count again.
        ledger.apply_delta(ci(0), 3);
        assert_eq!(ledger.violation_count(), 1);

        // Fixing container 1 reaches zero violations.
        ledger.apply_delta(ci(1), 5);
        assert_eq!(ledger.violation_count(), 0);
    }

    #[test]
    fn test_incremental_matches_full_scan_after_moves() {
        let model = model();
        let mut assignment = Assignment::new_unassigned(3);
        assignment.assign(oi(0), Some(ci(0)));
        assignment.assign(oi(1), Some(ci(1)));
        assignment.assign(oi(2), Some(ci(1)));

        let mut ledger = LoadLedger::new(&model, &assignment);

        // Move order 2 (quantity 5) from container 1 to container 0.
        assignment.assign(oi(2), Some(ci(0)));
        ledger.apply_delta(ci(0), 5);
        ledger.apply_delta(ci(1), -5);

        assert_eq!(ledger, LoadLedger::new(&model, &assignment));
    }

    #[test]
    fn test_empty_model() {
        let model = ModelBuilder::<i64>::new().build().unwrap();
        let ledger = LoadLedger::new(&model, &Assignment::new_unassigned(0));
        assert_eq!(ledger.num_containers(), 0);
        assert_eq!(ledger.violation_count(), 0);
        assert_eq!(ledger.total_assigned_quantity(), 0);
    }

    #[test]
    fn test_float_ledger() {
        let model = ModelBuilder::<f64>::new()
            .add_order(1.5, 0.0)
            .add_container(1.0, 2.0)
            .build()
            .unwrap();
        let mut assignment = Assignment::new_unassigned(1);
        assignment.assign(oi(0), Some(ci(0)));

        let ledger = LoadLedger::new(&model, &assignment);
        assert_eq!(ledger.load_sum(ci(0)), 1.5);
        assert!(ledger.is_valid(ci(0)));
        assert_eq!(ledger.violation_count(), 0);
    }
}
