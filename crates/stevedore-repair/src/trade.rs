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

//! Trade derivation and application between two containers.
//!
//! ## Motivation
//!
//! Once a container pair is selected, the engine needs a concrete exchange
//! that moves both containers toward (or keeps them inside) their load
//! windows. A trade sends at most one order each way; either side may also
//! send nothing, which degenerates the exchange into a one-way transfer.
//! The net quantity change of the first container must fall into the
//! acceptable interval: the set of net changes that keep the first
//! container's window reachable while the second container absorbs the
//! exactly opposite change.
//!
//! ## Highlights
//!
//! - `acceptable_interval` intersects the first container's change
//!   interval with the mirrored change interval of the second.
//! - `find_trade` enumerates candidate exchanges deterministically (the
//!   empty hand first, then orders in ascending index order) and returns
//!   the first admissible one.
//! - `apply_trade` commits a trade to the assignment and ledger as one
//!   atomic step, keeping both views consistent.

use crate::ledger::LoadLedger;
use stevedore_core::{math::interval::ClosedInterval, num::LoadNumeric};
use stevedore_model::{
    assignment::Assignment,
    index::{ContainerIndex, OrderIndex},
    model::Model,
};

/// A pairwise exchange between two containers.
///
/// `outgoing` leaves the first container for the second, `incoming` moves
/// the other way. `None` on either side means that side contributes
/// nothing, turning the trade into a one-way transfer. `net_change` is the
/// resulting quantity delta of the first container; the second container
/// receives the exact opposite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trade<T>
where
    T: LoadNumeric,
{
    outgoing: Option<OrderIndex>,
    incoming: Option<OrderIndex>,
    net_change: T,
}

impl<T> Trade<T>
where
    T: LoadNumeric,
{
    /// Returns the order leaving the first container, if any.
    #[inline]
    pub fn outgoing(&self) -> Option<OrderIndex> {
        self.outgoing
    }

    /// Returns the order entering the first container, if any.
    #[inline]
    pub fn incoming(&self) -> Option<OrderIndex> {
        self.incoming
    }

    /// Returns the net quantity change of the first container.
    #[inline]
    pub fn net_change(&self) -> T {
        self.net_change
    }
}

/// Computes the interval of admissible net changes for the first container
/// of a pair.
///
/// A net change `d` is admissible when it lies in the first container's
/// change interval and `-d` lies in the second's. Mirroring the second
/// interval turns the latter condition into a plain intersection. Returns
/// `None` when no net change can serve both containers at once.
#[inline]
pub fn acceptable_interval<T>(
    ledger: &LoadLedger<T>,
    first: ContainerIndex,
    second: ContainerIndex,
) -> Option<ClosedInterval<T>>
where
    T: LoadNumeric,
{
    ledger
        .change_interval(first)
        .intersect(ledger.change_interval(second).mirror())
}

/// Searches for the first admissible trade between two containers.
///
/// Candidates are enumerated deterministically: for each side, the empty
/// hand comes first, followed by the orders currently assigned to that
/// container in ascending index order. The all-empty candidate is skipped
/// since it would be a no-op. The first candidate whose net change falls
/// into `acceptable` wins.
pub fn find_trade<T>(
    model: &Model<T>,
    assignment: &Assignment,
    first: ContainerIndex,
    second: ContainerIndex,
    acceptable: &ClosedInterval<T>,
) -> Option<Trade<T>>
where
    T: LoadNumeric,
{
    let outgoing_candidates: Vec<Option<OrderIndex>> = std::iter::once(None)
        .chain(assignment.orders_in(first).map(Some))
        .collect();
    let incoming_candidates: Vec<Option<OrderIndex>> = std::iter::once(None)
        .chain(assignment.orders_in(second).map(Some))
        .collect();

    for &outgoing in &outgoing_candidates {
        for &incoming in &incoming_candidates {
            if outgoing.is_none() && incoming.is_none() {
                continue;
            }

            let outgoing_quantity = outgoing.map_or(T::zero(), |o| model.order_quantity(o));
            let incoming_quantity = incoming.map_or(T::zero(), |o| model.order_quantity(o));
            let net_change = incoming_quantity - outgoing_quantity;

            if acceptable.contains(net_change) {
                return Some(Trade {
                    outgoing,
                    incoming,
                    net_change,
                });
            }
        }
    }

    None
}

/// Commits `trade` between `first` and `second`, updating the assignment
/// and the ledger together.
///
/// # Panics
///
/// In debug builds, panics if a traded order is not currently assigned to
/// the container it is supposed to leave.
pub fn apply_trade<T>(
    assignment: &mut Assignment,
    ledger: &mut LoadLedger<T>,
    first: ContainerIndex,
    second: ContainerIndex,
    trade: &Trade<T>,
) where
    T: LoadNumeric,
{
    if let Some(order) = trade.outgoing() {
        debug_assert!(
            assignment.container_for_order(order) == Some(first),
            "called `apply_trade` with an outgoing order not assigned to the first container"
        );
        assignment.assign(order, Some(second));
    }
    if let Some(order) = trade.incoming() {
        debug_assert!(
            assignment.container_for_order(order) == Some(second),
            "called `apply_trade` with an incoming order not assigned to the second container"
        );
        assignment.assign(order, Some(first));
    }

    let net_change = trade.net_change();
    ledger.apply_delta(first, net_change);
    ledger.apply_delta(second, -net_change);
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

    /// Crafted violating start: sums 8 and 7 against [10, 10] and [5, 5].
    fn violating_assignment() -> Assignment {
        let mut assignment = Assignment::new_unassigned(3);
        assignment.assign(oi(0), Some(ci(1)));
        assignment.assign(oi(1), Some(ci(0)));
        assignment.assign(oi(2), Some(ci(0)));
        assignment
    }

    #[test]
    fn test_acceptable_interval_intersects_mirrored_needs() {
        let model = model();
        let assignment = violating_assignment();
        let ledger = LoadLedger::new(&model, &assignment);

        // Container 0 needs +2, container 1 needs -2; mirrored that is +2.
        let acceptable = acceptable_interval(&ledger, ci(0), ci(1)).unwrap();
        assert_eq!(acceptable.low(), 2);
        assert_eq!(acceptable.high(), 2);
    }

    #[test]
    fn test_acceptable_interval_none_when_needs_disjoint() {
        let model = ModelBuilder::<i64>::new()
            .add_order(1, 0)
            .add_container(10, 12)
            .add_container(10, 12)
            .build()
            .unwrap();
        let mut assignment = Assignment::new_unassigned(1);
        assignment.assign(oi(0), Some(ci(0)));
        let ledger = LoadLedger::new(&model, &assignment);

        // Both containers need to gain load; no net change serves both.
        assert_eq!(acceptable_interval(&ledger, ci(0), ci(1)), None);
    }

    #[test]
    fn test_find_trade_returns_first_admissible_candidate() {
        let model = model();
        let assignment = violating_assignment();
        let ledger = LoadLedger::new(&model, &assignment);
        let acceptable = acceptable_interval(&ledger, ci(0), ci(1)).unwrap();

        // Enumeration reaches (order 2 out, order 0 in) with net 7 - 5 = 2,
        // the only candidate hitting the point interval [2, 2].
        let trade = find_trade(&model, &assignment, ci(0), ci(1), &acceptable).unwrap();
        assert_eq!(trade.outgoing(), Some(oi(2)));
        assert_eq!(trade.incoming(), Some(oi(0)));
        assert_eq!(trade.net_change(), 2);
    }

    #[test]
    fn test_find_trade_prefers_one_way_transfer() {
        let model = ModelBuilder::<i64>::new()
            .add_order(4, 0)
            .add_order(4, 0)
            .add_container(4, 4)
            .add_container(4, 4)
            .build()
            .unwrap();
        let mut assignment = Assignment::new_unassigned(2);
        assignment.assign(oi(0), Some(ci(0)));
        assignment.assign(oi(1), Some(ci(0)));
        let ledger = LoadLedger::new(&model, &assignment);

        // Acceptable is [-4, -4]; giving away one order with nothing back
        // is admissible and comes before any two-sided candidate.
        let acceptable = acceptable_interval(&ledger, ci(0), ci(1)).unwrap();
        let trade = find_trade(&model, &assignment, ci(0), ci(1), &acceptable).unwrap();
        assert_eq!(trade.outgoing(), Some(oi(0)));
        assert_eq!(trade.incoming(), None);
        assert_eq!(trade.net_change(), -4);
    }

    #[test]
    fn test_find_trade_none_when_no_candidate_fits() {
        let model = model();
        let assignment = violating_assignment();

        // No order combination nets exactly 1.
        let narrow = ClosedInterval::new(1, 1);
        assert_eq!(find_trade(&model, &assignment, ci(0), ci(1), &narrow), None);
    }

    #[test]
    fn test_apply_trade_moves_orders_and_updates_ledger() {
        let model = model();
        let mut assignment = violating_assignment();
        let mut ledger = LoadLedger::new(&model, &assignment);
        assert_eq!(ledger.violation_count(), 2);

        let acceptable = acceptable_interval(&ledger, ci(0), ci(1)).unwrap();
        let trade = find_trade(&model, &assignment, ci(0), ci(1), &acceptable).unwrap();
        apply_trade(&mut assignment, &mut ledger, ci(0), ci(1), &trade);

        assert_eq!(assignment.container_for_order(oi(0)), Some(ci(0)));
        assert_eq!(assignment.container_for_order(oi(2)), Some(ci(1)));
        assert_eq!(ledger.load_sum(ci(0)), 10);
        assert_eq!(ledger.load_sum(ci(1)), 5);
        assert_eq!(ledger.violation_count(), 0);

        // The incremental ledger agrees with a fresh full scan.
        assert_eq!(ledger, LoadLedger::new(&model, &assignment));
    }

    #[test]
    fn test_apply_trade_conserves_total_quantity() {
        let model = model();
        let mut assignment = violating_assignment();
        let mut ledger = LoadLedger::new(&model, &assignment);
        let total_before = ledger.total_assigned_quantity();

        let acceptable = acceptable_interval(&ledger, ci(0), ci(1)).unwrap();
        let trade = find_trade(&model, &assignment, ci(0), ci(1), &acceptable).unwrap();
        apply_trade(&mut assignment, &mut ledger, ci(0), ci(1), &trade);

        assert_eq!(ledger.total_assigned_quantity(), total_before);
    }
}
