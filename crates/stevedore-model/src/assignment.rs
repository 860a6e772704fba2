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

//! The order-to-container mapping.
//!
//! `Assignment` is the central mutable state of the solve: one slot per
//! order, holding either the container the order currently occupies or
//! `None` for an unassigned order. It is populated by the greedy opening
//! and mutated exclusively through `assign` during repair; everything else
//! (load sums, violation counts, profit totals) is derived from it.

use crate::index::{ContainerIndex, OrderIndex};

/// A total or partial mapping from orders to containers.
///
/// Data is indexed directly by `OrderIndex` (i.e., slot `i` corresponds to
/// order `i`). An order occupies at most one container at any time; moving
/// an order is a single `assign` call, so the single-occupancy invariant
/// holds by construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    slots: Vec<Option<ContainerIndex>>,
}

impl Assignment {
    /// Creates an assignment with every one of the `num_orders` slots
    /// unassigned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stevedore_model::assignment::Assignment;
    ///
    /// let assignment = Assignment::new_unassigned(3);
    /// assert_eq!(assignment.num_orders(), 3);
    /// assert_eq!(assignment.assigned_count(), 0);
    /// ```
    #[inline]
    pub fn new_unassigned(num_orders: usize) -> Self {
        Self {
            slots: vec![None; num_orders],
        }
    }

    /// Returns the number of order slots.
    #[inline]
    pub fn num_orders(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if there are no order slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the container currently holding `order_index`, or `None`
    /// if the order is unassigned.
    ///
    /// # Panics
    ///
    /// Panics if `order_index` is out of bounds.
    #[inline]
    pub fn container_for_order(&self, order_index: OrderIndex) -> Option<ContainerIndex> {
        debug_assert!(
            order_index.get() < self.num_orders(),
            "called `Assignment::container_for_order` with order index out of bounds: the len is {} but the index is {}",
            self.num_orders(),
            order_index.get()
        );

        self.slots[order_index.get()]
    }

    /// Assigns `order_index` to `container` (or unassigns it with `None`).
    ///
    /// # Panics
    ///
    /// Panics if `order_index` is out of bounds.
    #[inline]
    pub fn assign(&mut self, order_index: OrderIndex, container: Option<ContainerIndex>) {
        debug_assert!(
            order_index.get() < self.num_orders(),
            "called `Assignment::assign` with order index out of bounds: the len is {} but the index is {}",
            self.num_orders(),
            order_index.get()
        );

        self.slots[order_index.get()] = container;
    }

    /// Returns the number of currently assigned orders.
    #[inline]
    pub fn assigned_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Returns a slice of all slots.
    #[inline]
    pub fn slots(&self) -> &[Option<ContainerIndex>] {
        &self.slots
    }

    /// Returns the orders currently assigned to `container`, in ascending
    /// order-index order.
    ///
    /// This enumeration order is part of the trade-search reproducibility
    /// contract: callers that probe candidates in iteration order probe
    /// them by ascending original index.
    #[inline]
    pub fn orders_in(&self, container: ContainerIndex) -> impl Iterator<Item = OrderIndex> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(move |(_, slot)| **slot == Some(container))
            .map(|(index, _)| OrderIndex::new(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ci(index: usize) -> ContainerIndex {
        ContainerIndex::new(index)
    }

    fn oi(index: usize) -> OrderIndex {
        OrderIndex::new(index)
    }

    #[test]
    fn test_new_unassigned() {
        let assignment = Assignment::new_unassigned(4);
        assert_eq!(assignment.num_orders(), 4);
        assert!(!assignment.is_empty());
        assert_eq!(assignment.assigned_count(), 0);
        for index in 0..4 {
            assert_eq!(assignment.container_for_order(oi(index)), None);
        }
    }

    #[test]
    fn test_assign_and_reassign() {
        let mut assignment = Assignment::new_unassigned(3);
        assignment.assign(oi(0), Some(ci(1)));
        assignment.assign(oi(2), Some(ci(0)));

        assert_eq!(assignment.container_for_order(oi(0)), Some(ci(1)));
        assert_eq!(assignment.container_for_order(oi(1)), None);
        assert_eq!(assignment.assigned_count(), 2);

        // Reassigning overwrites; an order never occupies two containers.
        assignment.assign(oi(0), Some(ci(0)));
        assert_eq!(assignment.container_for_order(oi(0)), Some(ci(0)));
        assert_eq!(assignment.assigned_count(), 2);

        assignment.assign(oi(0), None);
        assert_eq!(assignment.assigned_count(), 1);
    }

    #[test]
    fn test_orders_in_yields_ascending_indices() {
        let mut assignment = Assignment::new_unassigned(5);
        assignment.assign(oi(3), Some(ci(1)));
        assignment.assign(oi(0), Some(ci(1)));
        assignment.assign(oi(2), Some(ci(0)));
        assignment.assign(oi(4), Some(ci(1)));

        let members: Vec<_> = assignment.orders_in(ci(1)).collect();
        assert_eq!(members, vec![oi(0), oi(3), oi(4)]);

        let members: Vec<_> = assignment.orders_in(ci(0)).collect();
        assert_eq!(members, vec![oi(2)]);
    }

    #[test]
    fn test_empty_assignment() {
        let assignment = Assignment::new_unassigned(0);
        assert!(assignment.is_empty());
        assert_eq!(assignment.assigned_count(), 0);
        assert_eq!(assignment.orders_in(ci(0)).count(), 0);
    }
}
