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

use crate::{assignment::Assignment, index::OrderIndex, model::Model};
use stevedore_core::num::LoadNumeric;

/// The frozen result of a finished solve.
///
/// Wraps the final `Assignment` together with the two summary figures the
/// reporting layer needs: the number of assigned orders and their profit
/// sum. Once constructed, a `Solution` is read-only.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution<T>
where
    T: LoadNumeric,
{
    assignment: Assignment,
    assigned_orders: usize,
    total_profit: T,
}

impl<T> Solution<T>
where
    T: LoadNumeric,
{
    /// Freezes `assignment` into a `Solution`, deriving the summary
    /// figures from `model`.
    ///
    /// # Panics
    ///
    /// Panics if `assignment` does not have one slot per model order.
    pub fn from_assignment(model: &Model<T>, assignment: Assignment) -> Self {
        assert_eq!(
            assignment.num_orders(),
            model.num_orders(),
            "called Solution::from_assignment with inconsistent sizes: assignment has {} slots, model has {} orders",
            assignment.num_orders(),
            model.num_orders()
        );

        let mut assigned_orders = 0;
        let mut total_profit = T::zero();
        for (index, slot) in assignment.slots().iter().enumerate() {
            if slot.is_some() {
                assigned_orders += 1;
                total_profit = total_profit + model.order_profit(OrderIndex::new(index));
            }
        }

        Self {
            assignment,
            assigned_orders,
            total_profit,
        }
    }

    /// Returns the frozen assignment.
    #[inline]
    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    /// Returns the number of assigned orders.
    #[inline]
    pub fn assigned_orders(&self) -> usize {
        self.assigned_orders
    }

    /// Returns the profit sum of the assigned orders.
    #[inline]
    pub fn total_profit(&self) -> T {
        self.total_profit
    }

    /// Returns the number of order slots.
    #[inline]
    pub fn num_orders(&self) -> usize {
        self.assignment.num_orders()
    }
}

impl<T> std::fmt::Display for Solution<T>
where
    T: LoadNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Solution Summary")?;
        writeln!(f, "   Assigned Orders: {}", self.assigned_orders)?;
        writeln!(f, "   Total Profit:    {}", self.total_profit)?;
        writeln!(f)?;

        if self.num_orders() == 0 {
            writeln!(f, "   (No orders)")?;
            return Ok(());
        }

        writeln!(f, "   {:<10} | {:<12}", "Order", "Container")?;
        writeln!(f, "   {:-<10}-+-{:-<12}", "", "")?;
        for (index, slot) in self.assignment.slots().iter().enumerate() {
            match slot {
                Some(container) => {
                    writeln!(f, "   {:<10} | {:<12}", index, container.get())?;
                }
                None => {
                    writeln!(f, "   {:<10} | {:<12}", index, "-")?;
                }
            }
        }

        Ok(())
    }
}
