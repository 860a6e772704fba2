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

//! Greedy first-fit opening pass.
//!
//! The opening builds a starting assignment quickly and cares about upper
//! bounds only: orders are taken in descending quantity order and placed
//! into the first container, visited in descending `min_load` order, whose
//! `max_load` still has room. Lower bounds are left for the repair phase;
//! containers may end below `min_load` or entirely empty, and an order
//! fitting nowhere stays unassigned. Both sorts are stable, so equal keys
//! keep their ascending input order and the pass is fully deterministic.

use std::cmp::Ordering;
use stevedore_core::num::LoadNumeric;
use stevedore_model::{
    assignment::Assignment,
    index::{ContainerIndex, OrderIndex},
    model::Model,
};

/// Builds a starting assignment for `model` by greedy first-fit.
pub fn greedy_opening<T>(model: &Model<T>) -> Assignment
where
    T: LoadNumeric,
{
    let mut order_indices: Vec<usize> = (0..model.num_orders()).collect();
    order_indices.sort_by(|&a, &b| {
        let qa = model.order_quantity(OrderIndex::new(a));
        let qb = model.order_quantity(OrderIndex::new(b));
        qb.partial_cmp(&qa).unwrap_or(Ordering::Equal)
    });

    let mut container_indices: Vec<usize> = (0..model.num_containers()).collect();
    container_indices.sort_by(|&a, &b| {
        let ma = model.load_window(ContainerIndex::new(a)).low();
        let mb = model.load_window(ContainerIndex::new(b)).low();
        mb.partial_cmp(&ma).unwrap_or(Ordering::Equal)
    });

    let mut load_sums = vec![T::zero(); model.num_containers()];
    let mut assignment = Assignment::new_unassigned(model.num_orders());
    for &order in &order_indices {
        let order_index = OrderIndex::new(order);
        let quantity = model.order_quantity(order_index);
        for &container in &container_indices {
            let max_load = model.load_window(ContainerIndex::new(container)).high();
            if load_sums[container] + quantity <= max_load {
                load_sums[container] = load_sums[container] + quantity;
                assignment.assign(order_index, Some(ContainerIndex::new(container)));
                break;
            }
        }
    }

    assignment
}
