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

use crate::index::{ContainerIndex, OrderIndex};
use stevedore_core::{math::interval::ClosedInterval, num::LoadNumeric};

/// The error type for model construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A container was declared with `min_load > max_load`.
    InvalidLoadWindow {
        /// The position of the offending container in declaration order.
        container_index: usize,
    },
    /// An order was declared with a negative quantity.
    NegativeQuantity {
        /// The position of the offending order in declaration order.
        order_index: usize,
    },
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLoadWindow { container_index } => write!(
                f,
                "Container {} has an invalid load window: min_load exceeds max_load",
                container_index
            ),
            Self::NegativeQuantity { order_index } => {
                write!(f, "Order {} has a negative quantity", order_index)
            }
        }
    }
}

impl std::error::Error for ModelError {}

/// The immutable data model describing orders and containers.
///
/// This struct holds all pre-validated, queryable data in a Structure of
/// Arrays (SoA) layout:
/// - `quantities[o]`: the load contribution of order `o`.
/// - `profits[o]`: the profit earned if order `o` is assigned.
/// - `load_windows[c]`: the required load interval `[min_load, max_load]`
///   of container `c`.
///
/// Construction:
/// - Use `ModelBuilder` and call `ModelBuilder::build` to obtain a
///   validated `Model`. Validation rejects inverted load windows and
///   negative quantities; it never rejects windows that no subset of
///   orders can satisfy — such containers surface later as residual
///   violations of the repair phase.
#[derive(Clone, Debug, PartialEq)]
pub struct Model<T>
where
    T: LoadNumeric,
{
    quantities: Vec<T>,
    profits: Vec<T>,
    load_windows: Vec<ClosedInterval<T>>,
}

impl<T> Model<T>
where
    T: LoadNumeric,
{
    /// Returns the number of orders in the model.
    #[inline]
    pub fn num_orders(&self) -> usize {
        self.quantities.len()
    }

    /// Returns the number of containers in the model.
    #[inline]
    pub fn num_containers(&self) -> usize {
        self.load_windows.len()
    }

    /// Returns the quantity of a specific order.
    ///
    /// # Panics
    ///
    /// Panics if `order_index` is out of bounds.
    #[inline]
    pub fn order_quantity(&self, order_index: OrderIndex) -> T {
        debug_assert!(
            order_index.get() < self.num_orders(),
            "called `Model::order_quantity` with order index out of bounds: the len is {} but the index is {}",
            self.num_orders(),
            order_index.get()
        );

        self.quantities[order_index.get()]
    }

    /// Returns the profit of a specific order.
    ///
    /// # Panics
    ///
    /// Panics if `order_index` is out of bounds.
    #[inline]
    pub fn order_profit(&self, order_index: OrderIndex) -> T {
        debug_assert!(
            order_index.get() < self.num_orders(),
            "called `Model::order_profit` with order index out of bounds: the len is {} but the index is {}",
            self.num_orders(),
            order_index.get()
        );

        self.profits[order_index.get()]
    }

    /// Returns the load window of a specific container.
    ///
    /// # Panics
    ///
    /// Panics if `container_index` is out of bounds.
    #[inline]
    pub fn load_window(&self, container_index: ContainerIndex) -> ClosedInterval<T> {
        debug_assert!(
            container_index.get() < self.num_containers(),
            "called `Model::load_window` with container index out of bounds: the len is {} but the index is {}",
            self.num_containers(),
            container_index.get()
        );

        self.load_windows[container_index.get()]
    }

    /// Returns a slice of all order quantities.
    #[inline]
    pub fn order_quantities(&self) -> &[T] {
        &self.quantities
    }

    /// Returns a slice of all order profits.
    #[inline]
    pub fn order_profits(&self) -> &[T] {
        &self.profits
    }

    /// Returns a slice of all container load windows.
    #[inline]
    pub fn load_windows(&self) -> &[ClosedInterval<T>] {
        &self.load_windows
    }
}

/// An incremental builder for `Model`.
///
/// Orders and containers are declared in input order; `build` validates
/// them and produces the immutable `Model`.
///
/// # Examples
///
/// ```rust
/// # use stevedore_model::model::ModelBuilder;
///
/// let model = ModelBuilder::<i64>::new()
///     .add_order(7, 3)
///     .add_order(5, 2)
///     .add_container(5, 10)
///     .build()
///     .unwrap();
/// assert_eq!(model.num_orders(), 2);
/// assert_eq!(model.num_containers(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModelBuilder<T>
where
    T: LoadNumeric,
{
    quantities: Vec<T>,
    profits: Vec<T>,
    window_bounds: Vec<(T, T)>,
}

impl<T> ModelBuilder<T>
where
    T: LoadNumeric,
{
    /// Creates a new, empty builder.
    #[inline]
    pub fn new() -> Self {
        Self {
            quantities: Vec::new(),
            profits: Vec::new(),
            window_bounds: Vec::new(),
        }
    }

    /// Creates a builder with pre-allocated capacity for `num_orders`
    /// orders and `num_containers` containers.
    #[inline]
    pub fn with_capacity(num_orders: usize, num_containers: usize) -> Self {
        Self {
            quantities: Vec::with_capacity(num_orders),
            profits: Vec::with_capacity(num_orders),
            window_bounds: Vec::with_capacity(num_containers),
        }
    }

    /// Declares an order with the given quantity and profit.
    #[inline]
    pub fn add_order(mut self, quantity: T, profit: T) -> Self {
        self.quantities.push(quantity);
        self.profits.push(profit);
        self
    }

    /// Declares a container with the given required load interval.
    #[inline]
    pub fn add_container(mut self, min_load: T, max_load: T) -> Self {
        self.window_bounds.push((min_load, max_load));
        self
    }

    /// Validates the declared data and builds the `Model`.
    ///
    /// # Errors
    ///
    /// - `ModelError::NegativeQuantity` if any order quantity is negative.
    /// - `ModelError::InvalidLoadWindow` if any container has
    ///   `min_load > max_load`.
    pub fn build(self) -> Result<Model<T>, ModelError> {
        for (order_index, quantity) in self.quantities.iter().enumerate() {
            if *quantity < T::zero() {
                return Err(ModelError::NegativeQuantity { order_index });
            }
        }

        let mut load_windows = Vec::with_capacity(self.window_bounds.len());
        for (container_index, (min_load, max_load)) in self.window_bounds.into_iter().enumerate() {
            match ClosedInterval::try_new(min_load, max_load) {
                Some(window) => load_windows.push(window),
                None => return Err(ModelError::InvalidLoadWindow { container_index }),
            }
        }

        Ok(Model {
            quantities: self.quantities,
            profits: self.profits,
            load_windows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{ContainerIndex, OrderIndex};

    #[test]
    fn test_build_valid_model() {
        let model = ModelBuilder::<i64>::new()
            .add_order(7, 10)
            .add_order(3, 4)
            .add_order(5, 6)
            .add_container(10, 10)
            .add_container(5, 5)
            .build()
            .unwrap();

        assert_eq!(model.num_orders(), 3);
        assert_eq!(model.num_containers(), 2);
        assert_eq!(model.order_quantity(OrderIndex::new(0)), 7);
        assert_eq!(model.order_profit(OrderIndex::new(2)), 6);
        assert_eq!(model.load_window(ContainerIndex::new(1)).low(), 5);
        assert_eq!(model.load_window(ContainerIndex::new(1)).high(), 5);
    }

    #[test]
    fn test_build_empty_model_is_valid() {
        let model = ModelBuilder::<i64>::new().build().unwrap();
        assert_eq!(model.num_orders(), 0);
        assert_eq!(model.num_containers(), 0);
    }

    #[test]
    fn test_build_rejects_inverted_load_window() {
        let err = ModelBuilder::<i64>::new()
            .add_container(0, 10)
            .add_container(9, 3)
            .build()
            .unwrap_err();

        assert_eq!(err, ModelError::InvalidLoadWindow { container_index: 1 });
        assert!(format!("{}", err).contains("Container 1"));
    }

    #[test]
    fn test_build_rejects_negative_quantity() {
        let err = ModelBuilder::<i64>::new()
            .add_order(4, 1)
            .add_order(-2, 1)
            .build()
            .unwrap_err();

        assert_eq!(err, ModelError::NegativeQuantity { order_index: 1 });
    }

    #[test]
    fn test_build_float_model() {
        let model = ModelBuilder::<f64>::new()
            .add_order(1.5, 0.25)
            .add_container(0.0, 2.75)
            .build()
            .unwrap();

        assert_eq!(model.order_quantity(OrderIndex::new(0)), 1.5);
        assert_eq!(model.load_window(ContainerIndex::new(0)).high(), 2.75);
    }

    #[test]
    fn test_zero_quantity_is_allowed() {
        // Zero-quantity orders are harmless; they never change a load sum.
        assert!(ModelBuilder::<i64>::new()
            .add_order(0, 5)
            .add_container(0, 0)
            .build()
            .is_ok());
    }
}
