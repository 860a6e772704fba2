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

//! # Two-Phase Orchestrated Solver
//!
//! A high-level facade that runs the greedy opening pass, hands the result
//! to the repair engine with a configured monitor stack, and freezes the
//! final assignment into a reportable outcome.
//!
//! ## Highlights
//!
//! - Builder pattern: `SolverBuilder` configures the seed, the iteration
//!   budget, and an optional wall-clock limit.
//! - Reproducibility: a fixed seed yields a bit-identical run; without a
//!   seed the RNG is drawn from the operating system.
//! - Robust termination: the iteration budget defaults to a finite value,
//!   so a solve finishes even on instances where no trade ever fits.
//!
//! ## Usage
//!
//! ```rust
//! use stevedore_model::model::ModelBuilder;
//! use stevedore_solver::solver::SolverBuilder;
//!
//! let model = ModelBuilder::<i64>::new()
//!     .add_order(7, 10)
//!     .add_order(3, 4)
//!     .add_order(5, 6)
//!     .add_container(10, 10)
//!     .add_container(5, 5)
//!     .build()
//!     .unwrap();
//!
//! let solver = SolverBuilder::new().with_seed(42).build();
//! let outcome = solver.solve(&model);
//! assert!(outcome.is_feasible());
//! assert_eq!(outcome.solution().assigned_orders(), 3);
//! ```

use crate::construction::greedy_opening;
use rand::{rngs::StdRng, SeedableRng};
use std::time::{Duration, Instant};
use stevedore_core::num::LoadNumeric;
use stevedore_model::{model::Model, solution::Solution};
use stevedore_repair::{
    engine::RepairEngine,
    monitor::{
        composite::CompositeRepairMonitor, iteration::IterationLimitMonitor, log::LogMonitor,
        time::TimeLimitMonitor,
    },
    result::RepairTerminationReason,
    selector::PairSelector,
    stats::RepairStatistics,
};

/// The reportable result of a full solve.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverOutcome<T>
where
    T: LoadNumeric,
{
    solution: Solution<T>,
    termination_reason: RepairTerminationReason,
    remaining_violations: usize,
    statistics: RepairStatistics,
    time_total: Duration,
}

impl<T> SolverOutcome<T>
where
    T: LoadNumeric,
{
    /// Returns the frozen solution.
    #[inline]
    pub fn solution(&self) -> &Solution<T> {
        &self.solution
    }

    /// Returns the repair phase's termination reason.
    #[inline]
    pub fn termination_reason(&self) -> &RepairTerminationReason {
        &self.termination_reason
    }

    /// Returns the number of load-window violations left after the solve.
    #[inline]
    pub fn remaining_violations(&self) -> usize {
        self.remaining_violations
    }

    /// Returns `true` if every container satisfies its load window.
    #[inline]
    pub fn is_feasible(&self) -> bool {
        self.remaining_violations == 0
    }

    /// Returns the repair phase statistics.
    #[inline]
    pub fn statistics(&self) -> &RepairStatistics {
        &self.statistics
    }

    /// Returns the elapsed wall-clock time of construction plus repair.
    #[inline]
    pub fn time_total(&self) -> Duration {
        self.time_total
    }
}

impl<T> std::fmt::Display for SolverOutcome<T>
where
    T: LoadNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Solver Outcome")?;
        writeln!(f, "   Termination:          {}", self.termination_reason)?;
        writeln!(f, "   Remaining Violations: {}", self.remaining_violations)?;
        writeln!(f, "   Total Time:           {:?}", self.time_total)?;
        writeln!(f)?;
        write!(f, "{}", self.solution)
    }
}

/// A builder for [`Solver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverBuilder {
    seed: Option<u64>,
    iteration_limit: u64,
    time_limit: Option<Duration>,
    progress_log: bool,
}

impl SolverBuilder {
    /// Default iteration budget of the repair phase.
    pub const DEFAULT_ITERATION_LIMIT: u64 = 20_000;

    /// Creates a builder with the default iteration budget, no time limit,
    /// and operating-system randomness.
    #[inline]
    pub fn new() -> Self {
        Self {
            seed: None,
            iteration_limit: Self::DEFAULT_ITERATION_LIMIT,
            time_limit: None,
            progress_log: false,
        }
    }

    /// Seeds the RNG for a reproducible run.
    #[inline]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Overrides the repair iteration budget.
    #[inline]
    pub fn with_iteration_limit(mut self, iteration_limit: u64) -> Self {
        self.iteration_limit = iteration_limit;
        self
    }

    /// Adds a wall-clock limit for the repair phase.
    #[inline]
    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = Some(time_limit);
        self
    }

    /// Prints a progress table to stdout while the repair phase runs.
    #[inline]
    pub fn with_progress_log(mut self) -> Self {
        self.progress_log = true;
        self
    }

    /// Builds the configured solver.
    #[inline]
    pub fn build(self) -> Solver {
        Solver {
            seed: self.seed,
            iteration_limit: self.iteration_limit,
            time_limit: self.time_limit,
            progress_log: self.progress_log,
        }
    }
}

impl Default for SolverBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The two-phase solver: greedy opening followed by randomized repair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solver {
    seed: Option<u64>,
    iteration_limit: u64,
    time_limit: Option<Duration>,
    progress_log: bool,
}

impl Solver {
    /// Solves `model`: builds a greedy starting assignment, repairs it, and
    /// freezes the result.
    ///
    /// Residual violations are reported through the outcome, never as an
    /// error.
    pub fn solve<T>(&self, model: &Model<T>) -> SolverOutcome<T>
    where
        T: LoadNumeric,
    {
        let start_time = Instant::now();

        let mut assignment = greedy_opening(model);

        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut selector = PairSelector::new(rng);

        let mut monitor = CompositeRepairMonitor::with_capacity(3);
        monitor.add_monitor(IterationLimitMonitor::new(self.iteration_limit));
        if let Some(time_limit) = self.time_limit {
            monitor.add_monitor(TimeLimitMonitor::new(time_limit));
        }
        if self.progress_log {
            monitor.add_monitor(LogMonitor::default());
        }

        let outcome = RepairEngine::new().run(model, &mut assignment, &mut selector, &mut monitor);

        SolverOutcome {
            solution: Solution::from_assignment(model, assignment),
            termination_reason: outcome.termination_reason().clone(),
            remaining_violations: outcome.remaining_violations(),
            statistics: outcome.statistics().clone(),
            time_total: start_time.elapsed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stevedore_model::{
        index::{ContainerIndex, OrderIndex},
        model::ModelBuilder,
    };

    fn ci(index: usize) -> ContainerIndex {
        ContainerIndex::new(index)
    }

    fn oi(index: usize) -> OrderIndex {
        OrderIndex::new(index)
    }

    #[test]
    fn test_solve_instance_needing_repair() {
        // The opening dumps 6 and 4 into the high-min container and leaves
        // the other at 4 against [6, 10]; one trade (4 out, 6 in) fixes it.
        let model = ModelBuilder::<i64>::new()
            .add_order(6, 10)
            .add_order(4, 5)
            .add_order(4, 5)
            .add_container(6, 10)
            .add_container(8, 10)
            .build()
            .unwrap();

        let solver = SolverBuilder::new().with_seed(7).build();
        let outcome = solver.solve(&model);

        assert!(outcome.is_feasible());
        assert_eq!(
            *outcome.termination_reason(),
            RepairTerminationReason::Repaired
        );
        assert_eq!(outcome.solution().assigned_orders(), 3);
        assert_eq!(outcome.solution().total_profit(), 20);
        assert_eq!(
            outcome.solution().assignment().container_for_order(oi(0)),
            Some(ci(0))
        );
    }

    #[test]
    fn test_solve_feasible_instance_skips_repair() {
        let model = ModelBuilder::<i64>::new()
            .add_order(7, 10)
            .add_order(3, 4)
            .add_order(5, 6)
            .add_container(10, 10)
            .add_container(5, 5)
            .build()
            .unwrap();

        let solver = SolverBuilder::new().with_seed(1).build();
        let outcome = solver.solve(&model);

        assert!(outcome.is_feasible());
        assert_eq!(outcome.statistics().iterations, 0);
        assert_eq!(outcome.solution().total_profit(), 20);
    }

    #[test]
    fn test_solve_unsatisfiable_instance_reports_violations() {
        // A single container whose min can never be reached.
        let model = ModelBuilder::<i64>::new()
            .add_order(2, 1)
            .add_container(5, 6)
            .build()
            .unwrap();

        let solver = SolverBuilder::new().with_seed(1).build();
        let outcome = solver.solve(&model);

        assert!(!outcome.is_feasible());
        assert_eq!(outcome.remaining_violations(), 1);
        assert_eq!(
            *outcome.termination_reason(),
            RepairTerminationReason::Stuck
        );
    }

    #[test]
    fn test_solve_terminates_on_fruitless_instance() {
        // The opening places the order into [0, 3] (it does not fit the
        // higher-min [1, 2]), leaving [1, 2] empty. The pair stays eligible
        // forever, but the acceptable interval is [-2, -1] and the only
        // candidate net change is -3, so no trade ever fits; the iteration
        // budget must end the run.
        let model = ModelBuilder::<i64>::new()
            .add_order(3, 1)
            .add_container(0, 3)
            .add_container(1, 2)
            .build()
            .unwrap();

        let solver = SolverBuilder::new()
            .with_seed(1)
            .with_iteration_limit(100)
            .build();
        let outcome = solver.solve(&model);

        assert!(!outcome.is_feasible());
        assert_eq!(outcome.remaining_violations(), 1);
        assert!(matches!(
            outcome.termination_reason(),
            RepairTerminationReason::BudgetExhausted(_)
        ));
        assert_eq!(outcome.statistics().iterations, 100);
        assert_eq!(outcome.statistics().fruitless_iterations, 100);
        assert_eq!(outcome.statistics().trades_applied, 0);
    }

    #[test]
    fn test_solve_with_progress_log() {
        // The progress table goes to stdout; the solve itself must behave
        // exactly as without it.
        let model = ModelBuilder::<i64>::new()
            .add_order(6, 10)
            .add_order(4, 5)
            .add_order(4, 5)
            .add_container(6, 10)
            .add_container(8, 10)
            .build()
            .unwrap();

        let plain = SolverBuilder::new().with_seed(7).build().solve(&model);
        let logged = SolverBuilder::new()
            .with_seed(7)
            .with_progress_log()
            .build()
            .solve(&model);

        assert!(logged.is_feasible());
        assert_eq!(logged.solution(), plain.solution());
        assert_eq!(logged.termination_reason(), plain.termination_reason());
    }

    #[test]
    fn test_solve_is_reproducible_under_fixed_seed() {
        let model = ModelBuilder::<i64>::new()
            .add_order(6, 10)
            .add_order(4, 5)
            .add_order(4, 5)
            .add_order(2, 1)
            .add_container(6, 10)
            .add_container(8, 10)
            .build()
            .unwrap();

        let solver = SolverBuilder::new().with_seed(99).build();
        let outcome_a = solver.solve(&model);
        let outcome_b = solver.solve(&model);

        assert_eq!(outcome_a.solution(), outcome_b.solution());
        assert_eq!(
            outcome_a.termination_reason(),
            outcome_b.termination_reason()
        );
        assert_eq!(
            outcome_a.statistics().iterations,
            outcome_b.statistics().iterations
        );
    }

    #[test]
    fn test_solve_empty_model() {
        let model = ModelBuilder::<i64>::new().build().unwrap();
        let outcome = SolverBuilder::new().with_seed(1).build().solve(&model);

        assert!(outcome.is_feasible());
        assert_eq!(outcome.solution().assigned_orders(), 0);
        assert_eq!(outcome.statistics().iterations, 0);
    }
}
