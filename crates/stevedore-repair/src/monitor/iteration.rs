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

//! Iteration-based termination for repair runs.
//!
//! This module provides `IterationLimitMonitor`, a monitor that stops the
//! repair engine once the iteration counter reaches a configured limit. It
//! reads the limit off the shared statistics, so it carries no per-step
//! bookkeeping of its own.

use crate::{
    ledger::LoadLedger,
    monitor::repair_monitor::{RepairMonitor, SearchCommand},
    stats::RepairStatistics,
};
use stevedore_core::num::LoadNumeric;

/// A monitor that terminates the repair run after a fixed number of
/// iterations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationLimitMonitor {
    iteration_limit: u64,
}

impl IterationLimitMonitor {
    /// Creates a new `IterationLimitMonitor` with the specified limit.
    #[inline]
    pub fn new(iteration_limit: u64) -> Self {
        Self { iteration_limit }
    }

    /// Returns the configured iteration limit.
    #[inline]
    pub fn iteration_limit(&self) -> u64 {
        self.iteration_limit
    }
}

impl<T> RepairMonitor<T> for IterationLimitMonitor
where
    T: LoadNumeric,
{
    fn name(&self) -> &str {
        "IterationLimitMonitor"
    }

    fn on_start(&mut self, _ledger: &LoadLedger<T>) {}

    fn on_end(&mut self, _ledger: &LoadLedger<T>, _statistics: &RepairStatistics) {}

    fn on_iteration(&mut self, _ledger: &LoadLedger<T>, _statistics: &RepairStatistics) {}

    fn on_trade_applied(&mut self, _ledger: &LoadLedger<T>, _statistics: &RepairStatistics) {}

    fn search_command(&mut self, statistics: &RepairStatistics) -> SearchCommand {
        if statistics.iterations >= self.iteration_limit {
            return SearchCommand::Terminate("iteration limit exceeded".to_string());
        }
        SearchCommand::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continues_below_limit() {
        let mut monitor = IterationLimitMonitor::new(10);
        let mut stats = RepairStatistics::default();
        stats.iterations = 9;
        assert_eq!(
            RepairMonitor::<i64>::search_command(&mut monitor, &stats),
            SearchCommand::Continue
        );
    }

    #[test]
    fn test_terminates_at_limit() {
        let mut monitor = IterationLimitMonitor::new(10);
        let mut stats = RepairStatistics::default();
        stats.iterations = 10;
        assert!(matches!(
            RepairMonitor::<i64>::search_command(&mut monitor, &stats),
            SearchCommand::Terminate(_)
        ));
    }

    #[test]
    fn test_zero_limit_terminates_immediately() {
        let mut monitor = IterationLimitMonitor::new(0);
        let stats = RepairStatistics::default();
        assert!(matches!(
            RepairMonitor::<i64>::search_command(&mut monitor, &stats),
            SearchCommand::Terminate(_)
        ));
    }
}
