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

//! Time-based termination for repair runs.
//!
//! This module provides `TimeLimitMonitor`, a lightweight monitor that
//! stops the repair engine after a configurable wall-clock duration. It
//! integrates with the `RepairMonitor` trait and issues a
//! `SearchCommand::Terminate` when the elapsed time exceeds the configured
//! limit.
//!
//! Clock checks can be throttled using a step mask applied to the iteration
//! counter; only when the masked value is zero the clock is queried. The
//! default mask is `0`, checking on every iteration, because repair runs on
//! small instances may finish within a handful of iterations and a coarse
//! mask would overshoot short limits badly. For large instances, `with_mask`
//! trades responsiveness for lower clock overhead.
//!
//! The monitor resets its start time on `on_start`, ensuring each run is
//! measured independently.

use crate::{
    ledger::LoadLedger,
    monitor::repair_monitor::{RepairMonitor, SearchCommand},
    stats::RepairStatistics,
};
use std::time::{Duration, Instant};
use stevedore_core::num::LoadNumeric;

/// A wall-clock monitor that terminates a repair run after a fixed
/// duration.
///
/// The monitor records the start time at `on_start` and checks the elapsed
/// time during `search_command`, throttled by `clock_check_mask`. When
/// `elapsed >= time_limit`, it issues a termination command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeLimitMonitor {
    start_time: Instant,
    time_limit: Duration,
    clock_check_mask: u64,
}

impl TimeLimitMonitor {
    /// Default mask for clock checks. Checks the clock on every iteration.
    const DEFAULT_STEP_CLOCK_CHECK_MASK: u64 = 0;

    /// Creates a new `TimeLimitMonitor` with the specified time limit.
    pub fn new(time_limit: Duration) -> Self {
        Self {
            start_time: Instant::now(),
            time_limit,
            clock_check_mask: Self::DEFAULT_STEP_CLOCK_CHECK_MASK,
        }
    }

    /// Creates a new `TimeLimitMonitor` with a custom step clock check mask.
    /// Lower mask values check more often; higher values check less often.
    pub fn with_mask(time_limit: Duration, clock_check_mask: u64) -> Self {
        Self {
            start_time: Instant::now(),
            time_limit,
            clock_check_mask,
        }
    }
}

impl<T> RepairMonitor<T> for TimeLimitMonitor
where
    T: LoadNumeric,
{
    fn name(&self) -> &str {
        "TimeLimitMonitor"
    }

    fn on_start(&mut self, _ledger: &LoadLedger<T>) {
        self.start_time = Instant::now();
    }

    fn on_end(&mut self, _ledger: &LoadLedger<T>, _statistics: &RepairStatistics) {}

    fn on_iteration(&mut self, _ledger: &LoadLedger<T>, _statistics: &RepairStatistics) {}

    fn on_trade_applied(&mut self, _ledger: &LoadLedger<T>, _statistics: &RepairStatistics) {}

    fn search_command(&mut self, statistics: &RepairStatistics) -> SearchCommand {
        if (statistics.iterations & self.clock_check_mask) == 0 {
            let elapsed = self.start_time.elapsed();
            if elapsed >= self.time_limit {
                return SearchCommand::Terminate("time limit exceeded".to_string());
            }
        }
        SearchCommand::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_limit_terminates_immediately() {
        let mut monitor = TimeLimitMonitor::new(Duration::ZERO);
        let stats = RepairStatistics::default();
        assert!(matches!(
            RepairMonitor::<i64>::search_command(&mut monitor, &stats),
            SearchCommand::Terminate(_)
        ));
    }

    #[test]
    fn test_generous_limit_continues() {
        let mut monitor = TimeLimitMonitor::new(Duration::from_secs(3600));
        let stats = RepairStatistics::default();
        assert_eq!(
            RepairMonitor::<i64>::search_command(&mut monitor, &stats),
            SearchCommand::Continue
        );
    }

    #[test]
    fn test_mask_skips_clock_checks() {
        let mut monitor = TimeLimitMonitor::with_mask(Duration::ZERO, 0x0FFF);
        let mut stats = RepairStatistics::default();
        // Iteration 1 is masked out, so even an expired limit is not seen.
        stats.iterations = 1;
        assert_eq!(
            RepairMonitor::<i64>::search_command(&mut monitor, &stats),
            SearchCommand::Continue
        );
    }
}
