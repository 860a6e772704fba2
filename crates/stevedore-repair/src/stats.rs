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

//! Statistics reporting for repair runs.
//!
//! This module defines a lightweight container for tracking aggregate
//! metrics during a repair run: iteration count, number of applied trades,
//! number of fruitless iterations, and total elapsed time. The interface is
//! optimized for hot-loop usage: updates rely on saturating arithmetic to
//! avoid overflow traps and expose clear, inline methods for per-iteration
//! and per-event accounting. The resulting `RepairStatistics` can be
//! consumed by monitors and result reporting without imposing measurable
//! overhead on the inner loop.

use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepairStatistics {
    /// Number of iterations performed by the repair loop.
    pub iterations: u64,

    /// Number of trades applied to the assignment.
    pub trades_applied: u64,

    /// Number of iterations whose selected pair admitted no trade.
    pub fruitless_iterations: u64,

    /// Total time taken by the repair run.
    pub time_total: Duration,
}

impl Default for RepairStatistics {
    fn default() -> Self {
        Self {
            iterations: 0,
            trades_applied: 0,
            fruitless_iterations: 0,
            time_total: Duration::ZERO,
        }
    }
}

impl RepairStatistics {
    /// Called at each iteration of the repair loop.
    #[inline]
    pub fn on_iteration(&mut self) {
        self.iterations = self.iterations.saturating_add(1);
    }

    /// Called when a trade is applied.
    #[inline]
    pub fn on_trade_applied(&mut self) {
        self.trades_applied = self.trades_applied.saturating_add(1);
    }

    /// Called when the selected pair admitted no trade.
    #[inline]
    pub fn on_fruitless_iteration(&mut self) {
        self.fruitless_iterations = self.fruitless_iterations.saturating_add(1);
    }

    /// Sets the total time taken by the repair run.
    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl std::fmt::Display for RepairStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Repair Statistics:")?;
        writeln!(f, "   Iterations:           {}", self.iterations)?;
        writeln!(f, "   Trades Applied:       {}", self.trades_applied)?;
        writeln!(f, "   Fruitless Iterations: {}", self.fruitless_iterations)?;
        writeln!(f, "   Total Time:           {:?}", self.time_total)?;
        Ok(())
    }
}
