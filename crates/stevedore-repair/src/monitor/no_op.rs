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

use crate::{
    ledger::LoadLedger,
    monitor::repair_monitor::RepairMonitor,
    stats::RepairStatistics,
};
use stevedore_core::num::LoadNumeric;

/// A monitor that observes nothing and never terminates the run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOpRepairMonitor;

impl NoOpRepairMonitor {
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl<T> RepairMonitor<T> for NoOpRepairMonitor
where
    T: LoadNumeric,
{
    fn name(&self) -> &str {
        "NoOpRepairMonitor"
    }

    fn on_start(&mut self, _ledger: &LoadLedger<T>) {}

    fn on_end(&mut self, _ledger: &LoadLedger<T>, _statistics: &RepairStatistics) {}

    fn on_iteration(&mut self, _ledger: &LoadLedger<T>, _statistics: &RepairStatistics) {}

    fn on_trade_applied(&mut self, _ledger: &LoadLedger<T>, _statistics: &RepairStatistics) {}
}
