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
    monitor::repair_monitor::{RepairMonitor, SearchCommand},
    stats::RepairStatistics,
};
use stevedore_core::num::LoadNumeric;

#[derive(Default)]
pub struct CompositeRepairMonitor<'a, T>
where
    T: LoadNumeric,
{
    monitors: Vec<Box<dyn RepairMonitor<T> + 'a>>,
}

impl<'a, T> CompositeRepairMonitor<'a, T>
where
    T: LoadNumeric,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            monitors: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: RepairMonitor<T> + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    #[inline]
    pub fn add_boxed_monitor(&mut self, monitor: Box<dyn RepairMonitor<T> + 'a>) {
        self.monitors.push(monitor);
    }

    #[inline]
    pub fn monitors(&self) -> &[Box<dyn RepairMonitor<T> + 'a>] {
        &self.monitors
    }
}

impl<'a, T> RepairMonitor<T> for CompositeRepairMonitor<'a, T>
where
    T: LoadNumeric,
{
    fn name(&self) -> &str {
        "CompositeRepairMonitor"
    }

    fn on_start(&mut self, ledger: &LoadLedger<T>) {
        for m in &mut self.monitors {
            m.on_start(ledger);
        }
    }

    fn on_end(&mut self, ledger: &LoadLedger<T>, statistics: &RepairStatistics) {
        for m in &mut self.monitors {
            m.on_end(ledger, statistics);
        }
    }

    fn on_iteration(&mut self, ledger: &LoadLedger<T>, statistics: &RepairStatistics) {
        for m in &mut self.monitors {
            m.on_iteration(ledger, statistics);
        }
    }

    fn on_trade_applied(&mut self, ledger: &LoadLedger<T>, statistics: &RepairStatistics) {
        for m in &mut self.monitors {
            m.on_trade_applied(ledger, statistics);
        }
    }

    fn search_command(&mut self, statistics: &RepairStatistics) -> SearchCommand {
        for m in &mut self.monitors {
            match m.search_command(statistics) {
                SearchCommand::Continue => continue,
                // Return the first terminate request to keep ordering deterministic
                SearchCommand::Terminate(msg) => return SearchCommand::Terminate(msg),
            }
        }
        SearchCommand::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::{iteration::IterationLimitMonitor, no_op::NoOpRepairMonitor};

    #[test]
    fn test_empty_composite_continues() {
        let mut composite = CompositeRepairMonitor::<i64>::new();
        let stats = RepairStatistics::default();
        assert_eq!(
            RepairMonitor::search_command(&mut composite, &stats),
            SearchCommand::Continue
        );
    }

    #[test]
    fn test_first_terminate_wins() {
        let mut composite = CompositeRepairMonitor::<i64>::new();
        composite.add_monitor(NoOpRepairMonitor::new());
        composite.add_monitor(IterationLimitMonitor::new(0));
        let stats = RepairStatistics::default();

        match RepairMonitor::search_command(&mut composite, &stats) {
            SearchCommand::Terminate(msg) => assert!(msg.contains("iteration limit")),
            SearchCommand::Continue => panic!("expected termination"),
        }
    }
}
