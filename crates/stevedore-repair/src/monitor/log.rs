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
use std::time::{Duration, Instant};
use stevedore_core::num::LoadNumeric;

#[derive(Debug, Clone)]
pub struct LogMonitor {
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
    clock_check_mask: u64,
}

impl LogMonitor {
    pub fn new(log_interval: Duration, clock_check_mask: u64) -> Self {
        Self {
            start_time: Instant::now(),
            last_log_time: Instant::now(),
            log_interval,
            clock_check_mask,
        }
    }

    #[inline(always)]
    fn print_header(&self) {
        println!(
            "{:<9} | {:<14} | {:<14} | {:<10}",
            "Elapsed", "Iterations", "Trades", "Violations"
        );
        println!("{}", "-".repeat(56));
    }

    #[inline(always)]
    fn log_line<T>(&mut self, ledger: &LoadLedger<T>, stats: &RepairStatistics)
    where
        T: LoadNumeric,
    {
        let now = Instant::now();
        let elapsed = now.duration_since(self.start_time).as_secs_f32();
        let elapsed_field = format!("{:.1}s", elapsed);

        println!(
            "{:<9} | {:<14} | {:<14} | {:<10}",
            elapsed_field,
            stats.iterations,
            stats.trades_applied,
            ledger.violation_count()
        );

        self.last_log_time = now;
    }
}

impl Default for LogMonitor {
    fn default() -> Self {
        Self::new(Duration::from_secs(1), 4095)
    }
}

impl std::fmt::Display for LogMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogMonitor(log_interval: {}s, clock_check_mask: {})",
            self.log_interval.as_secs(),
            self.clock_check_mask
        )
    }
}

impl<T> RepairMonitor<T> for LogMonitor
where
    T: LoadNumeric,
{
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_start(&mut self, _ledger: &LoadLedger<T>) {
        self.start_time = Instant::now();
        self.last_log_time = self.start_time;
        self.print_header();
    }

    fn on_iteration(&mut self, ledger: &LoadLedger<T>, statistics: &RepairStatistics) {
        if (statistics.iterations & self.clock_check_mask) == 0
            && self.last_log_time.elapsed() >= self.log_interval
        {
            self.log_line(ledger, statistics);
        }
    }

    fn on_trade_applied(&mut self, _ledger: &LoadLedger<T>, _statistics: &RepairStatistics) {}

    fn on_end(&mut self, ledger: &LoadLedger<T>, statistics: &RepairStatistics) {
        self.log_line(ledger, statistics);
        println!("{}", "-".repeat(56));
        println!("Repair finished.");
    }
}
