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

//! Monitoring interface for repair runs.
//!
//! This module defines callbacks for observing the lifecycle of the repair
//! engine, including start/end events, per-iteration updates, and
//! notifications when a trade is applied. Implementations can stream logs,
//! collect metrics, or trigger early termination by returning a search
//! command to the engine. The default `search_command` continues execution,
//! allowing monitors to remain lightweight unless an explicit limit or
//! condition is reached.

use crate::{ledger::LoadLedger, stats::RepairStatistics};
use stevedore_core::num::LoadNumeric;

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum SearchCommand {
    #[default]
    Continue,
    Terminate(String),
}

impl std::fmt::Display for SearchCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchCommand::Continue => write!(f, "Continue"),
            SearchCommand::Terminate(reason) => write!(f, "Terminate: {}", reason),
        }
    }
}

/// A monitor for the repair engine.
pub trait RepairMonitor<T>
where
    T: LoadNumeric,
{
    /// Returns the name of the monitor.
    fn name(&self) -> &str;

    /// Called at the start of the repair run.
    fn on_start(&mut self, ledger: &LoadLedger<T>);

    /// Called at the end of the repair run.
    fn on_end(&mut self, ledger: &LoadLedger<T>, statistics: &RepairStatistics);

    /// Called at each iteration of the repair loop.
    fn on_iteration(&mut self, ledger: &LoadLedger<T>, statistics: &RepairStatistics);

    /// Called after a trade has been applied to the assignment.
    fn on_trade_applied(&mut self, ledger: &LoadLedger<T>, statistics: &RepairStatistics);

    /// Determines the command for the next step of the repair loop.
    fn search_command(&mut self, _statistics: &RepairStatistics) -> SearchCommand {
        SearchCommand::Continue
    }
}

impl<T> std::fmt::Debug for dyn RepairMonitor<T> + '_
where
    T: LoadNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RepairMonitor {{ name: {} }}", self.name())
    }
}

impl<T> std::fmt::Display for dyn RepairMonitor<T> + '_
where
    T: LoadNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RepairMonitor: {}", self.name())
    }
}
