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

//! The randomized repair engine.
//!
//! ## Motivation
//!
//! A constructive opening pass usually leaves some containers outside
//! their load windows, since it only respects upper bounds while placing
//! orders. The engine closes that gap by repeatedly exchanging orders
//! between a randomly chosen eligible container pair until every window is
//! satisfied, a monitor calls a halt, or no pair can plausibly help.
//!
//! ## Highlights
//!
//! - Feasibility is checked before the budget, so a run on an already
//!   feasible assignment terminates as `Repaired` without consuming any
//!   budget and without touching the assignment.
//! - Load bookkeeping is incremental through the `LoadLedger`; debug
//!   builds cross-check it against a full rescan after every trade.
//! - All termination policy lives in monitors, keeping the loop free of
//!   budget arithmetic.

use crate::{
    ledger::LoadLedger,
    monitor::repair_monitor::{RepairMonitor, SearchCommand},
    result::RepairOutcome,
    selector::PairSelector,
    stats::RepairStatistics,
    trade::{acceptable_interval, apply_trade, find_trade},
};
use rand::Rng;
use std::time::Instant;
use stevedore_core::num::LoadNumeric;
use stevedore_model::{assignment::Assignment, model::Model};

enum LoopExit {
    Repaired,
    Stuck,
    Terminated(String),
}

/// Drives the pairwise-exchange repair loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepairEngine;

impl RepairEngine {
    /// Creates a new engine.
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Repairs `assignment` in place until it satisfies every load window,
    /// the monitor terminates the run, or no eligible pair remains.
    ///
    /// # Panics
    ///
    /// Panics if `assignment` does not have one slot per model order.
    pub fn run<T, R, M>(
        &self,
        model: &Model<T>,
        assignment: &mut Assignment,
        selector: &mut PairSelector<R>,
        monitor: &mut M,
    ) -> RepairOutcome
    where
        T: LoadNumeric,
        R: Rng,
        M: RepairMonitor<T>,
    {
        let start_time = Instant::now();
        let mut ledger = LoadLedger::new(model, assignment);
        let mut statistics = RepairStatistics::default();
        monitor.on_start(&ledger);

        let exit = loop {
            if ledger.violation_count() == 0 {
                break LoopExit::Repaired;
            }
            if let SearchCommand::Terminate(msg) = monitor.search_command(&statistics) {
                break LoopExit::Terminated(msg);
            }

            statistics.on_iteration();
            monitor.on_iteration(&ledger, &statistics);

            let Some((first, second)) = selector.select_pair(&ledger) else {
                break LoopExit::Stuck;
            };

            // Eligibility does not guarantee an admissible net change, let
            // alone a concrete order combination realizing one.
            let Some(acceptable) = acceptable_interval(&ledger, first, second) else {
                statistics.on_fruitless_iteration();
                continue;
            };
            let Some(trade) = find_trade(model, assignment, first, second, &acceptable) else {
                statistics.on_fruitless_iteration();
                continue;
            };

            apply_trade(assignment, &mut ledger, first, second, &trade);
            debug_assert!(
                ledger == LoadLedger::new(model, assignment),
                "incremental ledger diverged from a full rescan after a trade"
            );
            statistics.on_trade_applied();
            monitor.on_trade_applied(&ledger, &statistics);
        };

        statistics.set_total_time(start_time.elapsed());
        monitor.on_end(&ledger, &statistics);

        match exit {
            LoopExit::Repaired => RepairOutcome::repaired(statistics),
            LoopExit::Stuck => RepairOutcome::stuck(ledger.violation_count(), statistics),
            LoopExit::Terminated(msg) => {
                RepairOutcome::budget_exhausted(ledger.violation_count(), msg, statistics)
            }
        }
    }
}
