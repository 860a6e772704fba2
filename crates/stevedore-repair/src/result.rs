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

//! Repair outcome and termination reporting.
//!
//! This module encapsulates the final result produced by the repair engine:
//! a concise termination reason, the number of load-window violations left
//! in the assignment, and aggregate run statistics. The `RepairOutcome`
//! serves as a single transport object for downstream consumers such as the
//! solver facade, CLI tools, or experiment pipelines. Termination reasons
//! distinguish between a fully repaired assignment, an exhausted search
//! budget, and a search space with no eligible container pair left,
//! making it straightforward to audit the end state of a run.

use crate::stats::RepairStatistics;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RepairTerminationReason {
    /// Every container satisfies its load window.
    Repaired,

    /// No eligible container pair remains, but violations persist.
    Stuck,

    /// A monitor requested termination (time, iterations, etc.).
    /// The string contains information about the reason for abortion.
    BudgetExhausted(String),
}

impl std::fmt::Display for RepairTerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RepairTerminationReason::Repaired => write!(f, "Repaired"),
            RepairTerminationReason::Stuck => write!(f, "Stuck: no eligible container pair"),
            RepairTerminationReason::BudgetExhausted(msg) => {
                write!(f, "Budget Exhausted: {}", msg)
            }
        }
    }
}

/// Result of the repair engine after termination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairOutcome {
    termination_reason: RepairTerminationReason,
    remaining_violations: usize,
    statistics: RepairStatistics,
}

impl RepairOutcome {
    /// Creates a new fully-repaired outcome.
    #[inline]
    pub fn repaired(statistics: RepairStatistics) -> Self {
        Self {
            termination_reason: RepairTerminationReason::Repaired,
            remaining_violations: 0,
            statistics,
        }
    }

    /// Creates a new stuck outcome.
    #[inline]
    pub fn stuck(remaining_violations: usize, statistics: RepairStatistics) -> Self {
        Self {
            termination_reason: RepairTerminationReason::Stuck,
            remaining_violations,
            statistics,
        }
    }

    /// Creates a new budget-exhausted outcome.
    #[inline]
    pub fn budget_exhausted<R>(
        remaining_violations: usize,
        reason: R,
        statistics: RepairStatistics,
    ) -> Self
    where
        R: Into<String>,
    {
        Self {
            termination_reason: RepairTerminationReason::BudgetExhausted(reason.into()),
            remaining_violations,
            statistics,
        }
    }

    /// Returns the termination reason.
    #[inline]
    pub fn termination_reason(&self) -> &RepairTerminationReason {
        &self.termination_reason
    }

    /// Returns the number of load-window violations left after the run.
    #[inline]
    pub fn remaining_violations(&self) -> usize {
        self.remaining_violations
    }

    /// Returns `true` if the assignment satisfies every load window.
    #[inline]
    pub fn is_feasible(&self) -> bool {
        self.remaining_violations == 0
    }

    /// Returns the statistics.
    #[inline]
    pub fn statistics(&self) -> &RepairStatistics {
        &self.statistics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repaired_outcome_is_feasible() {
        let outcome = RepairOutcome::repaired(RepairStatistics::default());
        assert!(outcome.is_feasible());
        assert_eq!(outcome.remaining_violations(), 0);
        assert_eq!(
            *outcome.termination_reason(),
            RepairTerminationReason::Repaired
        );
    }

    #[test]
    fn test_stuck_outcome_reports_violations() {
        let outcome = RepairOutcome::stuck(3, RepairStatistics::default());
        assert!(!outcome.is_feasible());
        assert_eq!(outcome.remaining_violations(), 3);
    }

    #[test]
    fn test_budget_exhausted_carries_reason() {
        let outcome =
            RepairOutcome::budget_exhausted(1, "time limit exceeded", RepairStatistics::default());
        match outcome.termination_reason() {
            RepairTerminationReason::BudgetExhausted(msg) => {
                assert_eq!(msg, "time limit exceeded");
            }
            other => panic!("expected BudgetExhausted, got {:?}", other),
        }
        let displayed = format!("{}", outcome.termination_reason());
        assert!(displayed.contains("time limit exceeded"));
    }
}
