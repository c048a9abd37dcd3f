//! Built-in selection rules.
//!
//! One rule per non-preemptive discipline. All rules return lower
//! scores for processes that should run first.

use super::SelectionRule;
use crate::models::Process;

/// First-Come-First-Served: earliest arrival runs first.
///
/// Combined with the loop's (arrival, id) tie-break this reproduces a
/// stable sort of the process set by arrival time.
#[derive(Debug, Clone, Copy)]
pub struct EarliestArrival;

impl SelectionRule for EarliestArrival {
    fn score(&self, process: &Process) -> i64 {
        process.arrival_time
    }
}

/// Shortest-Job-First: smallest burst time runs first.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean waiting time on a single
/// server when all jobs are available.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    fn score(&self, process: &Process) -> i64 {
        process.burst_time
    }
}

/// Priority scheduling: lowest priority value (highest priority) runs
/// first.
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl SelectionRule for HighestPriority {
    fn score(&self, process: &Process) -> i64 {
        i64::from(process.priority)
    }
}
