//! Selection rules for the non-preemptive disciplines.
//!
//! FCFS, SJF, and priority scheduling differ only in which arrived
//! process is picked when the server becomes free. That choice is
//! expressed as a [`SelectionRule`] scoring function; the shared loop
//! in `engine::nonpreemptive` picks the lowest score and applies the
//! fixed tie-break chain (earliest arrival, then smallest id).
//!
//! # Score Convention
//! **Lower score = scheduled first.**
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 4: Priority Dispatching

mod rules;

pub use rules::{EarliestArrival, HighestPriority, ShortestBurst};

use crate::models::Process;

/// A selection rule that scores waiting processes.
///
/// Returns a score where lower = scheduled first. Ties are not the
/// rule's concern; the simulation loop resolves them by arrival time,
/// then by process id.
pub trait SelectionRule: std::fmt::Debug {
    /// Evaluates a process that has arrived and not yet run.
    fn score(&self, process: &Process) -> i64;
}
