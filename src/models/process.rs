//! Process input record.
//!
//! A process is a pure CPU burst with an arrival time and a scheduling
//! priority. Records are immutable inputs; each simulation keeps its
//! own remaining-time bookkeeping.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 3.1

use serde::{Deserialize, Serialize};

/// Process identifier. Must be at least 1 and unique within a run.
pub type ProcessId = u32;

/// A process to be scheduled.
///
/// # Priority Convention
/// **Lower `priority` value = higher priority** (scheduled first). The
/// ordering is fixed by this crate, not inferred from the input.
///
/// # Time Representation
/// All times are integer ticks relative to a simulation epoch (t=0).
/// The consumer defines what one tick means.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    /// Unique process identifier (>= 1).
    pub id: ProcessId,
    /// Arrival time (ticks, >= 0).
    pub arrival_time: i64,
    /// Total CPU time required before completion (ticks, > 0).
    pub burst_time: i64,
    /// Scheduling priority. Lower value = higher priority.
    pub priority: i32,
}

impl Process {
    /// Creates a process arriving at t=0 with a one-tick burst and
    /// priority 0.
    pub fn new(id: ProcessId) -> Self {
        Self {
            id,
            arrival_time: 0,
            burst_time: 1,
            priority: 0,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival_time: i64) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Sets the burst time.
    pub fn with_burst(mut self, burst_time: i64) -> Self {
        self.burst_time = burst_time;
        self
    }

    /// Sets the priority (lower value = higher priority).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}
