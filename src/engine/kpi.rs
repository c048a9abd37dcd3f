//! Per-algorithm schedule metrics.
//!
//! Computes completion, turnaround, and waiting times per process from
//! a simulated timeline, plus their averages.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Completion | End of the process's last slice |
//! | Turnaround | Completion − arrival |
//! | Waiting | Turnaround − burst |
//!
//! A correct simulation satisfies `waiting >= 0`, `turnaround >= burst`,
//! and `service time == burst` for every process. Violations abort the
//! run with an internal error rather than returning corrupted metrics.

use crate::models::{Process, ProcessId, Timeline};

use super::SimulationError;

/// Timing metrics for a single process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessKpi {
    /// The measured process.
    pub process_id: ProcessId,
    /// Time the process finished its last slice.
    pub completion_time: i64,
    /// Completion minus arrival.
    pub turnaround_time: i64,
    /// Turnaround minus burst (time spent ready but not running).
    pub waiting_time: i64,
}

/// Aggregated metrics for one algorithm.
///
/// Averages are `0.0` for an empty process set, by convention.
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmKpi {
    /// Per-process timings, in input order.
    pub per_process: Vec<ProcessKpi>,
    /// Mean waiting time across all processes.
    pub avg_waiting_time: f64,
    /// Mean turnaround time across all processes.
    pub avg_turnaround_time: f64,
}

impl AlgorithmKpi {
    /// Computes metrics from a timeline and its input processes.
    ///
    /// # Errors
    /// Returns [`SimulationError::Internal`] when the timeline violates
    /// a scheduling invariant: a process missing from the timeline, a
    /// scheduled total different from the burst, or a negative waiting
    /// time.
    pub fn calculate(timeline: &Timeline, processes: &[Process]) -> Result<Self, SimulationError> {
        let mut per_process = Vec::with_capacity(processes.len());
        let mut total_waiting: i64 = 0;
        let mut total_turnaround: i64 = 0;

        for process in processes {
            let completion_time = timeline.completion_time(process.id).ok_or_else(|| {
                SimulationError::internal(format!("process {} missing from timeline", process.id))
            })?;

            let service = timeline.service_time(process.id);
            if service != process.burst_time {
                return Err(SimulationError::internal(format!(
                    "process {} scheduled for {service} ticks, burst is {}",
                    process.id, process.burst_time
                )));
            }

            let turnaround_time = completion_time - process.arrival_time;
            let waiting_time = turnaround_time - process.burst_time;
            if waiting_time < 0 {
                return Err(SimulationError::internal(format!(
                    "process {} has negative waiting time {waiting_time}",
                    process.id
                )));
            }

            total_waiting += waiting_time;
            total_turnaround += turnaround_time;
            per_process.push(ProcessKpi {
                process_id: process.id,
                completion_time,
                turnaround_time,
                waiting_time,
            });
        }

        let (avg_waiting_time, avg_turnaround_time) = if processes.is_empty() {
            (0.0, 0.0)
        } else {
            let count = processes.len() as f64;
            (total_waiting as f64 / count, total_turnaround as f64 / count)
        };

        Ok(Self {
            per_process,
            avg_waiting_time,
            avg_turnaround_time,
        })
    }
}
