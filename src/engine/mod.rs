//! Simulation engine.
//!
//! Ties validation, the four discipline simulations, per-process
//! metrics, and best-algorithm selection into a single
//! request/response call. A run either succeeds for all four
//! algorithms or fails with the first error found — partial results
//! are never returned.
//!
//! The four simulations are data-independent: each reads the same
//! immutable process slice and keeps its own bookkeeping, so they may
//! be parallelized freely; this implementation runs them sequentially.
//!
//! # Example
//!
//! ```
//! use cpu_schedule::engine::{simulate, SimulationRequest};
//! use cpu_schedule::models::{Algorithm, Process};
//!
//! let request = SimulationRequest::new(2)
//!     .with_process(Process::new(1).with_burst(5).with_priority(2))
//!     .with_process(Process::new(2).with_arrival(1).with_burst(3).with_priority(1))
//!     .with_process(Process::new(3).with_arrival(2).with_burst(8).with_priority(3));
//!
//! let report = simulate(&request).unwrap();
//! assert_eq!(report.best_algorithm, Algorithm::Fcfs);
//! assert_eq!(report.fcfs.gantt_chart.makespan(), 16);
//! ```

mod compare;
mod kpi;
mod nonpreemptive;
mod round_robin;

pub use kpi::{AlgorithmKpi, ProcessKpi};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dispatch::{EarliestArrival, HighestPriority, ShortestBurst};
use crate::models::{Algorithm, AlgorithmResult, Process, SimulationReport, Timeline};
use crate::validation::{self, ValidationError};

/// Errors a simulation run can return.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// The request failed an input integrity check; the caller can
    /// correct the input and retry.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// A scheduling invariant was violated. No results are returned.
    #[error("internal invariant violated: {0}")]
    Internal(String),
}

impl SimulationError {
    pub(crate) fn internal(detail: impl Into<String>) -> Self {
        Self::Internal(detail.into())
    }
}

/// Input container for a simulation run.
///
/// Built once per run and passed to [`simulate`]; the engine never
/// mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Round-robin time quantum (ticks, > 0).
    pub quantum: i64,
    /// Processes to simulate.
    pub processes: Vec<Process>,
}

impl SimulationRequest {
    /// Creates a request with the given quantum and no processes.
    pub fn new(quantum: i64) -> Self {
        Self {
            quantum,
            processes: Vec::new(),
        }
    }

    /// Adds a process.
    pub fn with_process(mut self, process: Process) -> Self {
        self.processes.push(process);
        self
    }

    /// Replaces the process list.
    pub fn with_processes(mut self, processes: Vec<Process>) -> Self {
        self.processes = processes;
        self
    }
}

/// Produces the execution timeline for a single algorithm.
///
/// Assumes validated input; [`simulate`] is the checked entry point.
pub fn timeline_for(algorithm: Algorithm, processes: &[Process], quantum: i64) -> Timeline {
    match algorithm {
        Algorithm::Fcfs => nonpreemptive::simulate(processes, &EarliestArrival),
        Algorithm::Sjf => nonpreemptive::simulate(processes, &ShortestBurst),
        Algorithm::PriorityScheduling => nonpreemptive::simulate(processes, &HighestPriority),
        Algorithm::RoundRobin => round_robin::simulate(processes, quantum),
    }
}

/// Runs all four simulations and aggregates the comparison.
///
/// # Errors
/// [`SimulationError::Validation`] when the request fails an input
/// check, [`SimulationError::Internal`] when a simulation violates a
/// scheduling invariant. Either way, no partial results are returned.
pub fn simulate(request: &SimulationRequest) -> Result<SimulationReport, SimulationError> {
    validation::validate_request(request.quantum, &request.processes)?;

    let fcfs = run_algorithm(Algorithm::Fcfs, request)?;
    let sjf = run_algorithm(Algorithm::Sjf, request)?;
    let priority_scheduling = run_algorithm(Algorithm::PriorityScheduling, request)?;
    let round_robin = run_algorithm(Algorithm::RoundRobin, request)?;

    let best_algorithm = compare::select_best(&[
        (Algorithm::Fcfs, &fcfs),
        (Algorithm::Sjf, &sjf),
        (Algorithm::PriorityScheduling, &priority_scheduling),
        (Algorithm::RoundRobin, &round_robin),
    ]);

    Ok(SimulationReport {
        fcfs,
        sjf,
        priority_scheduling,
        round_robin,
        best_algorithm,
    })
}

fn run_algorithm(
    algorithm: Algorithm,
    request: &SimulationRequest,
) -> Result<AlgorithmResult, SimulationError> {
    let timeline = timeline_for(algorithm, &request.processes, request.quantum);
    let kpi = AlgorithmKpi::calculate(&timeline, &request.processes)?;
    Ok(AlgorithmResult {
        gantt_chart: timeline,
        avg_waiting_time: kpi.avg_waiting_time,
        avg_turnaround_time: kpi.avg_turnaround_time,
    })
}
