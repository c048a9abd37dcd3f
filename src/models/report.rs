//! Simulation report model.
//!
//! Per-algorithm results (Gantt chart plus averaged metrics) keyed by
//! the four fixed algorithm identifiers, and the overall best-algorithm
//! verdict. The report is the complete response of a simulation run;
//! it round-trips losslessly through serde.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Timeline;

/// The four simulated scheduling disciplines.
///
/// Declaration order is the fixed comparison tie-break order used by
/// best-algorithm selection. The serde names are the wire identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-Come-First-Served.
    #[serde(rename = "FCFS")]
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    #[serde(rename = "SJF")]
    Sjf,
    /// Priority scheduling, non-preemptive (lower value = higher priority).
    #[serde(rename = "PriorityScheduling")]
    PriorityScheduling,
    /// Round robin with a fixed time quantum.
    #[serde(rename = "RoundRobin")]
    RoundRobin,
}

impl Algorithm {
    /// All algorithms, in fixed tie-break order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::PriorityScheduling,
        Algorithm::RoundRobin,
    ];

    /// The wire identifier for this algorithm.
    pub fn identifier(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::PriorityScheduling => "PriorityScheduling",
            Algorithm::RoundRobin => "RoundRobin",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// Result of simulating one algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmResult {
    /// Execution order as a time-ordered segment list.
    pub gantt_chart: Timeline,
    /// Mean waiting time across all processes (0.0 for an empty run).
    pub avg_waiting_time: f64,
    /// Mean turnaround time across all processes (0.0 for an empty run).
    pub avg_turnaround_time: f64,
}

/// Aggregated results for all four algorithms plus the verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// First-Come-First-Served result.
    #[serde(rename = "FCFS")]
    pub fcfs: AlgorithmResult,
    /// Shortest-Job-First result.
    #[serde(rename = "SJF")]
    pub sjf: AlgorithmResult,
    /// Priority-scheduling result.
    #[serde(rename = "PriorityScheduling")]
    pub priority_scheduling: AlgorithmResult,
    /// Round-robin result.
    #[serde(rename = "RoundRobin")]
    pub round_robin: AlgorithmResult,
    /// Winner under the comparison rule (lowest average waiting time,
    /// ties by average turnaround time, then fixed identifier order).
    #[serde(rename = "bestAlgorithm")]
    pub best_algorithm: Algorithm,
}

impl SimulationReport {
    /// The result for a given algorithm.
    pub fn result(&self, algorithm: Algorithm) -> &AlgorithmResult {
        match algorithm {
            Algorithm::Fcfs => &self.fcfs,
            Algorithm::Sjf => &self.sjf,
            Algorithm::PriorityScheduling => &self.priority_scheduling,
            Algorithm::RoundRobin => &self.round_robin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimelineSegment;

    fn sample_result(end: i64) -> AlgorithmResult {
        AlgorithmResult {
            gantt_chart: [TimelineSegment::new(1, 0, end)].into_iter().collect(),
            avg_waiting_time: 0.0,
            avg_turnaround_time: end as f64,
        }
    }

    fn sample_report() -> SimulationReport {
        SimulationReport {
            fcfs: sample_result(5),
            sjf: sample_result(5),
            priority_scheduling: sample_result(5),
            round_robin: sample_result(5),
            best_algorithm: Algorithm::Fcfs,
        }
    }

    #[test]
    fn test_identifiers() {
        assert_eq!(Algorithm::Fcfs.identifier(), "FCFS");
        assert_eq!(Algorithm::Sjf.identifier(), "SJF");
        assert_eq!(
            Algorithm::PriorityScheduling.identifier(),
            "PriorityScheduling"
        );
        assert_eq!(Algorithm::RoundRobin.identifier(), "RoundRobin");
        assert_eq!(Algorithm::RoundRobin.to_string(), "RoundRobin");
    }

    #[test]
    fn test_fixed_order() {
        let names: Vec<&str> = Algorithm::ALL.iter().map(|a| a.identifier()).collect();
        assert_eq!(names, ["FCFS", "SJF", "PriorityScheduling", "RoundRobin"]);
    }

    #[test]
    fn test_algorithm_serde() {
        let json = serde_json::to_string(&Algorithm::PriorityScheduling).unwrap();
        assert_eq!(json, "\"PriorityScheduling\"");
        let back: Algorithm = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Algorithm::PriorityScheduling);
    }

    #[test]
    fn test_report_wire_keys() {
        let report = sample_report();
        let json = serde_json::to_value(&report).unwrap();

        for key in ["FCFS", "SJF", "PriorityScheduling", "RoundRobin"] {
            assert!(json.get(key).is_some(), "missing key {key}");
            assert!(json[key]["ganttChart"].is_array());
            assert!(json[key]["avgWaitingTime"].is_number());
            assert!(json[key]["avgTurnaroundTime"].is_number());
        }
        assert_eq!(json["bestAlgorithm"], "FCFS");
    }

    #[test]
    fn test_report_round_trip() {
        let report = sample_report();
        let json = serde_json::to_string(&report).unwrap();
        let back: SimulationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn test_result_accessor() {
        let mut report = sample_report();
        report.sjf.avg_waiting_time = 7.0;
        assert_eq!(report.result(Algorithm::Sjf).avg_waiting_time, 7.0);
        assert_eq!(report.result(Algorithm::Fcfs).avg_waiting_time, 0.0);
    }
}
