//! CPU-scheduling simulation engine.
//!
//! Simulates four classic single-server scheduling disciplines —
//! First-Come-First-Served, non-preemptive Shortest-Job-First,
//! non-preemptive priority scheduling, and round robin — over a common
//! process set, and compares them by average waiting time.
//!
//! The engine is a pure function of its request: no I/O, no persistence,
//! no cross-run state. Callers build a [`engine::SimulationRequest`]
//! (time quantum plus process records) and receive a
//! [`models::SimulationReport`] holding one Gantt chart and one metric
//! pair per discipline, plus the best-algorithm verdict.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `Timeline`,
//!   `TimelineSegment`, `Algorithm`, `AlgorithmResult`,
//!   `SimulationReport`
//! - **`validation`**: Input integrity checks (quantum, burst/arrival
//!   ranges, duplicate ids)
//! - **`dispatch`**: Selection rules for the non-preemptive disciplines
//! - **`engine`**: The four simulations, per-process metrics, and
//!   best-algorithm selection
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod dispatch;
pub mod engine;
pub mod models;
pub mod validation;
