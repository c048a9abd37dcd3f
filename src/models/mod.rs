//! Scheduling domain models.
//!
//! Provides the data types shared by every simulation: the immutable
//! process records, the execution timelines (Gantt charts) the
//! disciplines produce, and the aggregated report returned to the
//! caller.
//!
//! All entities are created fresh per invocation and discarded after
//! the report is returned — no cross-run state, no caching.

mod process;
mod report;
mod timeline;

pub use process::{Process, ProcessId};
pub use report::{Algorithm, AlgorithmResult, SimulationReport};
pub use timeline::{Timeline, TimelineSegment};
