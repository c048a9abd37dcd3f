//! Input validation for simulation requests.
//!
//! Checks structural integrity of the quantum and process records
//! before any simulation runs. Detects:
//! - Non-positive time quantum
//! - Invalid process ids (zero)
//! - Negative arrival times
//! - Non-positive burst times
//! - Duplicate process ids
//!
//! Validation fails fast: the quantum is checked first, then each
//! process in input order (id, arrival, burst, uniqueness), and the
//! first violation aborts the run. Nothing is coerced or dropped.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{Process, ProcessId};

/// A validation error naming the offending field and process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The round-robin time quantum is zero or negative.
    #[error("time quantum must be positive, got {quantum}")]
    NonPositiveQuantum {
        /// The rejected quantum.
        quantum: i64,
    },
    /// A process id is below the minimum of 1.
    #[error("process id must be at least 1, got {id}")]
    InvalidId {
        /// The rejected id.
        id: ProcessId,
    },
    /// A process arrives before the simulation epoch.
    #[error("process {id}: arrival time must be non-negative, got {arrival_time}")]
    NegativeArrival {
        /// Offending process.
        id: ProcessId,
        /// The rejected arrival time.
        arrival_time: i64,
    },
    /// A process requires zero or negative CPU time.
    #[error("process {id}: burst time must be positive, got {burst_time}")]
    NonPositiveBurst {
        /// Offending process.
        id: ProcessId,
        /// The rejected burst time.
        burst_time: i64,
    },
    /// Two processes share the same id.
    #[error("duplicate process id {id}")]
    DuplicateId {
        /// The repeated id.
        id: ProcessId,
    },
}

/// Validates the input data for a simulation run.
///
/// Checks:
/// 1. Quantum is positive
/// 2. Every process id is at least 1
/// 3. Every arrival time is non-negative
/// 4. Every burst time is positive
/// 5. No duplicate process ids
///
/// An empty process list is valid.
///
/// # Returns
/// `Ok(())` if all checks pass, otherwise the first violation found.
pub fn validate_request(quantum: i64, processes: &[Process]) -> Result<(), ValidationError> {
    if quantum <= 0 {
        return Err(ValidationError::NonPositiveQuantum { quantum });
    }

    let mut seen: HashSet<ProcessId> = HashSet::with_capacity(processes.len());
    for process in processes {
        if process.id == 0 {
            return Err(ValidationError::InvalidId { id: process.id });
        }
        if process.arrival_time < 0 {
            return Err(ValidationError::NegativeArrival {
                id: process.id,
                arrival_time: process.arrival_time,
            });
        }
        if process.burst_time <= 0 {
            return Err(ValidationError::NonPositiveBurst {
                id: process.id,
                burst_time: process.burst_time,
            });
        }
        if !seen.insert(process.id) {
            return Err(ValidationError::DuplicateId { id: process.id });
        }
    }

    Ok(())
}
