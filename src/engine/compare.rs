//! Best-algorithm selection.
//!
//! Compares algorithm results by average waiting time ascending, then
//! average turnaround time ascending. Remaining ties resolve to the
//! earliest entry, so callers pass candidates in the fixed identifier
//! order (FCFS, SJF, PriorityScheduling, RoundRobin) and the winner is
//! deterministic for identical input.

use crate::models::{Algorithm, AlgorithmResult};

/// Selects the winner among candidates ordered by the fixed tie-break
/// order. Returns FCFS for an empty slice.
pub fn select_best(candidates: &[(Algorithm, &AlgorithmResult)]) -> Algorithm {
    candidates
        .iter()
        .min_by(|(_, a), (_, b)| {
            a.avg_waiting_time
                .total_cmp(&b.avg_waiting_time)
                .then(a.avg_turnaround_time.total_cmp(&b.avg_turnaround_time))
        })
        .map(|(algorithm, _)| *algorithm)
        .unwrap_or(Algorithm::Fcfs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Timeline;

    fn result(avg_waiting: f64, avg_turnaround: f64) -> AlgorithmResult {
        AlgorithmResult {
            gantt_chart: Timeline::new(),
            avg_waiting_time: avg_waiting,
            avg_turnaround_time: avg_turnaround,
        }
    }

    fn pick(results: [AlgorithmResult; 4]) -> Algorithm {
        let candidates: Vec<(Algorithm, &AlgorithmResult)> = Algorithm::ALL
            .iter()
            .copied()
            .zip(results.iter())
            .collect();
        select_best(&candidates)
    }

    #[test]
    fn test_lowest_waiting_wins() {
        let best = pick([
            result(5.0, 9.0),
            result(3.0, 12.0),
            result(4.0, 8.0),
            result(6.0, 10.0),
        ]);
        assert_eq!(best, Algorithm::Sjf);
    }

    #[test]
    fn test_waiting_tie_breaks_on_turnaround() {
        let best = pick([
            result(3.0, 9.0),
            result(3.0, 8.0),
            result(4.0, 7.0),
            result(5.0, 10.0),
        ]);
        assert_eq!(best, Algorithm::Sjf);
    }

    #[test]
    fn test_full_tie_breaks_on_fixed_order() {
        let best = pick([
            result(3.0, 8.0),
            result(3.0, 8.0),
            result(3.0, 8.0),
            result(3.0, 8.0),
        ]);
        assert_eq!(best, Algorithm::Fcfs);
    }

    #[test]
    fn test_round_robin_can_win() {
        let best = pick([
            result(4.0, 9.0),
            result(4.0, 9.0),
            result(4.0, 9.0),
            result(2.5, 7.0),
        ]);
        assert_eq!(best, Algorithm::RoundRobin);
    }

    #[test]
    fn test_partial_tie_prefers_earlier_entry() {
        // SJF and PriorityScheduling fully tied below FCFS: SJF wins by
        // position in the fixed order.
        let best = pick([
            result(5.0, 9.0),
            result(3.0, 8.0),
            result(3.0, 8.0),
            result(6.0, 11.0),
        ]);
        assert_eq!(best, Algorithm::Sjf);
    }

    #[test]
    fn test_empty_defaults_to_fcfs() {
        assert_eq!(select_best(&[]), Algorithm::Fcfs);
    }
}
