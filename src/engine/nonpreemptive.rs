//! Shared simulation loop for the non-preemptive disciplines.
//!
//! Whenever the server becomes free, the process with the lowest rule
//! score among those that have arrived and not yet run is selected;
//! ties go to the earliest arrival, then the smallest id. The selected
//! process runs uninterrupted to completion — a shorter or more urgent
//! job arriving mid-burst never preempts it. If no process has
//! arrived, the clock jumps to the earliest remaining arrival and the
//! gap is left idle in the timeline.

use crate::dispatch::SelectionRule;
use crate::models::{Process, Timeline, TimelineSegment};

/// Simulates one non-preemptive discipline over the process set.
pub fn simulate(processes: &[Process], rule: &dyn SelectionRule) -> Timeline {
    let mut timeline = Timeline::new();
    let mut finished = vec![false; processes.len()];
    let mut completed = 0;
    let mut clock: i64 = 0;

    while completed < processes.len() {
        let pick = processes
            .iter()
            .enumerate()
            .filter(|(i, p)| !finished[*i] && p.arrival_time <= clock)
            .min_by_key(|&(_, p)| (rule.score(p), p.arrival_time, p.id));

        match pick {
            Some((index, process)) => {
                let start = clock;
                let end = start + process.burst_time;
                timeline.push(TimelineSegment::new(process.id, start, end));
                clock = end;
                finished[index] = true;
                completed += 1;
            }
            None => {
                // Server idle: jump to the earliest remaining arrival.
                let next_arrival = processes
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| !finished[*i])
                    .map(|(_, p)| p.arrival_time)
                    .min();
                match next_arrival {
                    Some(arrival) => clock = arrival,
                    None => break,
                }
            }
        }
    }

    timeline
}
