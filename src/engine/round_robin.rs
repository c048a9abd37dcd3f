//! Round-robin simulation.
//!
//! A FIFO ready queue with a fixed time quantum. One timeline segment
//! is recorded per slice, so no segment ever exceeds the quantum.
//!
//! # Queue discipline
//!
//! Processes enter the queue in arrival order; simultaneous arrivals
//! enter by ascending id. Processes that arrive by the end of a slice
//! are enqueued *before* the process that was just preempted; a
//! process that finishes its burst is never re-enqueued, even when
//! another process arrives at exactly that instant. If the queue
//! empties while unarrived processes remain, the clock jumps to the
//! next arrival.
//!
//! Cost is O(total burst / quantum) queue operations; callers needing
//! bounded latency cap process count and total burst externally.

use std::collections::VecDeque;

use crate::models::{Process, Timeline, TimelineSegment};

/// Simulates round robin with the given quantum over the process set.
///
/// The quantum must be positive; `validation::validate_request`
/// enforces this before the engine runs.
pub fn simulate(processes: &[Process], quantum: i64) -> Timeline {
    let mut timeline = Timeline::new();
    if processes.is_empty() {
        return timeline;
    }

    // Arrival scan order: ascending (arrival, id).
    let mut order: Vec<usize> = (0..processes.len()).collect();
    order.sort_by_key(|&i| (processes[i].arrival_time, processes[i].id));

    let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst_time).collect();
    let mut queued = vec![false; processes.len()];
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut clock: i64 = 0;

    loop {
        if queue.is_empty() {
            // Jump to the next arrival, or stop if everything finished.
            let next = order
                .iter()
                .copied()
                .find(|&i| remaining[i] > 0 && !queued[i]);
            match next {
                Some(i) => clock = clock.max(processes[i].arrival_time),
                None => break,
            }
            for &i in &order {
                if remaining[i] > 0 && !queued[i] && processes[i].arrival_time <= clock {
                    queue.push_back(i);
                    queued[i] = true;
                }
            }
        }

        let index = match queue.pop_front() {
            Some(index) => index,
            None => break,
        };
        queued[index] = false;

        let slice = quantum.min(remaining[index]);
        let start = clock;
        let end = start + slice;
        timeline.push(TimelineSegment::new(processes[index].id, start, end));
        clock = end;
        remaining[index] -= slice;

        // Arrivals during the slice (or at its end) go ahead of the
        // preempted process.
        for &i in &order {
            if i != index && remaining[i] > 0 && !queued[i] && processes[i].arrival_time <= clock {
                queue.push_back(i);
                queued[i] = true;
            }
        }
        if remaining[index] > 0 {
            queue.push_back(index);
            queued[index] = true;
        }
    }

    timeline
}
