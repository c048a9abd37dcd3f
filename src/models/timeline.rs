//! Execution timeline (Gantt chart) model.
//!
//! A timeline is the ordered list of execution segments one simulation
//! produced. Segments are time-ordered and non-overlapping; a gap
//! between consecutive segments means the server sat idle waiting for
//! the next arrival (no explicit idle entry is recorded).

use serde::{Deserialize, Serialize};

use super::ProcessId;

/// One contiguous stretch of CPU time granted to a process.
///
/// Under round robin a process may appear in several non-contiguous
/// segments; the non-preemptive disciplines produce exactly one
/// segment per process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineSegment {
    /// Process that held the CPU.
    pub process_id: ProcessId,
    /// Segment start (ticks, inclusive).
    pub start_time: i64,
    /// Segment end (ticks, exclusive).
    pub end_time: i64,
}

impl TimelineSegment {
    /// Creates a new segment.
    pub fn new(process_id: ProcessId, start_time: i64, end_time: i64) -> Self {
        Self {
            process_id,
            start_time,
            end_time,
        }
    }

    /// Segment length in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }
}

/// A complete execution timeline for one algorithm.
///
/// Serializes as a plain JSON array of segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    segments: Vec<TimelineSegment>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment. Callers push segments in time order.
    pub fn push(&mut self, segment: TimelineSegment) {
        self.segments.push(segment);
    }

    /// All segments in time order.
    pub fn segments(&self) -> &[TimelineSegment] {
        &self.segments
    }

    /// Whether the timeline has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Latest end time across all segments (0 for an empty timeline).
    pub fn makespan(&self) -> i64 {
        self.segments.iter().map(|s| s.end_time).max().unwrap_or(0)
    }

    /// Completion time of a process: the latest end among its segments.
    pub fn completion_time(&self, process_id: ProcessId) -> Option<i64> {
        self.segments
            .iter()
            .filter(|s| s.process_id == process_id)
            .map(|s| s.end_time)
            .max()
    }

    /// Total CPU time granted to a process across all its segments.
    pub fn service_time(&self, process_id: ProcessId) -> i64 {
        self.segments
            .iter()
            .filter(|s| s.process_id == process_id)
            .map(|s| s.duration())
            .sum()
    }

    /// Returns all segments belonging to a process, in time order.
    pub fn segments_for_process(&self, process_id: ProcessId) -> Vec<&TimelineSegment> {
        self.segments
            .iter()
            .filter(|s| s.process_id == process_id)
            .collect()
    }
}

impl FromIterator<TimelineSegment> for Timeline {
    fn from_iter<I: IntoIterator<Item = TimelineSegment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_timeline() -> Timeline {
        // P1 runs twice around a P2 slice; gap before the final segment.
        [
            TimelineSegment::new(1, 0, 2),
            TimelineSegment::new(2, 2, 4),
            TimelineSegment::new(1, 4, 7),
            TimelineSegment::new(3, 9, 12),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_makespan() {
        assert_eq!(sample_timeline().makespan(), 12);
    }

    #[test]
    fn test_completion_time() {
        let t = sample_timeline();
        assert_eq!(t.completion_time(1), Some(7));
        assert_eq!(t.completion_time(2), Some(4));
        assert_eq!(t.completion_time(3), Some(12));
        assert_eq!(t.completion_time(99), None);
    }

    #[test]
    fn test_service_time() {
        let t = sample_timeline();
        assert_eq!(t.service_time(1), 5); // 2 + 3
        assert_eq!(t.service_time(2), 2);
        assert_eq!(t.service_time(99), 0);
    }

    #[test]
    fn test_segments_for_process() {
        let t = sample_timeline();
        let p1 = t.segments_for_process(1);
        assert_eq!(p1.len(), 2);
        assert_eq!(p1[0].start_time, 0);
        assert_eq!(p1[1].start_time, 4);
    }

    #[test]
    fn test_segment_duration() {
        assert_eq!(TimelineSegment::new(1, 3, 8).duration(), 5);
    }

    #[test]
    fn test_empty_timeline() {
        let t = Timeline::new();
        assert!(t.is_empty());
        assert_eq!(t.makespan(), 0);
        assert_eq!(t.segment_count(), 0);
        assert_eq!(t.completion_time(1), None);
    }

    #[test]
    fn test_serializes_as_array() {
        let t: Timeline = [TimelineSegment::new(1, 0, 5)].into_iter().collect();
        let json = serde_json::to_value(&t).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["processId"], 1);
        assert_eq!(json[0]["startTime"], 0);
        assert_eq!(json[0]["endTime"], 5);

        let back: Timeline = serde_json::from_value(json).unwrap();
        assert_eq!(back, t);
    }
}
