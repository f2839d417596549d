//! Timeline (execution trace) model.
//!
//! A timeline is the chronological record of who owned the CPU. Gaps are
//! never implicit: when nothing is eligible the scheduler emits an explicit
//! idle interval, so a well-formed timeline is contiguous from its first
//! start to its last end.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ProcessId, Time};

/// Owner of the CPU during an interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    /// No process was eligible.
    Idle,
    /// The given process was running.
    Process(ProcessId),
}

impl Slot {
    /// Process identity, or `None` for idle.
    pub fn process_id(&self) -> Option<ProcessId> {
        match self {
            Slot::Idle => None,
            Slot::Process(id) => Some(*id),
        }
    }

    /// Whether this slot is idle.
    pub fn is_idle(&self) -> bool {
        matches!(self, Slot::Idle)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Idle => f.write_str("Idle"),
            Slot::Process(id) => write!(f, "P{id}"),
        }
    }
}

/// One contiguous span `[start, end)` owned by a single slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionInterval {
    /// Owner of the CPU.
    pub slot: Slot,
    /// Inclusive start.
    pub start: Time,
    /// Exclusive end.
    pub end: Time,
}

impl ExecutionInterval {
    /// Creates an interval for a running process.
    pub fn running(id: ProcessId, start: Time, end: Time) -> Self {
        Self {
            slot: Slot::Process(id),
            start,
            end,
        }
    }

    /// Creates an idle interval.
    pub fn idle(start: Time, end: Time) -> Self {
        Self {
            slot: Slot::Idle,
            start,
            end,
        }
    }

    /// Length of the interval.
    #[inline]
    pub fn duration(&self) -> Time {
        self.end - self.start
    }
}

impl fmt::Display for ExecutionInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.slot, self.start, self.end)
    }
}

/// Ordered sequence of execution intervals produced by one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Intervals in chronological order.
    pub intervals: Vec<ExecutionInterval>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an interval.
    pub fn push(&mut self, interval: ExecutionInterval) {
        self.intervals.push(interval);
    }

    /// Number of intervals.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Whether the timeline has no intervals.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Iterates over intervals in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ExecutionInterval> {
        self.intervals.iter()
    }

    /// Start of the first interval.
    pub fn start(&self) -> Option<Time> {
        self.intervals.first().map(|i| i.start)
    }

    /// End of the last interval.
    pub fn end(&self) -> Option<Time> {
        self.intervals.last().map(|i| i.end)
    }

    /// Total time covered (`end - start`), 0 when empty.
    pub fn span(&self) -> Time {
        match (self.start(), self.end()) {
            (Some(s), Some(e)) => e - s,
            _ => 0,
        }
    }

    /// Time spent running processes.
    pub fn busy_time(&self) -> Time {
        self.intervals
            .iter()
            .filter(|i| !i.slot.is_idle())
            .map(ExecutionInterval::duration)
            .sum()
    }

    /// Time spent idle.
    pub fn idle_time(&self) -> Time {
        self.intervals
            .iter()
            .filter(|i| i.slot.is_idle())
            .map(ExecutionInterval::duration)
            .sum()
    }

    /// CPU utilization: busy time / span.
    ///
    /// Returns `None` if the span is zero.
    pub fn utilization(&self) -> Option<f64> {
        let span = self.span();
        if span <= 0 {
            return None;
        }
        Some(self.busy_time() as f64 / span as f64)
    }

    /// Returns all intervals owned by a given process.
    pub fn intervals_for(&self, id: ProcessId) -> Vec<&ExecutionInterval> {
        self.intervals
            .iter()
            .filter(|i| i.slot == Slot::Process(id))
            .collect()
    }

    /// Whether every interval begins exactly where the previous one ended.
    pub fn is_contiguous(&self) -> bool {
        self.intervals
            .windows(2)
            .all(|w| w[0].end == w[1].start && w[0].start <= w[0].end)
    }

    /// Slot labels in order (e.g. `["P1", "Idle", "P2"]`).
    pub fn labels(&self) -> Vec<String> {
        self.intervals.iter().map(|i| i.slot.to_string()).collect()
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a ExecutionInterval;
    type IntoIter = std::slice::Iter<'a, ExecutionInterval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (n, interval) in self.intervals.iter().enumerate() {
            if n > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{interval}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_timeline() -> Timeline {
        let mut t = Timeline::new();
        t.push(ExecutionInterval::running(1, 0, 3));
        t.push(ExecutionInterval::idle(3, 5));
        t.push(ExecutionInterval::running(2, 5, 6));
        t.push(ExecutionInterval::running(1, 6, 8));
        t
    }

    #[test]
    fn test_slot_display() {
        assert_eq!(Slot::Idle.to_string(), "Idle");
        assert_eq!(Slot::Process(4).to_string(), "P4");
        assert_eq!(Slot::Process(4).process_id(), Some(4));
        assert_eq!(Slot::Idle.process_id(), None);
    }

    #[test]
    fn test_timeline_bounds() {
        let t = sample_timeline();
        assert_eq!(t.start(), Some(0));
        assert_eq!(t.end(), Some(8));
        assert_eq!(t.span(), 8);
        assert_eq!(t.len(), 4);
    }

    #[test]
    fn test_busy_and_idle() {
        let t = sample_timeline();
        assert_eq!(t.busy_time(), 6);
        assert_eq!(t.idle_time(), 2);
        let util = t.utilization().unwrap();
        assert!((util - 0.75).abs() < 1e-10);
    }

    #[test]
    fn test_intervals_for_process() {
        let t = sample_timeline();
        assert_eq!(t.intervals_for(1).len(), 2);
        assert_eq!(t.intervals_for(2).len(), 1);
        assert!(t.intervals_for(9).is_empty());
    }

    #[test]
    fn test_contiguity() {
        let t = sample_timeline();
        assert!(t.is_contiguous());

        let mut gap = Timeline::new();
        gap.push(ExecutionInterval::running(1, 0, 2));
        gap.push(ExecutionInterval::running(2, 3, 4));
        assert!(!gap.is_contiguous());
    }

    #[test]
    fn test_display() {
        let t = sample_timeline();
        assert_eq!(t.to_string(), "[P1:0-3, Idle:3-5, P2:5-6, P1:6-8]");
        assert_eq!(t.labels(), vec!["P1", "Idle", "P2", "P1"]);
    }

    #[test]
    fn test_empty_timeline() {
        let t = Timeline::new();
        assert!(t.is_empty());
        assert_eq!(t.span(), 0);
        assert!(t.utilization().is_none());
        assert!(t.is_contiguous());
        assert_eq!(t.to_string(), "[]");
    }
}
