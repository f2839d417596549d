//! Result of one scheduling run.

use serde::{Deserialize, Serialize};

use super::TimingSummary;
use crate::models::{ProcessId, ProcessResult, Time, Timeline};

/// Everything one scheduling run produces.
///
/// `results` is sorted by process identity regardless of dispatch order,
/// so it can be rendered as a per-process table directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleOutcome {
    /// Algorithm label (e.g., "SJF", "RR (q=2)").
    pub algorithm: String,
    /// Chronological execution trace.
    pub timeline: Timeline,
    /// Per-process timing figures, ordered by identity.
    pub results: Vec<ProcessResult>,
    /// Means over `results`.
    pub summary: TimingSummary,
}

impl ScheduleOutcome {
    /// Builds an outcome from a finished run.
    pub(crate) fn assemble(
        algorithm: impl Into<String>,
        timeline: Timeline,
        mut results: Vec<ProcessResult>,
    ) -> Self {
        results.sort_by_key(|r| r.id);
        let summary = TimingSummary::calculate(&results);
        Self {
            algorithm: algorithm.into(),
            timeline,
            results,
            summary,
        }
    }

    /// Finds the result for a given process.
    pub fn result_for(&self, id: ProcessId) -> Option<&ProcessResult> {
        self.results.iter().find(|r| r.id == id)
    }

    /// Latest completion time, 0 when nothing ran.
    pub fn makespan(&self) -> Time {
        self.results.iter().map(|r| r.completion).max().unwrap_or(0)
    }

    /// Process identities in order of first dispatch.
    pub fn dispatch_order(&self) -> Vec<ProcessId> {
        let mut order = Vec::new();
        for id in self.timeline.iter().filter_map(|i| i.slot.process_id()) {
            if !order.contains(&id) {
                order.push(id);
            }
        }
        order
    }
}
