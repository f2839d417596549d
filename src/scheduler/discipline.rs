//! Discipline selection and multi-discipline comparison.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    Comparison, FcfsScheduler, PriorityScheduler, RoundRobinScheduler, ScheduleOutcome, Scheduler,
    SjfScheduler,
};
use crate::models::ProcessSpec;

/// A scheduling discipline, as a configuration value.
///
/// Serialized externally tagged: `"Fcfs"`, `"Sjf"`, `"Priority"`,
/// `{"RoundRobin": {"quantum": 2}}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Discipline {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest Job First (non-preemptive).
    Sjf,
    /// Static priority (non-preemptive).
    Priority,
    /// Preemptive Round-Robin.
    RoundRobin {
        /// Time slice per dispatch.
        quantum: NonZeroU32,
    },
}

impl Discipline {
    /// The four disciplines in comparison order.
    pub fn all(quantum: NonZeroU32) -> [Discipline; 4] {
        [
            Discipline::Fcfs,
            Discipline::Sjf,
            Discipline::Priority,
            Discipline::RoundRobin { quantum },
        ]
    }

    /// Builds the scheduler for this discipline.
    pub fn scheduler(&self) -> Box<dyn Scheduler> {
        match *self {
            Discipline::Fcfs => Box::new(FcfsScheduler::default()),
            Discipline::Sjf => Box::new(SjfScheduler::default()),
            Discipline::Priority => Box::new(PriorityScheduler::default()),
            Discipline::RoundRobin { quantum } => Box::new(RoundRobinScheduler::new(quantum)),
        }
    }

    /// Runs this discipline over a workload.
    pub fn run(&self, processes: &[ProcessSpec]) -> ScheduleOutcome {
        self.scheduler().schedule(processes)
    }
}

/// Runs FCFS, SJF, Priority and Round-Robin over the same workload.
///
/// Each run reads the shared input and produces its own results; no run can
/// observe another's. Rows are keyed by short algorithm name ("FCFS", "SJF",
/// "Priority", "RR").
pub fn compare_all(processes: &[ProcessSpec], quantum: NonZeroU32) -> Comparison {
    let mut comparison = Comparison::new();
    for discipline in Discipline::all(quantum) {
        let scheduler = discipline.scheduler();
        let outcome = scheduler.schedule(processes);
        comparison.add(scheduler.name(), outcome.summary);
    }
    debug!(
        processes = processes.len(),
        quantum = quantum.get(),
        "discipline comparison finished"
    );
    comparison
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::Metric;

    fn q(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    #[test]
    fn test_discipline_dispatch() {
        let processes = vec![
            ProcessSpec::new(1, 5),
            ProcessSpec::new(2, 3).with_arrival(1),
        ];
        assert_eq!(
            Discipline::Fcfs.run(&processes).timeline.to_string(),
            "[P1:0-5, P2:5-8]"
        );
        assert_eq!(
            Discipline::RoundRobin { quantum: q(2) }
                .run(&processes)
                .timeline
                .to_string(),
            "[P1:0-2, P2:2-4, P1:4-6, P2:6-7, P1:7-8]"
        );
    }

    #[test]
    fn test_discipline_serde() {
        let d: Discipline = serde_json::from_str(r#"{"RoundRobin":{"quantum":4}}"#).unwrap();
        assert_eq!(d, Discipline::RoundRobin { quantum: q(4) });

        let d: Discipline = serde_json::from_str(r#""Sjf""#).unwrap();
        assert_eq!(d, Discipline::Sjf);

        assert!(serde_json::from_str::<Discipline>(r#"{"RoundRobin":{"quantum":0}}"#).is_err());
    }

    #[test]
    fn test_compare_all() {
        let processes = vec![
            ProcessSpec::new(1, 8).with_priority(3),
            ProcessSpec::new(2, 4).with_arrival(1).with_priority(1),
            ProcessSpec::new(3, 1).with_arrival(2).with_priority(2),
        ];
        let cmp = compare_all(&processes, q(2));
        let names: Vec<&str> = cmp.entries.iter().map(|e| e.algorithm.as_str()).collect();
        assert_eq!(names, vec!["FCFS", "SJF", "Priority", "RR"]);

        // FCFS: P1 0-8, P2 8-12, P3 12-13 → WT (0 + 7 + 10) / 3
        let fcfs = cmp.get("FCFS").unwrap();
        assert!((fcfs.avg_waiting - 17.0 / 3.0).abs() < 1e-10);
        // SJF: P1 0-8, P3 8-9, P2 9-13 → WT (0 + 8 + 6) / 3
        let sjf = cmp.get("SJF").unwrap();
        assert!((sjf.avg_waiting - 14.0 / 3.0).abs() < 1e-10);
        assert_eq!(cmp.winners(Metric::Waiting).len(), 1);
    }

    #[test]
    fn test_compare_runs_are_independent() {
        let processes = vec![
            ProcessSpec::new(1, 4),
            ProcessSpec::new(2, 2).with_arrival(1),
        ];
        let before = processes.clone();
        let first = compare_all(&processes, q(1));
        let second = compare_all(&processes, q(1));
        assert_eq!(first, second);
        assert_eq!(processes, before);
    }
}
