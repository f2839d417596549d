//! CPU scheduling strategies and timing metrics.
//!
//! Four interchangeable disciplines implement the `Scheduler` trait:
//!
//! | Discipline | Type | Preemptive |
//! |------------|------|------------|
//! | FCFS | `FcfsScheduler` | no |
//! | SJF | `SjfScheduler` | no |
//! | Priority | `PriorityScheduler` | no |
//! | Round-Robin | `RoundRobinScheduler` | yes |
//!
//! The three non-preemptive disciplines share `NonPreemptiveScheduler`
//! and differ only in their `DispatchRule`.
//!
//! # Shared Rules
//!
//! - The clock starts at the earliest arrival.
//! - When nothing is eligible, an idle interval runs to the next arrival.
//! - Equal ranks are broken by the smaller process identity.
//! - Input is borrowed, never mutated; every run builds fresh results.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3-4

mod discipline;
mod kpi;
mod non_preemptive;
mod outcome;
mod round_robin;

pub use discipline::{compare_all, Discipline};
pub use kpi::{Comparison, ComparisonEntry, Metric, TimingSummary};
pub use non_preemptive::{FcfsScheduler, NonPreemptiveScheduler, PriorityScheduler, SjfScheduler};
pub use outcome::ScheduleOutcome;
pub use round_robin::RoundRobinScheduler;

use crate::models::ProcessSpec;
use std::fmt::Debug;

/// A CPU scheduling discipline.
///
/// Implementations must be deterministic: identical input yields an
/// identical outcome.
pub trait Scheduler: Send + Sync + Debug {
    /// Short name (e.g., "FCFS", "RR").
    fn name(&self) -> &'static str;

    /// Name including parameters (e.g., "RR (q=2)").
    fn label(&self) -> String {
        self.name().to_string()
    }

    /// Simulates the discipline over `processes`.
    fn schedule(&self, processes: &[ProcessSpec]) -> ScheduleOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Slot, Time};
    use crate::workload::WorkloadGenerator;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::num::NonZeroU32;

    const QUANTUM: u32 = 3;

    fn all_schedulers() -> Vec<Box<dyn Scheduler>> {
        Discipline::all(NonZeroU32::new(QUANTUM).unwrap())
            .iter()
            .map(Discipline::scheduler)
            .collect()
    }

    fn random_workloads() -> Vec<Vec<ProcessSpec>> {
        let mut rng = SmallRng::seed_from_u64(42);
        let generator = WorkloadGenerator::new(8)
            .with_arrival_range(0, 20)
            .with_burst_range(1, 9)
            .with_priority_range(0, 4);
        (0..50).map(|_| generator.generate(&mut rng)).collect()
    }

    #[test]
    fn test_timeline_covers_first_arrival_to_last_completion() {
        for processes in random_workloads() {
            let first_arrival = processes.iter().map(|p| p.arrival).min();
            for s in all_schedulers() {
                let outcome = s.schedule(&processes);
                let t = &outcome.timeline;
                assert!(t.is_contiguous(), "{}: {}", s.name(), t);
                assert!(t.iter().all(|i| i.start < i.end));
                assert_eq!(t.start(), first_arrival);
                assert_eq!(t.end(), Some(outcome.makespan()));
            }
        }
    }

    #[test]
    fn test_metric_identities_hold() {
        for processes in random_workloads() {
            for s in all_schedulers() {
                let outcome = s.schedule(&processes);
                assert_eq!(outcome.results.len(), processes.len());
                for spec in &processes {
                    let r = outcome.result_for(spec.id).unwrap();
                    assert_eq!(r.turnaround, r.completion - spec.arrival);
                    assert_eq!(r.waiting, r.turnaround - spec.burst);
                    assert_eq!(r.response, r.start - spec.arrival);
                    assert!(r.waiting >= 0 && r.turnaround >= 0 && r.response >= 0);
                }
            }
        }
    }

    #[test]
    fn test_busy_time_equals_total_burst() {
        for processes in random_workloads() {
            let total: Time = processes.iter().map(|p| p.burst).sum();
            for s in all_schedulers() {
                assert_eq!(s.schedule(&processes).timeline.busy_time(), total);
            }
        }
    }

    #[test]
    fn test_non_preemptive_single_interval() {
        let non_preemptive: Vec<Box<dyn Scheduler>> = vec![
            Box::new(FcfsScheduler::default()),
            Box::new(SjfScheduler::default()),
            Box::new(PriorityScheduler::default()),
        ];
        for processes in random_workloads() {
            for s in &non_preemptive {
                let outcome = s.schedule(&processes);
                for spec in &processes {
                    let spans = outcome.timeline.intervals_for(spec.id);
                    assert_eq!(spans.len(), 1);
                    assert_eq!(spans[0].duration(), spec.burst);
                }
            }
        }
    }

    #[test]
    fn test_round_robin_slices_bounded_by_quantum() {
        let rr = RoundRobinScheduler::new(NonZeroU32::new(QUANTUM).unwrap());
        for processes in random_workloads() {
            let outcome = rr.schedule(&processes);
            for interval in outcome.timeline.iter() {
                if let Slot::Process(id) = interval.slot {
                    assert!(interval.duration() <= Time::from(QUANTUM));
                    let r = outcome.result_for(id).unwrap();
                    // Nothing runs for a process after it completes.
                    assert!(interval.end <= r.completion);
                }
            }
            for spec in &processes {
                let last = outcome.timeline.intervals_for(spec.id).last().map(|i| i.end);
                assert_eq!(last, Some(outcome.result_for(spec.id).unwrap().completion));
            }
        }
    }

    #[test]
    fn test_runs_are_idempotent() {
        for processes in random_workloads().into_iter().take(10) {
            for s in all_schedulers() {
                let a = s.schedule(&processes);
                let b = s.schedule(&processes.clone());
                assert_eq!(a, b);
                assert_eq!(
                    serde_json::to_string(&a).unwrap(),
                    serde_json::to_string(&b).unwrap()
                );
            }
        }
    }

    #[test]
    fn test_input_order_does_not_matter() {
        for processes in random_workloads().into_iter().take(10) {
            let mut reversed = processes.clone();
            reversed.reverse();
            for s in all_schedulers() {
                assert_eq!(s.schedule(&processes), s.schedule(&reversed));
            }
        }
    }
}
