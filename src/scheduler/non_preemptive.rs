//! Non-preemptive rule-driven scheduler.
//!
//! # Algorithm
//!
//! 1. Start the clock at the earliest arrival.
//! 2. Among processes that have arrived and are not complete, pick the one
//!    with the lowest rule rank (ties → smaller identity).
//! 3. Run it to completion; the clock advances by its burst.
//! 4. If nothing is eligible, emit an idle interval up to the earliest
//!    pending arrival and jump the clock there.
//!
//! # Complexity
//! O(n²) for n processes.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3.1-5.3.3

use tracing::{debug, trace};

use super::{ScheduleOutcome, Scheduler};
use crate::dispatching::{rules, DispatchRule};
use crate::models::{ExecutionInterval, ProcessResult, ProcessSpec, Time, Timeline};

/// Non-preemptive scheduler parameterized by a dispatching rule.
///
/// # Example
///
/// ```
/// use u_cpusim::scheduler::{Scheduler, SjfScheduler};
/// use u_cpusim::models::ProcessSpec;
///
/// let processes = vec![
///     ProcessSpec::new(1, 6),
///     ProcessSpec::new(2, 2).with_arrival(1),
///     ProcessSpec::new(3, 1).with_arrival(2),
/// ];
/// let outcome = SjfScheduler::default().schedule(&processes);
/// assert_eq!(outcome.timeline.to_string(), "[P1:0-6, P3:6-7, P2:7-9]");
/// ```
#[derive(Debug, Clone, Default)]
pub struct NonPreemptiveScheduler<R> {
    rule: R,
}

/// First-Come-First-Served.
pub type FcfsScheduler = NonPreemptiveScheduler<rules::Fcfs>;
/// Shortest Job First (non-preemptive).
pub type SjfScheduler = NonPreemptiveScheduler<rules::Sjf>;
/// Static priority (non-preemptive).
pub type PriorityScheduler = NonPreemptiveScheduler<rules::Priority>;

impl<R: DispatchRule> NonPreemptiveScheduler<R> {
    /// Creates a scheduler using the given rule.
    pub fn new(rule: R) -> Self {
        Self { rule }
    }

    /// The dispatching rule.
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// Index of the best eligible process at `clock`, if any.
    fn select(&self, processes: &[ProcessSpec], done: &[bool], clock: Time) -> Option<usize> {
        processes
            .iter()
            .enumerate()
            .filter(|(i, p)| !done[*i] && p.arrival <= clock)
            .min_by_key(|(_, p)| (self.rule.rank(p), p.id))
            .map(|(i, _)| i)
    }
}

impl<R: DispatchRule> Scheduler for NonPreemptiveScheduler<R> {
    fn name(&self) -> &'static str {
        self.rule.name()
    }

    fn schedule(&self, processes: &[ProcessSpec]) -> ScheduleOutcome {
        let n = processes.len();
        debug!(algorithm = self.name(), processes = n, "scheduling run started");

        let mut timeline = Timeline::new();
        let mut results = Vec::with_capacity(n);
        let mut done = vec![false; n];

        let Some(mut clock) = processes.iter().map(|p| p.arrival).min() else {
            return ScheduleOutcome::assemble(self.label(), timeline, results);
        };

        while results.len() < n {
            let Some(idx) = self.select(processes, &done, clock) else {
                let next_arrival = processes
                    .iter()
                    .zip(&done)
                    .filter(|(_, d)| !**d)
                    .map(|(p, _)| p.arrival)
                    .min();
                match next_arrival {
                    Some(arrival) => {
                        trace!(from = clock, to = arrival, "cpu idle");
                        timeline.push(ExecutionInterval::idle(clock, arrival));
                        clock = arrival;
                        continue;
                    }
                    None => break,
                }
            };

            let spec = &processes[idx];
            let start = clock;
            clock += spec.burst;
            trace!(pid = spec.id, start, end = clock, "dispatch");

            timeline.push(ExecutionInterval::running(spec.id, start, clock));
            results.push(ProcessResult::derive(spec, start, clock));
            done[idx] = true;
        }

        let outcome = ScheduleOutcome::assemble(self.label(), timeline, results);
        debug!(
            algorithm = self.name(),
            makespan = outcome.makespan(),
            avg_waiting = outcome.summary.avg_waiting,
            "scheduling run finished"
        );
        outcome
    }
}
