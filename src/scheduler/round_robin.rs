//! Preemptive Round-Robin scheduler.
//!
//! # Algorithm
//!
//! 1. Order processes by (arrival, identity) and start the clock at the
//!    first arrival; admit everything that has arrived into a FIFO queue.
//! 2. Pop the queue head. Record its start time on first dispatch.
//! 3. Run it for `min(quantum, remaining)` ticks.
//! 4. Admit processes that arrived during the slice, **then** re-queue the
//!    preempted process if it still has work left.
//! 5. With an empty queue, idle until the next arrival.
//!
//! The order in step 4 is a fixed contract: newly arrived processes are
//! queued ahead of the process that was just preempted.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3.4

use std::collections::VecDeque;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::{ScheduleOutcome, Scheduler};
use crate::models::{ExecutionInterval, ProcessResult, ProcessSpec, Time, Timeline};

/// Round-Robin scheduler with a fixed time quantum.
///
/// # Example
///
/// ```
/// use std::num::NonZeroU32;
/// use u_cpusim::scheduler::{RoundRobinScheduler, Scheduler};
/// use u_cpusim::models::ProcessSpec;
///
/// let processes = vec![
///     ProcessSpec::new(1, 5),
///     ProcessSpec::new(2, 3).with_arrival(1),
/// ];
/// let rr = RoundRobinScheduler::new(NonZeroU32::new(2).unwrap());
/// let outcome = rr.schedule(&processes);
/// assert_eq!(
///     outcome.timeline.to_string(),
///     "[P1:0-2, P2:2-4, P1:4-6, P2:6-7, P1:7-8]"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRobinScheduler {
    quantum: NonZeroU32,
}

impl RoundRobinScheduler {
    /// Creates a scheduler with the given quantum.
    pub fn new(quantum: NonZeroU32) -> Self {
        Self { quantum }
    }

    /// The time quantum.
    pub fn quantum(&self) -> NonZeroU32 {
        self.quantum
    }
}

/// Pushes every not-yet-admitted process with `arrival <= clock`.
fn admit_arrivals(
    processes: &[ProcessSpec],
    by_arrival: &[usize],
    next: &mut usize,
    queue: &mut VecDeque<usize>,
    clock: Time,
) {
    while let Some(&idx) = by_arrival.get(*next) {
        if processes[idx].arrival > clock {
            break;
        }
        trace!(pid = processes[idx].id, at = clock, "admitted");
        queue.push_back(idx);
        *next += 1;
    }
}

impl Scheduler for RoundRobinScheduler {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn label(&self) -> String {
        format!("RR (q={})", self.quantum)
    }

    fn schedule(&self, processes: &[ProcessSpec]) -> ScheduleOutcome {
        let n = processes.len();
        let quantum = Time::from(self.quantum.get());
        debug!(algorithm = self.name(), processes = n, quantum, "scheduling run started");

        let mut timeline = Timeline::new();
        let mut results = Vec::with_capacity(n);

        let mut by_arrival: Vec<usize> = (0..n).collect();
        by_arrival.sort_by_key(|&i| (processes[i].arrival, processes[i].id));

        let Some(&first) = by_arrival.first() else {
            return ScheduleOutcome::assemble(self.label(), timeline, results);
        };

        let mut remaining: Vec<Time> = processes.iter().map(|p| p.burst).collect();
        let mut first_dispatch: Vec<Option<Time>> = vec![None; n];
        let mut queue = VecDeque::with_capacity(n);
        let mut next = 0;
        let mut clock = processes[first].arrival;

        admit_arrivals(processes, &by_arrival, &mut next, &mut queue, clock);

        while results.len() < n {
            let Some(idx) = queue.pop_front() else {
                let Some(&pending) = by_arrival.get(next) else {
                    break;
                };
                let arrival = processes[pending].arrival;
                trace!(from = clock, to = arrival, "cpu idle");
                timeline.push(ExecutionInterval::idle(clock, arrival));
                clock = arrival;
                admit_arrivals(processes, &by_arrival, &mut next, &mut queue, clock);
                continue;
            };

            let spec = &processes[idx];
            let start = *first_dispatch[idx].get_or_insert(clock);

            // Non-positive remaining work finishes with a zero-width slice.
            let slice = quantum.min(remaining[idx]).max(0);
            let slice_start = clock;
            clock += slice;
            remaining[idx] -= slice;
            trace!(pid = spec.id, start = slice_start, end = clock, "dispatch");
            timeline.push(ExecutionInterval::running(spec.id, slice_start, clock));

            admit_arrivals(processes, &by_arrival, &mut next, &mut queue, clock);

            if remaining[idx] <= 0 {
                results.push(ProcessResult::derive(spec, start, clock));
            } else {
                queue.push_back(idx);
            }
        }

        let outcome = ScheduleOutcome::assemble(self.label(), timeline, results);
        debug!(
            algorithm = self.name(),
            makespan = outcome.makespan(),
            slices = outcome.timeline.len(),
            "scheduling run finished"
        );
        outcome
    }
}
