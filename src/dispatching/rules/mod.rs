//! Built-in dispatching rules.
//!
//! | Rule | Rank | Optimal for |
//! |------|------|-------------|
//! | FCFS | arrival time | fairness (order of arrival) |
//! | SJF | burst time | mean waiting time among non-preemptive rules |
//! | Priority | priority value | externally assigned urgency |
//!
//! # Score Convention
//! All rules return lower ranks for processes that should run first.

use super::{DispatchRule, Rank};
use crate::models::ProcessSpec;

/// First-Come-First-Served.
///
/// Ranks by arrival time, so among eligible processes the earliest
/// arrival runs first.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl DispatchRule for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn rank(&self, process: &ProcessSpec) -> Rank {
        process.arrival
    }

    fn description(&self) -> &'static str {
        "First-Come-First-Served"
    }
}

/// Shortest Job First (non-preemptive).
///
/// # Reference
/// Smith (1956), shortest processing time minimizes mean flow time on a
/// single machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl DispatchRule for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn rank(&self, process: &ProcessSpec) -> Rank {
        process.burst
    }

    fn description(&self) -> &'static str {
        "Shortest Job First (non-preemptive)"
    }
}

/// Static priority (non-preemptive). Smaller value = more urgent.
#[derive(Debug, Clone, Copy, Default)]
pub struct Priority;

impl DispatchRule for Priority {
    fn name(&self) -> &'static str {
        "Priority"
    }

    fn rank(&self, process: &ProcessSpec) -> Rank {
        Rank::from(process.priority)
    }

    fn description(&self) -> &'static str {
        "Static priority (non-preemptive)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProcessSpec {
        ProcessSpec::new(1, 8).with_arrival(3).with_priority(-2)
    }

    #[test]
    fn test_fcfs_rank() {
        assert_eq!(Fcfs.rank(&sample()), 3);
        assert_eq!(Fcfs.name(), "FCFS");
    }

    #[test]
    fn test_sjf_rank() {
        assert_eq!(Sjf.rank(&sample()), 8);
        assert_eq!(Sjf.description(), "Shortest Job First (non-preemptive)");
    }

    #[test]
    fn test_priority_rank() {
        assert_eq!(Priority.rank(&sample()), -2);
        assert_eq!(Priority.name(), "Priority");
    }
}
