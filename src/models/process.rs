//! Process model.
//!
//! A process is split into two records: the immutable `ProcessSpec`
//! supplied by the caller, and a `ProcessResult` produced fresh by every
//! scheduling run and linked back to its spec by identity.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

/// Simulated time unit. There is no wall clock; time is an integer counter.
pub type Time = i64;

/// Stable, 1-based process identity.
pub type ProcessId = u32;

/// A unit of schedulable work.
///
/// # Time Representation
/// Arrival and burst are in abstract ticks relative to t=0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Process identity (1-based).
    pub id: ProcessId,
    /// Time at which the process becomes eligible.
    pub arrival: Time,
    /// Total CPU demand.
    pub burst: Time,
    /// Static priority (smaller = more urgent).
    pub priority: i32,
}

impl ProcessSpec {
    /// Creates a process arriving at t=0 with priority 0.
    pub fn new(id: ProcessId, burst: Time) -> Self {
        Self {
            id,
            arrival: 0,
            burst,
            priority: 0,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival: Time) -> Self {
        self.arrival = arrival;
        self
    }

    /// Sets the burst time.
    pub fn with_burst(mut self, burst: Time) -> Self {
        self.burst = burst;
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

/// Timing figures of one process in one completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    /// Identity of the `ProcessSpec` this result belongs to.
    pub id: ProcessId,
    /// Time of first dispatch.
    pub start: Time,
    /// Time at which the last unit of burst finished.
    pub completion: Time,
    /// `turnaround - burst`.
    pub waiting: Time,
    /// `completion - arrival`.
    pub turnaround: Time,
    /// `start - arrival`.
    pub response: Time,
}

impl ProcessResult {
    /// Derives waiting, turnaround and response from the dispatch times.
    pub fn derive(spec: &ProcessSpec, start: Time, completion: Time) -> Self {
        let turnaround = completion - spec.arrival;
        Self {
            id: spec.id,
            start,
            completion,
            waiting: turnaround - spec.burst,
            turnaround,
            response: start - spec.arrival,
        }
    }
}
