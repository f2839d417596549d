//! Random workload generation.
//!
//! Produces process sets for experiments and randomized tests. The caller
//! owns the RNG, so a seeded generator gives reproducible workloads.
//!
//! # Example
//!
//! ```
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//! use u_cpusim::workload::WorkloadGenerator;
//!
//! let mut rng = SmallRng::seed_from_u64(7);
//! let processes = WorkloadGenerator::new(5).with_burst_range(1, 4).generate(&mut rng);
//! assert_eq!(processes.len(), 5);
//! assert!(processes.iter().all(|p| (1..=4).contains(&p.burst)));
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::{ProcessId, ProcessSpec, Time};

/// Parameters for random process sets. All ranges are inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadGenerator {
    /// Number of processes.
    pub count: usize,
    /// Arrival time range.
    pub arrival: (Time, Time),
    /// Burst time range.
    pub burst: (Time, Time),
    /// Priority range.
    pub priority: (i32, i32),
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes with arrivals in 0..=10,
    /// bursts in 1..=10 and priorities in 1..=5.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            arrival: (0, 10),
            burst: (1, 10),
            priority: (1, 5),
        }
    }

    /// Sets the arrival range.
    pub fn with_arrival_range(mut self, min: Time, max: Time) -> Self {
        self.arrival = ordered(min, max);
        self
    }

    /// Sets the burst range.
    pub fn with_burst_range(mut self, min: Time, max: Time) -> Self {
        self.burst = ordered(min, max);
        self
    }

    /// Sets the priority range.
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        self.priority = ordered(min, max);
        self
    }

    /// Generates processes with identities 1..=count in input order.
    ///
    /// Ranges are normalized here as well, since deserialized values never
    /// pass through the builders.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<ProcessSpec> {
        let (arrival_lo, arrival_hi) = ordered(self.arrival.0, self.arrival.1);
        let (burst_lo, burst_hi) = ordered(self.burst.0, self.burst.1);
        let (priority_lo, priority_hi) = ordered(self.priority.0, self.priority.1);
        (1..=self.count)
            .map(|n| ProcessSpec {
                id: n as ProcessId,
                arrival: rng.random_range(arrival_lo..=arrival_hi),
                burst: rng.random_range(burst_lo..=burst_hi),
                priority: rng.random_range(priority_lo..=priority_hi),
            })
            .collect()
    }
}

fn ordered<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
