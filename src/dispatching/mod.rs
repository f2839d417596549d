//! Dispatching rules for non-preemptive scheduling.
//!
//! A rule ranks eligible processes; the scheduler dispatches the one with
//! the lowest rank. FCFS, SJF and Priority differ only in their rule, so
//! they share one scheduling skeleton.
//!
//! # Usage
//!
//! ```
//! use u_cpusim::dispatching::{rules, DispatchRule};
//! use u_cpusim::models::ProcessSpec;
//!
//! let p = ProcessSpec::new(1, 5).with_arrival(2);
//! assert_eq!(rules::Sjf.rank(&p), 5);
//! assert_eq!(rules::Fcfs.rank(&p), 2);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

pub mod rules;

use crate::models::ProcessSpec;
use std::fmt::Debug;

/// Rank returned by a dispatching rule.
///
/// Lower rank = dispatched first.
pub type Rank = i64;

/// A rule that orders eligible processes.
///
/// # Rank Convention
/// **Lower rank = higher priority.** Equal ranks are broken by the smaller
/// process identity; rules do not need to handle ties themselves.
pub trait DispatchRule: Send + Sync + Debug {
    /// Short rule name (e.g., "FCFS", "SJF").
    fn name(&self) -> &'static str;

    /// Ranks a process. Only called on processes that have arrived and
    /// are not yet complete.
    fn rank(&self, process: &ProcessSpec) -> Rank;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
