//! CPU scheduling and deadlock-avoidance simulation.
//!
//! Simulates classical operating-systems algorithms over a static workload.
//! There is no wall clock: time is an integer tick counter, and every
//! operation is a deterministic, single-threaded computation over in-memory
//! data.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ProcessSpec`, `ProcessResult`,
//!   `ExecutionInterval`, `Timeline`, `Workload`
//! - **`dispatching`**: Ranking rules for non-preemptive dispatch (FCFS, SJF, Priority)
//! - **`scheduler`**: The four scheduling disciplines, timing metrics and comparison
//! - **`banker`**: Banker's algorithm safety check over a resource snapshot
//! - **`validation`**: Input integrity checks for an input-collection layer
//! - **`workload`**: Seeded random workload generation
//!
//! # Architecture
//!
//! The scheduling engine and the safety checker share no state. Input
//! collection and rendering (tables, Gantt charts) live outside this crate
//! and consume the plain data structures it returns.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5 & 8
//! - Dijkstra (1965), "Cooperating Sequential Processes"

pub mod banker;
pub mod dispatching;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;
