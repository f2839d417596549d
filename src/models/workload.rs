//! Workload (simulation input) model.

use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

use super::ProcessSpec;
use crate::scheduler::{compare_all, Comparison};

const DEFAULT_QUANTUM: NonZeroU32 = match NonZeroU32::new(2) {
    Some(q) => q,
    None => unreachable!(),
};

/// A set of processes plus the Round-Robin quantum used when comparing
/// disciplines.
///
/// Deserializes from any serde format, e.g.
/// `{"processes": [{"id": 1, "arrival": 0, "burst": 5, "priority": 1}], "quantum": 2}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workload {
    /// Processes in input order.
    pub processes: Vec<ProcessSpec>,
    /// Round-Robin time slice.
    #[serde(default = "default_quantum")]
    pub quantum: NonZeroU32,
}

fn default_quantum() -> NonZeroU32 {
    DEFAULT_QUANTUM
}

impl Workload {
    /// Creates an empty workload with quantum 2.
    pub fn new() -> Self {
        Self {
            processes: Vec::new(),
            quantum: DEFAULT_QUANTUM,
        }
    }

    /// Adds a process.
    pub fn with_process(mut self, process: ProcessSpec) -> Self {
        self.processes.push(process);
        self
    }

    /// Sets the Round-Robin quantum.
    pub fn with_quantum(mut self, quantum: NonZeroU32) -> Self {
        self.quantum = quantum;
        self
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the workload has no processes.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Runs all four disciplines over this workload.
    pub fn compare(&self) -> Comparison {
        compare_all(&self.processes, self.quantum)
    }
}

impl Default for Workload {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workload_builder() {
        let w = Workload::new()
            .with_process(ProcessSpec::new(1, 5))
            .with_process(ProcessSpec::new(2, 3).with_arrival(1))
            .with_quantum(NonZeroU32::new(4).unwrap());

        assert_eq!(w.len(), 2);
        assert!(!w.is_empty());
        assert_eq!(w.quantum.get(), 4);
    }

    #[test]
    fn test_workload_from_json() {
        let json = r#"{
            "processes": [
                {"id": 1, "arrival": 0, "burst": 5, "priority": 2},
                {"id": 2, "arrival": 1, "burst": 3, "priority": 1}
            ],
            "quantum": 3
        }"#;
        let w: Workload = serde_json::from_str(json).unwrap();
        assert_eq!(w.len(), 2);
        assert_eq!(w.quantum.get(), 3);
        assert_eq!(w.processes[1].arrival, 1);
    }

    #[test]
    fn test_workload_default_quantum() {
        let json = r#"{"processes": [{"id": 1, "arrival": 0, "burst": 1, "priority": 0}]}"#;
        let w: Workload = serde_json::from_str(json).unwrap();
        assert_eq!(w.quantum.get(), 2);
    }

    #[test]
    fn test_workload_rejects_zero_quantum() {
        let json = r#"{"processes": [], "quantum": 0}"#;
        assert!(serde_json::from_str::<Workload>(json).is_err());
    }

    #[test]
    fn test_workload_compare() {
        let w = Workload::new()
            .with_process(ProcessSpec::new(1, 5))
            .with_process(ProcessSpec::new(2, 3).with_arrival(1));
        let cmp = w.compare();
        assert_eq!(cmp.entries.len(), 4);
    }
}
