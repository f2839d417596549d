//! Banker's algorithm safety check.
//!
//! Evaluates whether a static resource-allocation snapshot is safe, i.e.
//! whether some completion order lets every process obtain its remaining
//! need from what is available plus what earlier finishers release.
//!
//! # Algorithm
//!
//! 1. `available[j] = total[j] - Σ alloc[i][j]`, `need[i][j] = max[i][j] - alloc[i][j]`.
//! 2. `work := available`, nothing finished.
//! 3. Sweep processes in index order; any unfinished process whose need
//!    fits in `work` finishes: its allocation joins `work` and its index
//!    is appended to the sequence.
//! 4. Repeat sweeps until one finishes nobody.
//! 5. Safe iff every process finished.
//!
//! Releasing resources only ever grows `work`, so the greedy closure finds
//! a safe sequence whenever one exists. Index order only decides which
//! sequence is reported.
//!
//! # Complexity
//! At most n sweeps of O(n·m) each: O(n²·m).
//!
//! # References
//! - Dijkstra (1965), "Cooperating Sequential Processes"
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 8.6.3

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Index of a process row in a snapshot (0-based).
pub type ProcessIndex = usize;

/// A static resource-allocation state.
///
/// Rows of `max` and `allocation` are processes; columns are resource
/// types. The check assumes consistent input (`allocation <= max`,
/// matching dimensions); see `validation::validate_snapshot`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceSnapshot {
    /// Total instances per resource type.
    pub total: Vec<i64>,
    /// Declared maximum demand per process.
    pub max: Vec<Vec<i64>>,
    /// Instances currently held per process.
    pub allocation: Vec<Vec<i64>>,
}

/// Outcome of a safety check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyReport {
    /// Derived `total - Σ allocation`.
    pub available: Vec<i64>,
    /// Derived `max - allocation`.
    pub need: Vec<Vec<i64>>,
    /// Whether a safe completion order exists.
    pub is_safe: bool,
    /// Completion order when safe. When unsafe this is only the prefix
    /// found before the search stalled and carries no meaning.
    pub sequence: Vec<ProcessIndex>,
}

impl ResourceSnapshot {
    /// Creates a snapshot with the given totals and no processes.
    pub fn new(total: Vec<i64>) -> Self {
        Self {
            total,
            max: Vec::new(),
            allocation: Vec::new(),
        }
    }

    /// Adds a process row.
    pub fn with_process(mut self, max: Vec<i64>, allocation: Vec<i64>) -> Self {
        self.max.push(max);
        self.allocation.push(allocation);
        self
    }

    /// Number of resource types.
    pub fn resource_count(&self) -> usize {
        self.total.len()
    }

    /// Number of processes.
    pub fn process_count(&self) -> usize {
        self.allocation.len()
    }

    /// `total[j] - Σ_i allocation[i][j]`.
    pub fn available(&self) -> Vec<i64> {
        self.total
            .iter()
            .enumerate()
            .map(|(j, &total)| {
                let held: i64 = self
                    .allocation
                    .iter()
                    .map(|row| row.get(j).copied().unwrap_or(0))
                    .sum();
                total - held
            })
            .collect()
    }

    /// `max[i][j] - allocation[i][j]`.
    pub fn need(&self) -> Vec<Vec<i64>> {
        self.max
            .iter()
            .zip(&self.allocation)
            .map(|(max, alloc)| {
                (0..self.resource_count())
                    .map(|j| max.get(j).copied().unwrap_or(0) - alloc.get(j).copied().unwrap_or(0))
                    .collect()
            })
            .collect()
    }

    /// Runs the safety algorithm.
    pub fn check_safety(&self) -> SafetyReport {
        let available = self.available();
        let need = self.need();
        let n = need.len();

        let mut work = available.clone();
        let mut finish = vec![false; n];
        let mut sequence = Vec::with_capacity(n);

        loop {
            let mut progressed = false;
            for i in 0..n {
                if finish[i] || !fits(&need[i], &work) {
                    continue;
                }
                for (w, held) in work.iter_mut().zip(&self.allocation[i]) {
                    *w += held;
                }
                finish[i] = true;
                sequence.push(i);
                progressed = true;
                trace!(process = i, work = ?work, "process can finish");
            }
            if !progressed {
                break;
            }
        }

        let is_safe = finish.iter().all(|&f| f);
        debug!(
            processes = n,
            resources = self.resource_count(),
            is_safe,
            finished = sequence.len(),
            "safety check finished"
        );

        SafetyReport {
            available,
            need,
            is_safe,
            sequence,
        }
    }
}

/// Whether every component of `need` fits in `work`.
fn fits(need: &[i64], work: &[i64]) -> bool {
    need.iter().zip(work).all(|(n, w)| n <= w)
}

impl SafetyReport {
    /// The safe sequence as `<P1 -> P0 -> P2>`, or `None` when unsafe.
    pub fn sequence_label(&self) -> Option<String> {
        if !self.is_safe {
            return None;
        }
        let steps: Vec<String> = self.sequence.iter().map(|i| format!("P{i}")).collect();
        Some(format!("<{}>", steps.join(" -> ")))
    }

    /// Processes that could not finish, in index order.
    pub fn blocked(&self) -> Vec<ProcessIndex> {
        (0..self.need.len())
            .filter(|i| !self.sequence.contains(i))
            .collect()
    }
}
