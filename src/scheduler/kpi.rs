//! Timing metrics (KPIs) and cross-discipline comparison.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Waiting (WT) | turnaround - burst |
//! | Turnaround (TAT) | completion - arrival |
//! | Response (RT) | first dispatch - arrival |
//!
//! A `TimingSummary` holds the arithmetic mean of each metric across all
//! processes of one run. A `Comparison` lines up summaries of several runs
//! and marks the best (smallest) value per metric.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use crate::models::ProcessResult;

/// Values within this distance of the best are reported as best too.
const BEST_EPSILON: f64 = 1e-6;

/// A per-process timing metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    /// Waiting time.
    Waiting,
    /// Turnaround time.
    Turnaround,
    /// Response time.
    Response,
}

impl Metric {
    /// All metrics in display order.
    pub const ALL: [Metric; 3] = [Metric::Waiting, Metric::Turnaround, Metric::Response];

    /// Short name ("WT", "TAT", "RT").
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Metric::Waiting => "WT",
            Metric::Turnaround => "TAT",
            Metric::Response => "RT",
        }
    }
}

/// Mean waiting, turnaround and response time of one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TimingSummary {
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Mean response time.
    pub avg_response: f64,
}

impl TimingSummary {
    /// Computes means over a completed run.
    ///
    /// Returns all zeros for an empty slice.
    pub fn calculate(results: &[ProcessResult]) -> Self {
        if results.is_empty() {
            return Self::default();
        }

        let mut total_waiting: i64 = 0;
        let mut total_turnaround: i64 = 0;
        let mut total_response: i64 = 0;
        for r in results {
            total_waiting += r.waiting;
            total_turnaround += r.turnaround;
            total_response += r.response;
        }

        let n = results.len() as f64;
        Self {
            avg_waiting: total_waiting as f64 / n,
            avg_turnaround: total_turnaround as f64 / n,
            avg_response: total_response as f64 / n,
        }
    }

    /// Value of one metric.
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Waiting => self.avg_waiting,
            Metric::Turnaround => self.avg_turnaround,
            Metric::Response => self.avg_response,
        }
    }

    /// Element-wise minimum of two summaries.
    pub fn min(&self, other: &TimingSummary) -> TimingSummary {
        TimingSummary {
            avg_waiting: self.avg_waiting.min(other.avg_waiting),
            avg_turnaround: self.avg_turnaround.min(other.avg_turnaround),
            avg_response: self.avg_response.min(other.avg_response),
        }
    }
}

/// One row of a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonEntry {
    /// Algorithm name.
    pub algorithm: String,
    /// Summary of that algorithm's run.
    pub summary: TimingSummary,
}

/// Side-by-side summaries of several runs over the same workload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Rows in insertion order.
    pub entries: Vec<ComparisonEntry>,
}

impl Comparison {
    /// Creates an empty comparison.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a row.
    pub fn add(&mut self, algorithm: impl Into<String>, summary: TimingSummary) {
        self.entries.push(ComparisonEntry {
            algorithm: algorithm.into(),
            summary,
        });
    }

    /// Finds the summary for an algorithm.
    pub fn get(&self, algorithm: &str) -> Option<&TimingSummary> {
        self.entries
            .iter()
            .find(|e| e.algorithm == algorithm)
            .map(|e| &e.summary)
    }

    /// Element-wise minimum across all rows. `None` if empty.
    pub fn best(&self) -> Option<TimingSummary> {
        self.entries
            .iter()
            .map(|e| e.summary)
            .reduce(|a, b| a.min(&b))
    }

    /// Whether a row holds the best value for a metric (ties included).
    pub fn is_best(&self, algorithm: &str, metric: Metric) -> bool {
        match (self.get(algorithm), self.best()) {
            (Some(s), Some(best)) => (s.get(metric) - best.get(metric)).abs() < BEST_EPSILON,
            _ => false,
        }
    }

    /// All algorithms holding the best value for a metric.
    pub fn winners(&self, metric: Metric) -> Vec<&str> {
        let Some(best) = self.best() else {
            return Vec::new();
        };
        let target = best.get(metric);
        self.entries
            .iter()
            .filter(|e| (e.summary.get(metric) - target).abs() < BEST_EPSILON)
            .map(|e| e.algorithm.as_str())
            .collect()
    }
}
