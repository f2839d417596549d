//! Input validation for simulation inputs.
//!
//! The algorithms assume well-formed input and never call into this
//! module. An input-collection layer runs these checks first and rejects
//! what fails. Detects:
//! - Empty or duplicate-identity workloads
//! - Negative arrivals, non-positive bursts, non-positive quanta
//! - Snapshot dimension mismatches and negative quantities
//! - Allocations exceeding declared maxima or resource totals

use crate::banker::ResourceSnapshot;
use crate::models::ProcessSpec;
use std::collections::HashSet;
use std::fmt;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The workload has no processes.
    EmptyWorkload,
    /// Two processes share the same identity.
    DuplicateId,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process has zero or negative burst.
    NonPositiveBurst,
    /// Round-Robin quantum below 1.
    NonPositiveQuantum,
    /// Matrix rows or vectors have inconsistent lengths.
    DimensionMismatch,
    /// A total, maximum or allocation is negative.
    NegativeQuantity,
    /// `allocation[i][j] > max[i][j]`.
    AllocationExceedsMax,
    /// `Σ allocation[i][j] > total[j]`.
    OverAllocated,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a scheduling workload.
///
/// Checks:
/// 1. At least one process
/// 2. No duplicate identities
/// 3. Arrival >= 0 and burst > 0 for every process
/// 4. Quantum >= 1 (when given)
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_workload(processes: &[ProcessSpec], quantum: Option<i64>) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyWorkload,
            "Workload has no processes",
        ));
    }

    let mut ids = HashSet::new();
    for p in processes {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: P{}", p.id),
            ));
        }
        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("P{} has negative arrival time {}", p.id, p.arrival),
            ));
        }
        if p.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("P{} has non-positive burst time {}", p.id, p.burst),
            ));
        }
    }

    if let Some(q) = quantum {
        if q < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveQuantum,
                format!("Time quantum must be at least 1, got {q}"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a Banker's snapshot.
///
/// Checks:
/// 1. `max` and `allocation` have the same number of rows
/// 2. Every row has one entry per resource type
/// 3. No negative totals, maxima or allocations
/// 4. `allocation <= max` element-wise
/// 5. Column sums of `allocation` do not exceed `total`
///
/// Element checks run only when dimensions are consistent.
pub fn validate_snapshot(snapshot: &ResourceSnapshot) -> ValidationResult {
    let mut errors = Vec::new();
    let m = snapshot.resource_count();

    if snapshot.max.len() != snapshot.allocation.len() {
        errors.push(ValidationError::new(
            ValidationErrorKind::DimensionMismatch,
            format!(
                "Max matrix has {} rows but allocation matrix has {}",
                snapshot.max.len(),
                snapshot.allocation.len()
            ),
        ));
    }

    for (name, matrix) in [("Max", &snapshot.max), ("Allocation", &snapshot.allocation)] {
        for (i, row) in matrix.iter().enumerate() {
            if row.len() != m {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DimensionMismatch,
                    format!("{name} row for P{i} has {} values, expected {m}", row.len()),
                ));
            }
            if row.iter().any(|&x| x < 0) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NegativeQuantity,
                    format!("{name} row for P{i} contains a negative value"),
                ));
            }
        }
    }

    for (j, &t) in snapshot.total.iter().enumerate() {
        if t < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeQuantity,
                format!("Total instances of R{} is negative", j + 1),
            ));
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    for (i, (max, alloc)) in snapshot.max.iter().zip(&snapshot.allocation).enumerate() {
        for (j, (&mx, &al)) in max.iter().zip(alloc).enumerate() {
            if al > mx {
                errors.push(ValidationError::new(
                    ValidationErrorKind::AllocationExceedsMax,
                    format!("P{i} holds {al} of R{} but declared max {mx}", j + 1),
                ));
            }
        }
    }

    for (j, &available) in snapshot.available().iter().enumerate() {
        if available < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::OverAllocated,
                format!(
                    "R{} is over-allocated by {} instances",
                    j + 1,
                    -available
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
