//! Failure paths of the record store
//!
//! This module defines [`StoreError`], covering every way a store operation
//! can fail.  None of these are fatal: the session reports them textually
//! and returns to the menu.

use std::fmt;

/// Errors returned by [`RecordStore`](super::store::RecordStore) operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Store already holds `capacity` records
    CapacityExceeded { capacity: usize },

    /// No record carries the requested roll number
    RollNotFound { roll: u32 },

    /// Removal index is outside the current record count
    PositionOutOfRange { index: usize, count: usize },

    /// Marks sequence does not match the session's subject count
    MarksShapeMismatch { expected: usize, got: usize },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::CapacityExceeded { capacity } => {
                write!(f, "Store is full (capacity {})", capacity)
            }
            StoreError::RollNotFound { roll } => {
                write!(f, "Student with roll {} not found", roll)
            }
            StoreError::PositionOutOfRange { index, count } => {
                write!(
                    f,
                    "Position {} out of range for {} record{}",
                    index + 1,
                    count,
                    if *count == 1 { "" } else { "s" }
                )
            }
            StoreError::MarksShapeMismatch { expected, got } => {
                write!(f, "Expected {} marks, got {}", expected, got)
            }
        }
    }
}

impl std::error::Error for StoreError {}
