//! Error types for the in-memory stores

use fluency_core::{Dimension, StudentId};

/// Store operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A percentage score was above 100
    #[error("{dimension:?} score out of range: {value} (expected 0-100)")]
    ScoreOutOfRange {
        /// Offending dimension
        dimension: Dimension,
        /// Rejected value
        value: u8,
    },

    /// No student with this id
    #[error("student not found: {0}")]
    StudentNotFound(StudentId),
}
