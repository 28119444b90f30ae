//! Fluency Core - shared domain model
//!
//! Types every crate in the workspace agrees on:
//! - Fact categories (operation, grouping, examples, phase)
//! - Per-student progress records across four fluency dimensions
//! - Students and practice games
//!
//! # Example
//!
//! ```rust
//! use fluency_core::{FluencyScores, Phase, ProgressRecord};
//!
//! let record = ProgressRecord::new("progress-1", "student-1", "add-doubles")
//!     .with_phase(Phase::Deriving)
//!     .with_scores(FluencyScores::new(82, 70, 75, 78));
//!
//! assert_eq!(record.accuracy, 82);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod error;
pub mod types;

// Re-exports for convenience
pub use error::LabelError;
pub use types::{
    Difficulty, Dimension, FactCategory, FluencyScores, Game, GameGrouping, GameOperation,
    Grouping, NewStudent, Operation, Phase, ProgressRecord, Student, StudentId,
};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with fluency records
    pub use crate::{
        Dimension, FactCategory, FluencyScores, Grouping, Operation, Phase, ProgressRecord,
        StudentId,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
