//! Fluency Learning Path Engine
//!
//! Turns a student's per-category progress into a learning path.
//!
//! # Core Concepts
//!
//! - [`LearningPathEngine`]: the analysis entry point
//! - [`LearningPath`]: phase, aggregate scores, strengths, growth areas,
//!   recommendations and milestones
//! - [`Clock`]: source of "now" for timestamps and milestone dates
//! - [`game_for_category`]: category → game lookup used by activity templates
//!
//! # Example
//!
//! ```rust
//! use fluency_core::{FactCategory, FluencyScores, Grouping, Operation, Phase, ProgressRecord};
//! use fluency_path::LearningPathEngine;
//!
//! let categories = vec![FactCategory {
//!     id: "add-doubles".to_string(),
//!     operation: Operation::Addition,
//!     grouping: Grouping::Foundational,
//!     name: "Doubles".to_string(),
//!     description: "Adding the same number to itself".to_string(),
//!     examples: vec!["2+2".to_string(), "6+6".to_string()],
//!     phase: Phase::Counting,
//! }];
//! let progress = vec![ProgressRecord::new("p1", "student-1", "add-doubles")
//!     .with_scores(FluencyScores::new(45, 40, 50, 35))];
//!
//! let path = LearningPathEngine::new().analyze("student-1", &progress, &categories);
//! assert_eq!(path.recommendations[0].title, "Focus on Doubles");
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod activities;
mod clock;
mod engine;
mod games;
mod path;

// Re-exports
pub use activities::{activities_for, self_assessment_activity, ActivityFocus};
pub use clock::{Clock, FixedClock, SystemClock};
pub use engine::{
    analyze, current_phase, growth_label, has_mixed_performance, milestone_weeks,
    overall_progress, strength_label, LearningPathEngine, ADVANCEMENT_ACCURACY, GROWTH_ACCURACY,
    GROWTH_DIMENSION, STRENGTH_ACCURACY, STRENGTH_DIMENSION, URGENT_ACCURACY,
};
pub use games::{game_for_category, CATEGORY_GAMES, DEFAULT_GAME};
pub use path::{
    Activity, ActivityKind, LearningPath, Milestone, Priority, Recommendation,
    RecommendationCategory, MILESTONE_REQUIRED_ACCURACY,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
