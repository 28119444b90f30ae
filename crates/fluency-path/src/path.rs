//! Learning path output types
//!
//! A [`LearningPath`] is recomputed on demand and never persisted.

use chrono::{DateTime, Utc};
use fluency_core::{FluencyScores, Grouping, Phase, StudentId};
use serde::{Deserialize, Serialize};

/// Required accuracy for every milestone
pub const MILESTONE_REQUIRED_ACCURACY: u8 = 90;

/// Result of analyzing one student's progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPath {
    /// Student the path was generated for
    pub student_id: StudentId,
    /// Phase derived from the mean phase weight
    pub current_phase: Phase,
    /// Rounded mean of each fluency dimension
    pub overall_progress: FluencyScores,
    /// At most four strength labels
    pub strengths: Vec<String>,
    /// At most four growth-area labels
    pub growth_areas: Vec<String>,
    /// At most four recommendations, urgent first
    pub recommendations: Vec<Recommendation>,
    /// At most three milestones
    #[serde(rename = "nextMilestones")]
    pub milestones: Vec<Milestone>,
    /// When the path was generated
    pub generated_at: DateTime<Utc>,
}

impl LearningPath {
    /// Total estimated minutes across all recommendations
    #[must_use]
    pub fn total_estimated_minutes(&self) -> u32 {
        self.recommendations.iter().map(|r| r.estimated_time).sum()
    }
}

/// Recommendation priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Needs immediate attention
    High,
    /// Next step
    Medium,
    /// Optional
    Low,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        })
    }
}

/// What a recommendation is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationCategory {
    /// Foundational fact category
    Foundational,
    /// Derived fact category
    Derived,
    /// Self-assessment
    Assessment,
    /// Review of earlier material
    Review,
}

impl From<Grouping> for RecommendationCategory {
    fn from(grouping: Grouping) -> Self {
        match grouping {
            Grouping::Foundational => Self::Foundational,
            Grouping::Derived => Self::Derived,
        }
    }
}

/// Suggested next piece of work
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Stable id, e.g. `urgent-add-doubles`
    pub id: String,
    /// Title
    pub title: String,
    /// Description
    pub description: String,
    /// Priority
    pub priority: Priority,
    /// Classification
    pub category: RecommendationCategory,
    /// Facts to practice
    pub target_facts: Vec<String>,
    /// Activities in suggested order
    pub suggested_activities: Vec<Activity>,
    /// Estimated minutes
    pub estimated_time: u32,
    /// Conditions that should hold first
    pub prerequisites: Vec<String>,
    /// What to aim for afterwards
    pub next_steps: Vec<String>,
}

/// Kind of activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityKind {
    /// Play a game
    Game,
    /// Practice problems
    Practice,
    /// Self-assessment
    Assessment,
    /// Strategy lesson
    StrategyInstruction,
}

/// A single activity inside a recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Kind of activity
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    /// Name
    pub name: String,
    /// Description
    pub description: String,
    /// Game to launch for game activities
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_id: Option<String>,
    /// Duration in minutes
    pub duration: u32,
}

/// Time-bound mastery goal for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    /// Stable id, e.g. `milestone-add-doubles`
    pub id: String,
    /// Title
    pub title: String,
    /// Description
    pub description: String,
    /// Due date
    pub target_date: DateTime<Utc>,
    /// Category display name
    pub category: String,
    /// Accuracy needed to complete
    pub required_accuracy: u8,
    /// Whether the accuracy the milestone was evaluated against met the bar
    pub is_completed: bool,
}

impl Milestone {
    /// Re-evaluate completion against a newer accuracy reading
    ///
    /// Milestones are only generated for categories below the bar, so a fresh
    /// milestone is never completed; this lets a caller that keeps milestones
    /// check them against later progress.
    #[must_use]
    pub fn evaluate(&self, accuracy: u8) -> Self {
        Self {
            is_completed: accuracy >= self.required_accuracy,
            ..self.clone()
        }
    }
}
