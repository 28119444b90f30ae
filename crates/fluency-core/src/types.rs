//! Core domain types for fluency tracking
//!
//! Defines the records shared by every crate in the workspace:
//! - Fact categories and their operation/grouping labels
//! - Per-student progress records and the four fluency dimensions
//! - Developmental phases (counting → deriving → mastery)
//! - Students and practice games

use crate::error::LabelError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Student identifier
///
/// Ids are opaque strings; the seeded demo student is `student-1` and newly
/// created students receive a UUID.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(pub String);

impl StudentId {
    /// Wrap an existing id
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random id
    #[inline]
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Borrow as string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StudentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for StudentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for StudentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

/// Arithmetic operation a fact category practices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Addition facts
    Addition,
    /// Subtraction facts
    Subtraction,
    /// Multiplication facts
    Multiplication,
    /// Division facts
    Division,
}

impl Operation {
    /// Lowercase label used in storage and display
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Addition => "addition",
            Self::Subtraction => "subtraction",
            Self::Multiplication => "multiplication",
            Self::Division => "division",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "addition" => Ok(Self::Addition),
            "subtraction" => Ok(Self::Subtraction),
            "multiplication" => Ok(Self::Multiplication),
            "division" => Ok(Self::Division),
            other => Err(LabelError::unknown("operation", other)),
        }
    }
}

/// Whether facts are learned directly or reasoned from known facts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grouping {
    /// Learned directly
    Foundational,
    /// Solved by reasoning from foundational facts
    Derived,
}

impl Grouping {
    /// Lowercase label
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Foundational => "foundational",
            Self::Derived => "derived",
        }
    }
}

impl std::fmt::Display for Grouping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Grouping {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "foundational" => Ok(Self::Foundational),
            "derived" => Ok(Self::Derived),
            other => Err(LabelError::unknown("grouping", other)),
        }
    }
}

/// Developmental phase for a fact category
///
/// Ordered: `Counting < Deriving < Mastery`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Relies on counting strategies
    #[default]
    Counting,
    /// Uses reasoning strategies
    Deriving,
    /// Automatic recall
    Mastery,
}

impl Phase {
    /// All phases in ascending order
    pub const ALL: [Phase; 3] = [Phase::Counting, Phase::Deriving, Phase::Mastery];

    /// Numeric weight used when averaging phases
    #[inline]
    #[must_use]
    pub fn weight(&self) -> u32 {
        match self {
            Self::Counting => 0,
            Self::Deriving => 1,
            Self::Mastery => 2,
        }
    }

    /// Classify a mean phase weight into a bucket
    ///
    /// `< 0.5` counting, `< 1.5` deriving, otherwise mastery.
    #[must_use]
    pub fn from_mean_weight(mean: f64) -> Self {
        if mean < 0.5 {
            Self::Counting
        } else if mean < 1.5 {
            Self::Deriving
        } else {
            Self::Mastery
        }
    }

    /// Lowercase label
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Counting => "counting",
            Self::Deriving => "deriving",
            Self::Mastery => "mastery",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Phase {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "counting" => Ok(Self::Counting),
            "deriving" => Ok(Self::Deriving),
            "mastery" => Ok(Self::Mastery),
            other => Err(LabelError::unknown("phase", other)),
        }
    }
}

/// Catalog entry describing a group of related facts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactCategory {
    /// Stable id, e.g. `add-doubles`
    pub id: String,
    /// Operation practiced
    pub operation: Operation,
    /// Foundational or derived
    #[serde(rename = "category")]
    pub grouping: Grouping,
    /// Display name, e.g. `Doubles`
    pub name: String,
    /// Short description
    pub description: String,
    /// Example problems in display order
    pub examples: Vec<String>,
    /// Phase in which this category is usually taught
    pub phase: Phase,
}

impl FactCategory {
    /// Label combining name and operation, e.g. `Doubles (addition)`
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.operation)
    }
}

/// One of the four measured components of fact fluency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    /// Correct answers
    Accuracy,
    /// Speed without counting
    Efficiency,
    /// Switching strategies to fit the problem
    Flexibility,
    /// Choosing an appropriate strategy
    StrategyUse,
}

impl Dimension {
    /// Dimensions in reporting order
    pub const ALL: [Dimension; 4] = [
        Dimension::Accuracy,
        Dimension::Efficiency,
        Dimension::Flexibility,
        Dimension::StrategyUse,
    ];
}

/// Percentage scores (0-100) for the four fluency dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FluencyScores {
    /// Accuracy percentage
    pub accuracy: u8,
    /// Efficiency percentage
    pub efficiency: u8,
    /// Flexibility percentage
    pub flexibility: u8,
    /// Strategy-use percentage
    pub strategy_use: u8,
}

impl FluencyScores {
    /// Create scores from the four dimensions
    #[inline]
    #[must_use]
    pub fn new(accuracy: u8, efficiency: u8, flexibility: u8, strategy_use: u8) -> Self {
        Self {
            accuracy,
            efficiency,
            flexibility,
            strategy_use,
        }
    }

    /// Score for one dimension
    #[inline]
    #[must_use]
    pub fn get(&self, dimension: Dimension) -> u8 {
        match dimension {
            Dimension::Accuracy => self.accuracy,
            Dimension::Efficiency => self.efficiency,
            Dimension::Flexibility => self.flexibility,
            Dimension::StrategyUse => self.strategy_use,
        }
    }
}

/// Progress of one student in one fact category
///
/// At most one record exists per (student, category) pair; the store upserts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    /// Record id
    pub id: String,
    /// Owning student
    pub student_id: StudentId,
    /// Referenced catalog entry
    pub fact_category_id: String,
    /// Current phase in this category
    pub phase: Phase,
    /// Accuracy percentage
    pub accuracy: u8,
    /// Efficiency percentage
    pub efficiency: u8,
    /// Flexibility percentage
    pub flexibility: u8,
    /// Strategy-use percentage
    pub strategy_use: u8,
    /// Last time the student practiced this category
    #[serde(default)]
    pub last_practiced: Option<DateTime<Utc>>,
    /// Last time this record changed
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ProgressRecord {
    /// Create a record with all scores at zero in the counting phase
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        student_id: impl Into<StudentId>,
        fact_category_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            student_id: student_id.into(),
            fact_category_id: fact_category_id.into(),
            phase: Phase::Counting,
            accuracy: 0,
            efficiency: 0,
            flexibility: 0,
            strategy_use: 0,
            last_practiced: None,
            updated_at: None,
        }
    }

    /// With phase
    #[inline]
    #[must_use]
    pub fn with_phase(mut self, phase: Phase) -> Self {
        self.phase = phase;
        self
    }

    /// With all four scores
    #[inline]
    #[must_use]
    pub fn with_scores(mut self, scores: FluencyScores) -> Self {
        self.accuracy = scores.accuracy;
        self.efficiency = scores.efficiency;
        self.flexibility = scores.flexibility;
        self.strategy_use = scores.strategy_use;
        self
    }

    /// The record's four scores
    #[inline]
    #[must_use]
    pub fn scores(&self) -> FluencyScores {
        FluencyScores::new(
            self.accuracy,
            self.efficiency,
            self.flexibility,
            self.strategy_use,
        )
    }
}

/// A student enrolled in the application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// Student id
    pub id: StudentId,
    /// Full name
    pub name: String,
    /// Grade level
    pub grade: u8,
    /// Class section
    pub section: String,
    /// Initials shown on avatars
    pub initials: String,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Fields required to create a student
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStudent {
    /// Full name
    pub name: String,
    /// Grade level
    pub grade: u8,
    /// Class section
    pub section: String,
    /// Initials
    pub initials: String,
}

/// Operation label for games, which may mix operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameOperation {
    /// Addition only
    Addition,
    /// Subtraction only
    Subtraction,
    /// Multiplication only
    Multiplication,
    /// Division only
    Division,
    /// More than one operation
    Mixed,
}

/// Fact grouping a game targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameGrouping {
    /// Foundational facts
    Foundational,
    /// Derived-fact strategies
    Derived,
    /// Multi-operation strategic play
    Advanced,
}

impl FromStr for GameGrouping {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "foundational" => Ok(Self::Foundational),
            "derived" => Ok(Self::Derived),
            "advanced" => Ok(Self::Advanced),
            other => Err(LabelError::unknown("game grouping", other)),
        }
    }
}

/// Game difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Entry level
    Beginner,
    /// Middle level
    Intermediate,
    /// Hardest level
    Advanced,
}

/// A practice game students can be pointed at
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    /// Stable id, e.g. `racing-bears`
    pub id: String,
    /// Display name
    pub name: String,
    /// Short description
    pub description: String,
    /// Operation practiced
    pub operation: GameOperation,
    /// Targeted grouping
    #[serde(rename = "category")]
    pub grouping: GameGrouping,
    /// Fact labels the game drills
    pub target_facts: Vec<String>,
    /// Emoji shown on the game card
    pub emoji: String,
    /// Difficulty
    pub difficulty: Difficulty,
}
