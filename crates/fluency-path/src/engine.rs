//! Learning path engine
//!
//! Derives a [`LearningPath`] from a student's progress records and the fact
//! category catalog. Pure and deterministic given its inputs and clock: no
//! I/O, no shared state, inputs are never mutated.
//!
//! Records whose category id is missing from the catalog still count toward
//! the averages and the phase, but produce no category-specific output. When
//! a pass keeps only the first few matching records, an orphaned record still
//! takes its slot.

use crate::activities::{activities_for, self_assessment_activity, ActivityFocus};
use crate::clock::{Clock, SystemClock};
use crate::path::{
    LearningPath, Milestone, Priority, Recommendation, RecommendationCategory,
    MILESTONE_REQUIRED_ACCURACY,
};
use chrono::{DateTime, Duration, Utc};
use fluency_core::{Dimension, FactCategory, FluencyScores, Phase, ProgressRecord, StudentId};
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Thresholds
// ---------------------------------------------------------------------------

/// Category accuracy at or above which the category is a strength.
pub const STRENGTH_ACCURACY: u8 = 90;

/// Aggregate score at or above which a dimension is a strength.
pub const STRENGTH_DIMENSION: u8 = 85;

/// Category accuracy below which the category is a growth area.
pub const GROWTH_ACCURACY: u8 = 70;

/// Aggregate score below which a dimension is a growth area.
pub const GROWTH_DIMENSION: u8 = 75;

/// Category accuracy below which a category needs urgent attention.
pub const URGENT_ACCURACY: u8 = 60;

/// Inclusive lower and exclusive upper accuracy for advancement.
pub const ADVANCEMENT_ACCURACY: std::ops::Range<u8> = 70..85;

/// Strength and growth lists hold at most this many labels.
const MAX_LABELS: usize = 4;

const MAX_URGENT: usize = 2;
const MAX_ADVANCEMENT: usize = 2;
const MAX_RECOMMENDATIONS: usize = 4;
const MAX_MILESTONES: usize = 3;

/// Mixed performance: some record at or above this...
const ASSESSMENT_HIGH_ACCURACY: u8 = 80;
/// ...and some record below this.
const ASSESSMENT_LOW_ACCURACY: u8 = 70;

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Learning path engine
///
/// Holds only a clock. Safe to share across threads and call concurrently.
#[derive(Debug, Clone, Default)]
pub struct LearningPathEngine<C: Clock = SystemClock> {
    clock: C,
}

impl LearningPathEngine<SystemClock> {
    /// Engine reading the wall clock
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> LearningPathEngine<C> {
    /// Engine reading the given clock
    #[inline]
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Analyze a student's progress
    ///
    /// Never fails. An empty `progress` yields the counting phase, zero
    /// scores and empty lists.
    #[must_use]
    pub fn analyze(
        &self,
        student_id: impl Into<StudentId>,
        progress: &[ProgressRecord],
        categories: &[FactCategory],
    ) -> LearningPath {
        let student_id = student_id.into();
        let now = self.clock.now();
        let catalog = Catalog::new(categories);

        for orphan in progress.iter().filter(|p| catalog.resolve(p).is_none()) {
            tracing::debug!(
                student = %student_id,
                record = %orphan.id,
                category = %orphan.fact_category_id,
                "progress record references unknown category"
            );
        }

        let overall_progress = overall_progress(progress);
        let current_phase = current_phase(progress);
        let strengths = strengths(progress, &catalog, &overall_progress);
        let growth_areas = growth_areas(progress, &catalog, &overall_progress);
        let recommendations = recommendations(progress, &catalog);
        let milestones = milestones(progress, &catalog, now);

        tracing::debug!(
            student = %student_id,
            records = progress.len(),
            phase = %current_phase,
            recommendations = recommendations.len(),
            milestones = milestones.len(),
            "generated learning path"
        );

        LearningPath {
            student_id,
            current_phase,
            overall_progress,
            strengths,
            growth_areas,
            recommendations,
            milestones,
            generated_at: now,
        }
    }
}

/// Analyze with the wall clock
#[must_use]
pub fn analyze(
    student_id: impl Into<StudentId>,
    progress: &[ProgressRecord],
    categories: &[FactCategory],
) -> LearningPath {
    LearningPathEngine::new().analyze(student_id, progress, categories)
}

// ---------------------------------------------------------------------------
// Catalog lookup
// ---------------------------------------------------------------------------

/// Category lookup by id; the first entry wins on duplicate ids.
struct Catalog<'a> {
    by_id: HashMap<&'a str, &'a FactCategory>,
}

impl<'a> Catalog<'a> {
    fn new(categories: &'a [FactCategory]) -> Self {
        let mut by_id = HashMap::with_capacity(categories.len());
        for category in categories {
            by_id.entry(category.id.as_str()).or_insert(category);
        }
        Self { by_id }
    }

    fn resolve(&self, record: &ProgressRecord) -> Option<&'a FactCategory> {
        self.by_id.get(record.fact_category_id.as_str()).copied()
    }
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Rounded mean of each dimension across all records (zeros when empty)
#[must_use]
pub fn overall_progress(progress: &[ProgressRecord]) -> FluencyScores {
    FluencyScores {
        accuracy: rounded_mean(progress, |p| p.accuracy),
        efficiency: rounded_mean(progress, |p| p.efficiency),
        flexibility: rounded_mean(progress, |p| p.flexibility),
        strategy_use: rounded_mean(progress, |p| p.strategy_use),
    }
}

/// Mean rounded half away from zero, in integer arithmetic
fn rounded_mean(progress: &[ProgressRecord], field: impl Fn(&ProgressRecord) -> u8) -> u8 {
    if progress.is_empty() {
        return 0;
    }
    let n = progress.len() as u64;
    let sum: u64 = progress.iter().map(|p| u64::from(field(p))).sum();
    u8::try_from((2 * sum + n) / (2 * n)).unwrap_or(u8::MAX)
}

/// Phase bucket of the mean phase weight (counting when empty)
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn current_phase(progress: &[ProgressRecord]) -> Phase {
    if progress.is_empty() {
        return Phase::Counting;
    }
    let total: u32 = progress.iter().map(|p| p.phase.weight()).sum();
    Phase::from_mean_weight(f64::from(total) / progress.len() as f64)
}

// ---------------------------------------------------------------------------
// Strengths and growth areas
// ---------------------------------------------------------------------------

/// Label for a dimension whose aggregate is a strength
#[must_use]
pub fn strength_label(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Accuracy => "Strong accuracy",
        Dimension::Efficiency => "Good speed and efficiency",
        Dimension::Flexibility => "Flexible strategy use",
        Dimension::StrategyUse => "Strategic thinking",
    }
}

/// Label for a dimension whose aggregate needs work
#[must_use]
pub fn growth_label(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Accuracy => "Accuracy needs improvement",
        Dimension::Efficiency => "Speed and efficiency",
        Dimension::Flexibility => "Strategy flexibility",
        Dimension::StrategyUse => "Strategy development",
    }
}

fn strengths(
    progress: &[ProgressRecord],
    catalog: &Catalog<'_>,
    overall: &FluencyScores,
) -> Vec<String> {
    let categories = progress
        .iter()
        .filter(|p| p.accuracy >= STRENGTH_ACCURACY)
        .filter_map(|p| catalog.resolve(p))
        .map(FactCategory::label);

    let dimensions = Dimension::ALL
        .into_iter()
        .filter(|d| overall.get(*d) >= STRENGTH_DIMENSION)
        .map(|d| strength_label(d).to_string());

    categories.chain(dimensions).take(MAX_LABELS).collect()
}

fn growth_areas(
    progress: &[ProgressRecord],
    catalog: &Catalog<'_>,
    overall: &FluencyScores,
) -> Vec<String> {
    // Zero aggregates of a new student are not weaknesses.
    if progress.is_empty() {
        return Vec::new();
    }

    let categories = progress
        .iter()
        .filter(|p| p.accuracy < GROWTH_ACCURACY)
        .filter_map(|p| catalog.resolve(p))
        .map(FactCategory::label);

    let dimensions = Dimension::ALL
        .into_iter()
        .filter(|d| overall.get(*d) < GROWTH_DIMENSION)
        .map(|d| growth_label(d).to_string());

    categories.chain(dimensions).take(MAX_LABELS).collect()
}

// ---------------------------------------------------------------------------
// Recommendations
// ---------------------------------------------------------------------------

fn recommendations(progress: &[ProgressRecord], catalog: &Catalog<'_>) -> Vec<Recommendation> {
    let urgent = progress
        .iter()
        .filter(|p| p.accuracy < URGENT_ACCURACY)
        .take(MAX_URGENT)
        .filter_map(|p| catalog.resolve(p).map(|c| urgent_recommendation(p, c)));

    let advancing = progress
        .iter()
        .filter(|p| ADVANCEMENT_ACCURACY.contains(&p.accuracy))
        .take(MAX_ADVANCEMENT)
        .filter_map(|p| catalog.resolve(p).map(|c| advancement_recommendation(p, c)));

    let mut recommendations: Vec<Recommendation> = urgent.chain(advancing).collect();

    if has_mixed_performance(progress) {
        recommendations.push(self_assessment_recommendation());
    }

    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}

/// Some record is at least 80% accurate and some record is below 70%
#[must_use]
pub fn has_mixed_performance(progress: &[ProgressRecord]) -> bool {
    progress.iter().any(|p| p.accuracy >= ASSESSMENT_HIGH_ACCURACY)
        && progress.iter().any(|p| p.accuracy < ASSESSMENT_LOW_ACCURACY)
}

fn urgent_recommendation(record: &ProgressRecord, category: &FactCategory) -> Recommendation {
    Recommendation {
        id: format!("urgent-{}", record.fact_category_id),
        title: format!("Focus on {}", category.name),
        description: format!(
            "This foundational area needs immediate attention. Current accuracy: {}%",
            record.accuracy
        ),
        priority: Priority::High,
        category: category.grouping.into(),
        target_facts: category.examples.clone(),
        suggested_activities: activities_for(category, ActivityFocus::Intensive),
        estimated_time: 30,
        prerequisites: Vec::new(),
        next_steps: vec![format!("Achieve 75% accuracy in {}", category.name)],
    }
}

fn advancement_recommendation(record: &ProgressRecord, category: &FactCategory) -> Recommendation {
    Recommendation {
        id: format!("advance-{}", record.fact_category_id),
        title: format!("Build fluency in {}", category.name),
        description: format!(
            "You're making good progress! Let's build speed and flexibility. Current accuracy: {}%",
            record.accuracy
        ),
        priority: Priority::Medium,
        category: category.grouping.into(),
        target_facts: category.examples.clone(),
        suggested_activities: activities_for(category, ActivityFocus::Building),
        estimated_time: 20,
        prerequisites: vec![format!("70% accuracy in {}", category.name)],
        next_steps: vec![format!(
            "Achieve 90% accuracy and improve efficiency in {}",
            category.name
        )],
    }
}

fn self_assessment_recommendation() -> Recommendation {
    Recommendation {
        id: "comprehensive-assessment".to_string(),
        title: "Complete Self-Assessment".to_string(),
        description:
            "Reflect on your problem-solving strategies to identify your best approaches"
                .to_string(),
        priority: Priority::Medium,
        category: RecommendationCategory::Assessment,
        target_facts: Vec::new(),
        suggested_activities: vec![self_assessment_activity()],
        estimated_time: 15,
        prerequisites: Vec::new(),
        next_steps: vec!["Use assessment insights to focus practice".to_string()],
    }
}

// ---------------------------------------------------------------------------
// Milestones
// ---------------------------------------------------------------------------

/// Weeks until a milestone is due, by current accuracy
#[must_use]
pub fn milestone_weeks(accuracy: u8) -> i64 {
    if accuracy < 60 {
        4
    } else if accuracy < 80 {
        2
    } else {
        1
    }
}

fn milestones(
    progress: &[ProgressRecord],
    catalog: &Catalog<'_>,
    now: DateTime<Utc>,
) -> Vec<Milestone> {
    progress
        .iter()
        .filter(|p| p.accuracy < MILESTONE_REQUIRED_ACCURACY)
        .take(MAX_MILESTONES)
        .filter_map(|p| catalog.resolve(p).map(|c| milestone(p, c, now)))
        .collect()
}

fn milestone(record: &ProgressRecord, category: &FactCategory, now: DateTime<Utc>) -> Milestone {
    Milestone {
        id: format!("milestone-{}", record.fact_category_id),
        title: format!("Master {}", category.name),
        description: format!(
            "Achieve {MILESTONE_REQUIRED_ACCURACY}% accuracy in {} facts",
            category.name
        ),
        target_date: now + Duration::weeks(milestone_weeks(record.accuracy)),
        category: category.name.clone(),
        required_accuracy: MILESTONE_REQUIRED_ACCURACY,
        // Always false here: only records below the bar get a milestone.
        is_completed: record.accuracy >= MILESTONE_REQUIRED_ACCURACY,
    }
}
