//! Testing utilities for the fluency workspace
//!
//! Shared fixtures for progress records and fact categories.

#![allow(missing_docs)]

use chrono::{DateTime, TimeZone, Utc};
use fluency_core::{FactCategory, FluencyScores, Grouping, Operation, Phase, ProgressRecord};
use fluency_store::CategoryCatalog;

pub const TEST_STUDENT: &str = "student-1";

/// Fixed instant used wherever a test needs "now"
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 9, 2, 8, 30, 0).unwrap()
}

/// The seeded catalog as a plain vector
pub fn seeded_categories() -> Vec<FactCategory> {
    CategoryCatalog::seeded().all().to_vec()
}

pub fn create_category(id: &str, name: &str, operation: Operation) -> FactCategory {
    FactCategory {
        id: id.to_string(),
        operation,
        grouping: Grouping::Foundational,
        name: name.to_string(),
        description: format!("{name} facts"),
        examples: vec![format!("{name} example 1"), format!("{name} example 2")],
        phase: Phase::Counting,
    }
}

/// Record with every dimension equal to `accuracy`, counting phase
pub fn create_record(category_id: &str, accuracy: u8) -> ProgressRecord {
    create_record_with(
        category_id,
        FluencyScores::new(accuracy, accuracy, accuracy, accuracy),
        Phase::Counting,
    )
}

pub fn create_record_with(category_id: &str, scores: FluencyScores, phase: Phase) -> ProgressRecord {
    ProgressRecord::new(format!("progress-{category_id}"), TEST_STUDENT, category_id)
        .with_phase(phase)
        .with_scores(scores)
}

/// `count` categories named `cat-0`, `cat-1`, ... with matching records at `accuracy`
pub fn create_uniform(count: usize, accuracy: u8) -> (Vec<ProgressRecord>, Vec<FactCategory>) {
    let categories: Vec<_> = (0..count)
        .map(|i| create_category(&format!("cat-{i}"), &format!("Category {i}"), Operation::Addition))
        .collect();
    let records = categories
        .iter()
        .map(|c| create_record(&c.id, accuracy))
        .collect();
    (records, categories)
}
