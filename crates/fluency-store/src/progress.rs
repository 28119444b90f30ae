//! In-memory progress store
//!
//! Provides [`ProgressStore`] with upsert semantics: at most one record per
//! (student, fact category) pair.

use crate::error::StoreError;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use fluency_core::{Dimension, FluencyScores, Phase, ProgressRecord, StudentId};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Partial update for one (student, category) pair
///
/// Missing fields keep their stored value, or take the default (counting
/// phase, zero scores) when the pair has no record yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressUpdate {
    /// Student being updated
    pub student_id: StudentId,
    /// Category being updated
    pub fact_category_id: String,
    /// New phase
    #[serde(default)]
    pub phase: Option<Phase>,
    /// New accuracy
    #[serde(default)]
    pub accuracy: Option<u8>,
    /// New efficiency
    #[serde(default)]
    pub efficiency: Option<u8>,
    /// New flexibility
    #[serde(default)]
    pub flexibility: Option<u8>,
    /// New strategy use
    #[serde(default)]
    pub strategy_use: Option<u8>,
}

impl ProgressUpdate {
    /// Empty update for a pair
    #[must_use]
    pub fn new(student_id: impl Into<StudentId>, fact_category_id: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            fact_category_id: fact_category_id.into(),
            phase: None,
            accuracy: None,
            efficiency: None,
            flexibility: None,
            strategy_use: None,
        }
    }

    /// Set phase
    #[inline]
    #[must_use]
    pub fn with_phase(mut self, phase: Phase) -> Self {
        self.phase = Some(phase);
        self
    }

    /// Set accuracy only
    #[inline]
    #[must_use]
    pub fn with_accuracy(mut self, accuracy: u8) -> Self {
        self.accuracy = Some(accuracy);
        self
    }

    /// Set all four scores
    #[inline]
    #[must_use]
    pub fn with_scores(mut self, scores: FluencyScores) -> Self {
        self.accuracy = Some(scores.accuracy);
        self.efficiency = Some(scores.efficiency);
        self.flexibility = Some(scores.flexibility);
        self.strategy_use = Some(scores.strategy_use);
        self
    }

    fn score_fields(&self) -> [(Dimension, Option<u8>); 4] {
        [
            (Dimension::Accuracy, self.accuracy),
            (Dimension::Efficiency, self.efficiency),
            (Dimension::Flexibility, self.flexibility),
            (Dimension::StrategyUse, self.strategy_use),
        ]
    }

    fn touches_scores(&self) -> bool {
        self.score_fields().iter().any(|(_, v)| v.is_some())
    }

    fn validate(&self) -> Result<(), StoreError> {
        for (dimension, value) in self.score_fields() {
            if let Some(value) = value {
                if value > 100 {
                    return Err(StoreError::ScoreOutOfRange { dimension, value });
                }
            }
        }
        Ok(())
    }

    fn apply_to(&self, record: &mut ProgressRecord) {
        if let Some(phase) = self.phase {
            record.phase = phase;
        }
        if let Some(v) = self.accuracy {
            record.accuracy = v;
        }
        if let Some(v) = self.efficiency {
            record.efficiency = v;
        }
        if let Some(v) = self.flexibility {
            record.flexibility = v;
        }
        if let Some(v) = self.strategy_use {
            record.strategy_use = v;
        }
    }
}

type PairKey = (StudentId, String);

/// Thread-safe progress store
///
/// Records are kept by id with a secondary index on (student, category).
/// Insertion order is preserved so per-student listings are stable, which
/// matters because the learning path engine keeps the first few matches.
#[derive(Debug, Default)]
pub struct ProgressStore {
    /// Record id -> record
    records: DashMap<String, ProgressRecord>,

    /// (student, category) -> record id
    by_pair: DashMap<PairKey, String>,

    /// Record ids in insertion order; held across upserts
    order: Mutex<Vec<String>>,
}

impl ProgressStore {
    /// Create empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the demo student's four sample records
    #[must_use]
    pub fn with_demo_data(now: DateTime<Utc>) -> Self {
        let store = Self::new();
        let demo = [
            ("progress-1", "add-plus-minus-1-2", Phase::Mastery, FluencyScores::new(95, 90, 80, 85)),
            ("progress-2", "add-doubles", Phase::Mastery, FluencyScores::new(92, 88, 85, 90)),
            ("progress-3", "add-combinations-10", Phase::Deriving, FluencyScores::new(80, 70, 75, 78)),
            ("progress-4", "mult-2-5-10", Phase::Mastery, FluencyScores::new(88, 85, 80, 82)),
        ];
        for (id, category, phase, scores) in demo {
            let mut record = ProgressRecord::new(id, crate::DEMO_STUDENT_ID, category)
                .with_phase(phase)
                .with_scores(scores);
            record.last_practiced = Some(now);
            record.updated_at = Some(now);
            store.insert_record(record);
        }
        store
    }

    /// All records for a student, in insertion order
    #[must_use]
    pub fn progress_for(&self, student_id: &StudentId) -> Vec<ProgressRecord> {
        let order = self.order.lock();
        order
            .iter()
            .filter_map(|id| self.records.get(id).map(|r| r.value().clone()))
            .filter(|r| &r.student_id == student_id)
            .collect()
    }

    /// Record for one (student, category) pair
    #[must_use]
    pub fn get(&self, student_id: &StudentId, fact_category_id: &str) -> Option<ProgressRecord> {
        let key = (student_id.clone(), fact_category_id.to_string());
        let id = self.by_pair.get(&key)?;
        self.records.get(id.value()).map(|r| r.value().clone())
    }

    /// Insert or merge progress for a pair
    ///
    /// # Errors
    /// Returns [`StoreError::ScoreOutOfRange`] if any provided score is above
    /// 100; nothing is written in that case.
    pub fn upsert(
        &self,
        update: &ProgressUpdate,
        now: DateTime<Utc>,
    ) -> Result<ProgressRecord, StoreError> {
        update.validate()?;

        // Serializes upserts so a pair can never get two records.
        let mut order = self.order.lock();
        let key = (update.student_id.clone(), update.fact_category_id.clone());

        if let Some(id) = self.by_pair.get(&key).map(|id| id.value().clone()) {
            if let Some(mut entry) = self.records.get_mut(&id) {
                update.apply_to(&mut entry);
                entry.updated_at = Some(now);
                if update.touches_scores() {
                    entry.last_practiced = Some(now);
                }
                tracing::debug!(
                    student = %update.student_id,
                    category = %update.fact_category_id,
                    "updated progress record"
                );
                return Ok(entry.value().clone());
            }
        }

        let mut record = ProgressRecord::new(
            uuid::Uuid::new_v4().to_string(),
            update.student_id.clone(),
            update.fact_category_id.clone(),
        );
        update.apply_to(&mut record);
        record.last_practiced = Some(now);
        record.updated_at = Some(now);

        self.by_pair.insert(key, record.id.clone());
        self.records.insert(record.id.clone(), record.clone());
        order.push(record.id.clone());

        tracing::debug!(
            student = %update.student_id,
            category = %update.fact_category_id,
            "created progress record"
        );
        Ok(record)
    }

    /// Load a record as-is, replacing any existing record for its pair
    ///
    /// Used for seeding and for importing records that already carry ids.
    /// A record already stored under the same id is replaced too, whatever
    /// pair it belonged to.
    pub fn insert_record(&self, record: ProgressRecord) {
        let mut order = self.order.lock();
        if let Some((_, previous)) = self.records.remove(&record.id) {
            let old_key = (previous.student_id, previous.fact_category_id);
            self.by_pair.remove_if(&old_key, |_, id| id == &record.id);
            order.retain(|id| id != &record.id);
        }
        let key = (record.student_id.clone(), record.fact_category_id.clone());
        if let Some((_, old_id)) = self.by_pair.remove(&key) {
            self.records.remove(&old_id);
            order.retain(|id| id != &old_id);
        }
        self.by_pair.insert(key, record.id.clone());
        order.push(record.id.clone());
        self.records.insert(record.id.clone(), record);
    }

    /// Number of stored records
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if store is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn upsert_creates_with_defaults() {
        let store = ProgressStore::new();
        let update = ProgressUpdate::new("s1", "add-doubles").with_accuracy(70);

        let record = store.upsert(&update, t(1)).unwrap();
        assert_eq!(record.phase, Phase::Counting);
        assert_eq!(record.accuracy, 70);
        assert_eq!(record.efficiency, 0);
        assert_eq!(record.updated_at, Some(t(1)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn upsert_merges_existing_pair() {
        let store = ProgressStore::new();
        let student = StudentId::new("s1");
        store
            .upsert(
                &ProgressUpdate::new("s1", "add-doubles")
                    .with_scores(FluencyScores::new(50, 40, 30, 20)),
                t(1),
            )
            .unwrap();

        let merged = store
            .upsert(
                &ProgressUpdate::new("s1", "add-doubles")
                    .with_phase(Phase::Deriving)
                    .with_accuracy(75),
                t(2),
            )
            .unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(merged.accuracy, 75);
        assert_eq!(merged.efficiency, 40);
        assert_eq!(merged.phase, Phase::Deriving);
        assert_eq!(merged.updated_at, Some(t(2)));
        assert_eq!(store.get(&student, "add-doubles"), Some(merged));
    }

    #[test]
    fn phase_only_update_keeps_last_practiced() {
        let store = ProgressStore::new();
        store
            .upsert(&ProgressUpdate::new("s1", "mult-0-1").with_accuracy(10), t(1))
            .unwrap();
        let record = store
            .upsert(&ProgressUpdate::new("s1", "mult-0-1").with_phase(Phase::Mastery), t(3))
            .unwrap();
        assert_eq!(record.last_practiced, Some(t(1)));
        assert_eq!(record.updated_at, Some(t(3)));
    }

    #[test]
    fn out_of_range_score_is_rejected() {
        let store = ProgressStore::new();
        let update = ProgressUpdate::new("s1", "add-doubles").with_scores(FluencyScores::new(
            90, 101, 80, 80,
        ));

        let err = store.upsert(&update, t(1)).unwrap_err();
        assert_eq!(
            err,
            StoreError::ScoreOutOfRange {
                dimension: Dimension::Efficiency,
                value: 101
            }
        );
        assert!(store.is_empty());
    }

    #[test]
    fn progress_for_keeps_insertion_order_and_filters_student() {
        let store = ProgressStore::new();
        for category in ["c", "a", "b"] {
            store
                .upsert(&ProgressUpdate::new("s1", category).with_accuracy(50), t(1))
                .unwrap();
            store
                .upsert(&ProgressUpdate::new("s2", category).with_accuracy(60), t(1))
                .unwrap();
        }

        let categories: Vec<_> = store
            .progress_for(&StudentId::new("s1"))
            .into_iter()
            .map(|r| r.fact_category_id)
            .collect();
        assert_eq!(categories, vec!["c", "a", "b"]);
        assert!(store.progress_for(&StudentId::new("nobody")).is_empty());
    }

    #[test]
    fn insert_record_replaces_pair() {
        let store = ProgressStore::new();
        store.insert_record(ProgressRecord::new("old", "s1", "add-doubles"));
        store.insert_record(ProgressRecord::new("new", "s1", "add-doubles"));

        assert_eq!(store.len(), 1);
        let record = store.get(&StudentId::new("s1"), "add-doubles").unwrap();
        assert_eq!(record.id, "new");
    }

    #[test]
    fn insert_record_reusing_id_moves_it_to_new_pair() {
        let store = ProgressStore::new();
        store.insert_record(ProgressRecord::new("imported-1", "s1", "add-doubles"));
        store.insert_record(ProgressRecord::new("imported-1", "s1", "mult-squares"));

        let student = StudentId::new("s1");
        let listed: Vec<_> = store
            .progress_for(&student)
            .into_iter()
            .map(|r| r.fact_category_id)
            .collect();
        assert_eq!(store.len(), 1);
        assert_eq!(listed, vec!["mult-squares"]);
        assert!(store.get(&student, "add-doubles").is_none());
        assert_eq!(store.get(&student, "mult-squares").unwrap().id, "imported-1");
    }

    #[test]
    fn demo_data() {
        let store = ProgressStore::with_demo_data(t(1));
        let records = store.progress_for(&StudentId::new(crate::DEMO_STUDENT_ID));
        assert_eq!(records.len(), 4);
        assert_eq!(records[0].id, "progress-1");
        assert_eq!(records[2].accuracy, 80);
    }
}
