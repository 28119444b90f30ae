//! Student registry

use crate::error::StoreError;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use fluency_core::{NewStudent, Student, StudentId};

/// Thread-safe student registry
#[derive(Debug, Default)]
pub struct StudentRegistry {
    students: DashMap<StudentId, Student>,
}

impl StudentRegistry {
    /// Create empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the demo student
    #[must_use]
    pub fn with_defaults(now: DateTime<Utc>) -> Self {
        let registry = Self::new();
        let student = Student {
            id: StudentId::new(crate::DEMO_STUDENT_ID),
            name: "Alex Rodriguez".to_string(),
            grade: 6,
            section: "A".to_string(),
            initials: "AR".to_string(),
            created_at: Some(now),
        };
        registry.students.insert(student.id.clone(), student);
        registry
    }

    /// Student by id
    #[must_use]
    pub fn get(&self, id: &StudentId) -> Option<Student> {
        self.students.get(id).map(|s| s.value().clone())
    }

    /// Student by id, or an error naming the missing id
    ///
    /// # Errors
    /// Returns [`StoreError::StudentNotFound`] if no such student exists
    pub fn require(&self, id: &StudentId) -> Result<Student, StoreError> {
        self.get(id)
            .ok_or_else(|| StoreError::StudentNotFound(id.clone()))
    }

    /// Register a new student under a generated id
    pub fn create(&self, new_student: NewStudent, now: DateTime<Utc>) -> Student {
        let student = Student {
            id: StudentId::generate(),
            name: new_student.name,
            grade: new_student.grade,
            section: new_student.section,
            initials: new_student.initials,
            created_at: Some(now),
        };
        self.students.insert(student.id.clone(), student.clone());
        tracing::debug!(student = %student.id, "registered student");
        student
    }

    /// Number of students
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Check if registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}
