//! Repository trait for grade storage.

use grades_sdk::{Grade, GradeFields, GradeKey};

/// Storage interface used by the domain service.
///
/// Every method is atomic with respect to the others: an implementation must
/// run each check-then-act sequence (`insert`, `update`) and each scan inside
/// a single critical section.
pub trait GradeRepository: Send + Sync {
    /// Stores `grade` under `key` unless the key is already taken.
    ///
    /// Returns `false` and leaves the store untouched if the key exists.
    fn insert(&self, key: GradeKey, grade: Grade) -> bool;

    /// Overwrites year, term and score of the grade under `key`.
    ///
    /// Returns `false` if the key is absent. Student id and course code of
    /// the stored grade are never changed.
    fn update(&self, key: &GradeKey, fields: GradeFields) -> bool;

    /// Returns a copy of the grade under `key`, if any.
    fn get(&self, key: &GradeKey) -> Option<Grade>;

    /// Snapshot of every grade whose student id equals `student_id`.
    ///
    /// Order is unspecified. The returned vector is detached from the store;
    /// later writes do not affect it.
    fn scan_by_student(&self, student_id: &str) -> Vec<Grade>;

    /// Number of stored grades.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
