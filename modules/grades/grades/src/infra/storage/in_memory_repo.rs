//! In-memory grade repository.

use std::collections::HashMap;

use grades_sdk::{Grade, GradeFields, GradeKey};
use parking_lot::Mutex;

use crate::domain::repo::GradeRepository;

/// Grades kept in a `HashMap` behind a single mutex.
///
/// Every operation holds the lock for its whole check-then-act sequence, so
/// concurrent inserts of the same key cannot both succeed. Scans clone the
/// matching grades while the lock is held and release it before returning.
#[derive(Default)]
pub struct InMemoryGradeRepository {
    grades: Mutex<HashMap<GradeKey, Grade>>,
}

impl InMemoryGradeRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl GradeRepository for InMemoryGradeRepository {
    fn insert(&self, key: GradeKey, grade: Grade) -> bool {
        use std::collections::hash_map::Entry;

        match self.grades.lock().entry(key) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(grade);
                true
            }
        }
    }

    fn update(&self, key: &GradeKey, fields: GradeFields) -> bool {
        let mut grades = self.grades.lock();
        let Some(grade) = grades.get_mut(key) else {
            return false;
        };
        grade.apply(fields);
        true
    }

    fn get(&self, key: &GradeKey) -> Option<Grade> {
        self.grades.lock().get(key).cloned()
    }

    fn scan_by_student(&self, student_id: &str) -> Vec<Grade> {
        self.grades
            .lock()
            .values()
            .filter(|g| g.student_id == student_id)
            .cloned()
            .collect()
    }

    fn len(&self) -> usize {
        self.grades.lock().len()
    }
}
