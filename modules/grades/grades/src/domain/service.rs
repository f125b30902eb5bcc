//! Domain service for grades.

use std::sync::Arc;

use grades_sdk::{Grade, GradeFields, GradeKey};
use tracing::debug;

use super::error::DomainError;
use super::repo::GradeRepository;

/// Grade operations over a shared repository.
///
/// The service holds no state of its own; concurrent callers are serialized
/// by the repository.
pub struct GradesService {
    repo: Arc<dyn GradeRepository>,
}

impl GradesService {
    #[must_use]
    pub fn new(repo: Arc<dyn GradeRepository>) -> Self {
        Self { repo }
    }

    /// Stores a new grade.
    ///
    /// # Errors
    ///
    /// `AlreadyExists` if the student already has a grade for the course.
    pub fn add_grade(&self, grade: Grade) -> Result<(), DomainError> {
        let key = grade.key();
        if self.repo.insert(key.clone(), grade) {
            debug!(key = %key, "grade stored");
            Ok(())
        } else {
            debug!(key = %key, "duplicate grade rejected");
            Err(DomainError::AlreadyExists(key))
        }
    }

    /// Overwrites year, term and score of an existing grade.
    ///
    /// # Errors
    ///
    /// `GradeNotFound` if no grade exists for the student/course pair.
    pub fn change_grade(
        &self,
        student_id: &str,
        course_code: &str,
        fields: GradeFields,
    ) -> Result<(), DomainError> {
        let key = GradeKey::new(student_id, course_code);
        if self.repo.update(&key, fields) {
            debug!(key = %key, score = fields.score, "grade changed");
            Ok(())
        } else {
            Err(DomainError::GradeNotFound(key))
        }
    }

    /// Returns the grade of a student in a course.
    ///
    /// # Errors
    ///
    /// `GradeNotFound` if no grade exists for the student/course pair.
    pub fn query_grade(&self, student_id: &str, course_code: &str) -> Result<Grade, DomainError> {
        let key = GradeKey::new(student_id, course_code);
        self.repo
            .get(&key)
            .ok_or(DomainError::GradeNotFound(key))
    }

    /// Arithmetic mean of every score of a student.
    ///
    /// # Errors
    ///
    /// `StudentNotFound` if the student has no grades.
    pub fn compute_average(&self, student_id: &str) -> Result<f64, DomainError> {
        let grades = self.list_student_grades(student_id)?;
        let (sum, count) = grades
            .iter()
            .fold((0.0_f64, 0.0_f64), |(sum, count), g| (sum + g.score, count + 1.0));

        let average = sum / count;
        debug!(student_id, count, average, "average computed");
        Ok(average)
    }

    /// Every grade of a student, taken from one snapshot of the store.
    ///
    /// # Errors
    ///
    /// `StudentNotFound` if the student has no grades.
    pub fn list_student_grades(&self, student_id: &str) -> Result<Vec<Grade>, DomainError> {
        let grades = self.repo.scan_by_student(student_id);
        if grades.is_empty() {
            return Err(DomainError::student_not_found(student_id));
        }
        Ok(grades)
    }

    /// Number of stored grades.
    #[must_use]
    pub fn grade_count(&self) -> usize {
        self.repo.len()
    }
}
