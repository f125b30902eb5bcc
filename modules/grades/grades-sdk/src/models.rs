//! Grade models shared by the server and its clients.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single grade of a student in a course.
///
/// `student_id` and `course_code` form the [`GradeKey`] and never change once
/// the grade is stored; `year`, `term` and `score` can be overwritten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    pub student_id: String,
    pub course_code: String,
    pub year: i32,
    pub term: i32,
    pub score: f64,
}

impl Grade {
    #[must_use]
    pub fn new(
        student_id: impl Into<String>,
        course_code: impl Into<String>,
        year: i32,
        term: i32,
        score: f64,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            course_code: course_code.into(),
            year,
            term,
            score,
        }
    }

    /// Key under which this grade is stored.
    #[must_use]
    pub fn key(&self) -> GradeKey {
        GradeKey::new(&self.student_id, &self.course_code)
    }

    /// The mutable part of the grade.
    #[must_use]
    pub fn fields(&self) -> GradeFields {
        GradeFields {
            year: self.year,
            term: self.term,
            score: self.score,
        }
    }

    /// Overwrites `year`, `term` and `score`, keeping the key fields.
    pub fn apply(&mut self, fields: GradeFields) {
        self.year = fields.year;
        self.term = fields.term;
        self.score = fields.score;
    }
}

/// Store key of a grade: `"{student_id}_{course_code}"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GradeKey(String);

impl GradeKey {
    #[must_use]
    pub fn new(student_id: &str, course_code: &str) -> Self {
        Self(format!("{student_id}_{course_code}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GradeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fields overwritten by a grade change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradeFields {
    pub year: i32,
    pub term: i32,
    pub score: f64,
}

/// Outcome of `add_grade` / `change_grade`.
///
/// Business failures (duplicate grade, missing grade) come back with
/// `success == false`; callers must check the flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReply {
    pub success: bool,
    pub message: String,
}

/// Outcome of `query_grade`. `grade` is `Some` exactly when `success` is true.
#[derive(Debug, Clone, PartialEq)]
pub struct GradeReply {
    pub success: bool,
    pub grade: Option<Grade>,
    pub error_message: String,
}

/// Outcome of `compute_average`. `average` is `0.0` when `success` is false.
#[derive(Debug, Clone, PartialEq)]
pub struct AverageReply {
    pub success: bool,
    pub average: f64,
    pub error_message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_joins_student_and_course_with_underscore() {
        let key = GradeKey::new("123", "CIC0001");
        assert_eq!(key.as_str(), "123_CIC0001");
        assert_eq!(key.to_string(), "123_CIC0001");
    }

    #[test]
    fn grade_key_matches_its_fields() {
        let grade = Grade::new("123", "CIC0001", 2025, 2, 9.5);
        assert_eq!(grade.key(), GradeKey::new("123", "CIC0001"));
    }

    #[test]
    fn apply_keeps_identity_fields() {
        let mut grade = Grade::new("123", "CIC0001", 2025, 2, 9.5);
        grade.apply(GradeFields {
            year: 2026,
            term: 1,
            score: 7.0,
        });

        assert_eq!(grade.student_id, "123");
        assert_eq!(grade.course_code, "CIC0001");
        assert_eq!(grade.year, 2026);
        assert_eq!(grade.term, 1);
        assert!((grade.score - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn grade_serializes_with_snake_case_fields() {
        let grade = Grade::new("123", "CIC0001", 2025, 2, 9.5);
        let json = serde_json::to_value(&grade).unwrap();
        assert_eq!(json["student_id"], "123");
        assert_eq!(json["course_code"], "CIC0001");
        assert_eq!(json["term"], 2);
    }
}
