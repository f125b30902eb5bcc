//! Domain error types for the grades module.

use grades_sdk::GradeKey;
use thiserror::Error;

/// Domain-level errors for grade operations.
#[derive(Error, Debug)]
pub enum DomainError {
    /// A grade for this student/course pair is already stored.
    #[error("grade already exists: {0}")]
    AlreadyExists(GradeKey),

    /// No grade is stored for this student/course pair.
    #[error("grade not found: {0}")]
    GradeNotFound(GradeKey),

    /// The student has no grades at all.
    #[error("no grades for student: {0}")]
    StudentNotFound(String),

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl DomainError {
    #[must_use]
    pub fn student_not_found(student_id: impl Into<String>) -> Self {
        Self::StudentNotFound(student_id.into())
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::GradeNotFound(_) | Self::StudentNotFound(_))
    }
}

impl From<DomainError> for tonic::Status {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::AlreadyExists(_) => tonic::Status::already_exists(e.to_string()),
            DomainError::GradeNotFound(_) | DomainError::StudentNotFound(_) => {
                tonic::Status::not_found(e.to_string())
            }
            DomainError::Internal(_) => tonic::Status::internal(e.to_string()),
        }
    }
}
