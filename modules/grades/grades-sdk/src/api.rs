//! `GradesClient` trait definition.

use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::error::GradesError;
use crate::models::{AverageReply, Grade, GradeFields, GradeReply, StatusReply};

/// Stream of grades produced by [`GradesClient::stream_student_grades`].
pub type GradeStream = BoxStream<'static, Result<Grade, GradesError>>;

/// Client API of the grades service.
///
/// The unary operations report business failures in-band (`success == false`)
/// and only return `Err` for transport or protocol failures.
#[async_trait]
pub trait GradesClient: Send + Sync {
    /// Add a new grade.
    ///
    /// # Errors
    ///
    /// Returns an error if the call itself fails. A grade that already exists
    /// is reported through [`StatusReply::success`].
    async fn add_grade(&self, grade: Grade) -> Result<StatusReply, GradesError>;

    /// Overwrite year, term and score of an existing grade.
    ///
    /// # Errors
    ///
    /// Returns an error if the call itself fails. A missing grade is reported
    /// through [`StatusReply::success`].
    async fn change_grade(
        &self,
        student_id: &str,
        course_code: &str,
        fields: GradeFields,
    ) -> Result<StatusReply, GradesError>;

    /// Look up the grade of a student in a course.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the server reports success
    /// without a grade.
    async fn query_grade(
        &self,
        student_id: &str,
        course_code: &str,
    ) -> Result<GradeReply, GradesError>;

    /// Average of all grades of a student.
    ///
    /// # Errors
    ///
    /// Returns an error if the call itself fails.
    async fn compute_average(&self, student_id: &str) -> Result<AverageReply, GradesError>;

    /// Stream the grades of a student as the server emits them.
    ///
    /// # Errors
    ///
    /// `NotFound` if the student has no grades; the stream is never opened
    /// in that case.
    async fn stream_student_grades(&self, student_id: &str) -> Result<GradeStream, GradesError>;

    /// Collect every grade of a student.
    ///
    /// # Errors
    ///
    /// `NotFound` if the student has no grades, or any error raised while
    /// reading the stream.
    async fn list_student_grades(&self, student_id: &str) -> Result<Vec<Grade>, GradesError> {
        use futures::TryStreamExt;

        let stream = self.stream_student_grades(student_id).await?;
        stream.try_collect().await
    }
}
