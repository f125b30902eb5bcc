//! gRPC implementation of [`GradesClient`].

use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt};
use tonic::transport::Channel;

use crate::api::{GradeStream, GradesClient};
use crate::error::GradesError;
use crate::models::{AverageReply, Grade, GradeFields, GradeReply, StatusReply};
use crate::proto::grade_service_client::GradeServiceClient;
use crate::proto::{GradeRequest, StudentCourseRequest, StudentRequest};
use crate::transport::{GrpcClientConfig, connect_with_retry};

/// Grades client talking to a remote `GradeService` over gRPC.
#[derive(Clone)]
pub struct GradesGrpcClient {
    inner: GradeServiceClient<Channel>,
}

impl GradesGrpcClient {
    /// Connect using the default transport configuration with retries.
    ///
    /// # Errors
    ///
    /// Returns an error if no connection could be established.
    pub async fn connect(uri: impl Into<String>) -> anyhow::Result<Self> {
        Self::connect_with_config(uri, &GrpcClientConfig::new("grades")).await
    }

    /// Connect with an explicit transport configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if no connection could be established.
    pub async fn connect_with_config(
        uri: impl Into<String>,
        cfg: &GrpcClientConfig,
    ) -> anyhow::Result<Self> {
        let channel = connect_with_retry(uri, cfg).await?;
        Ok(Self::from_channel(channel))
    }

    #[must_use]
    pub fn from_channel(channel: Channel) -> Self {
        Self {
            inner: GradeServiceClient::new(channel),
        }
    }
}

#[async_trait]
impl GradesClient for GradesGrpcClient {
    async fn add_grade(&self, grade: Grade) -> Result<StatusReply, GradesError> {
        let mut client = self.inner.clone();
        let response = client.add_grade(GradeRequest::from(grade)).await?;
        Ok(response.into_inner().into())
    }

    async fn change_grade(
        &self,
        student_id: &str,
        course_code: &str,
        fields: GradeFields,
    ) -> Result<StatusReply, GradesError> {
        let mut client = self.inner.clone();
        let request = GradeRequest {
            student_id: student_id.to_owned(),
            course_code: course_code.to_owned(),
            year: fields.year,
            term: fields.term,
            score: fields.score,
        };
        let response = client.change_grade(request).await?;
        Ok(response.into_inner().into())
    }

    async fn query_grade(
        &self,
        student_id: &str,
        course_code: &str,
    ) -> Result<GradeReply, GradesError> {
        let mut client = self.inner.clone();
        let request = StudentCourseRequest {
            student_id: student_id.to_owned(),
            course_code: course_code.to_owned(),
        };
        let resp = client.query_grade(request).await?.into_inner();

        let grade = match (resp.success, resp.grade) {
            (true, Some(grade)) => Some(Grade::from(grade)),
            (true, None) => {
                return Err(GradesError::InvalidResponse(
                    "successful query without a grade".to_owned(),
                ));
            }
            (false, _) => None,
        };

        Ok(GradeReply {
            success: resp.success,
            grade,
            error_message: resp.error_message,
        })
    }

    async fn compute_average(&self, student_id: &str) -> Result<AverageReply, GradesError> {
        let mut client = self.inner.clone();
        let request = StudentRequest {
            student_id: student_id.to_owned(),
        };
        let response = client.compute_average(request).await?;
        Ok(response.into_inner().into())
    }

    async fn stream_student_grades(&self, student_id: &str) -> Result<GradeStream, GradesError> {
        let mut client = self.inner.clone();
        let request = StudentRequest {
            student_id: student_id.to_owned(),
        };
        let stream = client.list_student_grades(request).await?.into_inner();

        Ok(stream.map_ok(Grade::from).map_err(GradesError::from).boxed())
    }
}
