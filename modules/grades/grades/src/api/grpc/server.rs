//! gRPC server implementation for the grades service.
//!
//! Handles gRPC requests and delegates to the domain [`GradesService`].
//! Duplicate and missing grades are reported in-band on the unary calls;
//! `ListStudentGrades` fails with `NOT_FOUND` before streaming anything.

use std::sync::Arc;

use grades_sdk::proto::{
    AverageResponse, Grade as ProtoGrade, GradeRequest, QueryGradeResponse, StatusResponse,
    StudentCourseRequest, StudentRequest,
};
use grades_sdk::{Grade, GradeService, GradeServiceServer};
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tonic::{Request, Response, Status};
use tracing::{debug, info};

use crate::domain::{DomainError, GradesService};

pub const MSG_GRADE_ADDED: &str = "grade added successfully";
pub const MSG_GRADE_CHANGED: &str = "grade changed successfully";
pub const MSG_ALREADY_EXISTS: &str = "grade already exists for this student/course; use ChangeGrade";
pub const MSG_CHANGE_NOT_FOUND: &str = "grade not found; add the grade before changing it";
pub const MSG_GRADE_NOT_FOUND: &str = "grade not found";
pub const MSG_NO_GRADES: &str = "no grade found for the given student id";

const DEFAULT_STREAM_BUFFER: usize = 16;

/// tonic service wrapping the domain service.
#[derive(Clone)]
pub struct GradeServiceImpl {
    service: Arc<GradesService>,
    stream_buffer: usize,
}

impl GradeServiceImpl {
    #[must_use]
    pub fn new(service: Arc<GradesService>) -> Self {
        Self {
            service,
            stream_buffer: DEFAULT_STREAM_BUFFER,
        }
    }

    /// Channel capacity used by `ListStudentGrades`. Zero is raised to one.
    #[must_use]
    pub fn with_stream_buffer(mut self, stream_buffer: usize) -> Self {
        self.stream_buffer = stream_buffer.max(1);
        self
    }

    #[must_use]
    pub fn into_server(self) -> GradeServiceServer<Self> {
        GradeServiceServer::new(self)
    }
}

fn status_response(result: Result<(), DomainError>, ok: &str) -> Result<StatusResponse, Status> {
    match result {
        Ok(()) => Ok(StatusResponse {
            success: true,
            message: ok.to_owned(),
        }),
        Err(DomainError::AlreadyExists(_)) => Ok(StatusResponse {
            success: false,
            message: MSG_ALREADY_EXISTS.to_owned(),
        }),
        Err(DomainError::GradeNotFound(_)) => Ok(StatusResponse {
            success: false,
            message: MSG_CHANGE_NOT_FOUND.to_owned(),
        }),
        Err(e) => Err(e.into()),
    }
}

type ListStudentGradesStream = ReceiverStream<Result<ProtoGrade, Status>>;

#[tonic::async_trait]
impl GradeService for GradeServiceImpl {
    type ListStudentGradesStream = ListStudentGradesStream;

    async fn add_grade(
        &self,
        request: Request<GradeRequest>,
    ) -> Result<Response<StatusResponse>, Status> {
        let req = request.into_inner();
        info!(
            student_id = %req.student_id,
            course_code = %req.course_code,
            "AddGrade"
        );

        let result = self.service.add_grade(Grade::from(req));
        Ok(Response::new(status_response(result, MSG_GRADE_ADDED)?))
    }

    async fn change_grade(
        &self,
        request: Request<GradeRequest>,
    ) -> Result<Response<StatusResponse>, Status> {
        let req = request.into_inner();
        info!(
            student_id = %req.student_id,
            course_code = %req.course_code,
            "ChangeGrade"
        );

        let result = self
            .service
            .change_grade(&req.student_id, &req.course_code, req.fields());
        Ok(Response::new(status_response(result, MSG_GRADE_CHANGED)?))
    }

    async fn query_grade(
        &self,
        request: Request<StudentCourseRequest>,
    ) -> Result<Response<QueryGradeResponse>, Status> {
        let req = request.into_inner();
        info!(
            student_id = %req.student_id,
            course_code = %req.course_code,
            "QueryGrade"
        );

        let resp = match self.service.query_grade(&req.student_id, &req.course_code) {
            Ok(grade) => QueryGradeResponse {
                success: true,
                grade: Some(grade.into()),
                error_message: String::new(),
            },
            Err(DomainError::GradeNotFound(_)) => QueryGradeResponse {
                success: false,
                grade: None,
                error_message: MSG_GRADE_NOT_FOUND.to_owned(),
            },
            Err(e) => return Err(e.into()),
        };

        Ok(Response::new(resp))
    }

    async fn compute_average(
        &self,
        request: Request<StudentRequest>,
    ) -> Result<Response<AverageResponse>, Status> {
        let req = request.into_inner();
        info!(student_id = %req.student_id, "ComputeAverage");

        let resp = match self.service.compute_average(&req.student_id) {
            Ok(average) => AverageResponse {
                success: true,
                average,
                error_message: String::new(),
            },
            Err(DomainError::StudentNotFound(_)) => AverageResponse {
                success: false,
                average: 0.0,
                error_message: MSG_NO_GRADES.to_owned(),
            },
            Err(e) => return Err(e.into()),
        };

        Ok(Response::new(resp))
    }

    async fn list_student_grades(
        &self,
        request: Request<StudentRequest>,
    ) -> Result<Response<Self::ListStudentGradesStream>, Status> {
        let req = request.into_inner();
        info!(student_id = %req.student_id, "ListStudentGrades");

        let grades = self
            .service
            .list_student_grades(&req.student_id)
            .map_err(|e| match e {
                DomainError::StudentNotFound(id) => {
                    Status::not_found(format!("no grade found for student id {id}"))
                }
                other => other.into(),
            })?;

        let (tx, rx) = mpsc::channel(self.stream_buffer);
        let student_id = req.student_id;

        tokio::spawn(async move {
            let total = grades.len();
            for grade in grades {
                if tx.send(Ok(grade.into())).await.is_err() {
                    debug!(%student_id, "client disconnected from grade stream");
                    return;
                }
            }
            debug!(%student_id, total, "grade stream completed");
        });

        Ok(Response::new(ReceiverStream::new(rx)))
    }
}

#[cfg(test)]
mod tests {
    use futures::StreamExt;

    use super::*;
    use crate::infra::InMemoryGradeRepository;

    fn service_impl() -> GradeServiceImpl {
        let repo = Arc::new(InMemoryGradeRepository::new());
        GradeServiceImpl::new(Arc::new(GradesService::new(repo)))
    }

    fn grade_request(student: &str, course: &str, score: f64) -> Request<GradeRequest> {
        Request::new(GradeRequest {
            student_id: student.to_owned(),
            course_code: course.to_owned(),
            year: 2025,
            term: 2,
            score,
        })
    }

    fn student(student: &str) -> Request<StudentRequest> {
        Request::new(StudentRequest {
            student_id: student.to_owned(),
        })
    }

    #[tokio::test]
    async fn add_grade_reports_duplicates_in_band() {
        let svc = service_impl();

        let first = svc
            .add_grade(grade_request("123", "CIC0001", 9.5))
            .await
            .unwrap()
            .into_inner();
        assert!(first.success);
        assert_eq!(first.message, MSG_GRADE_ADDED);

        let second = svc
            .add_grade(grade_request("123", "CIC0001", 9.5))
            .await
            .unwrap()
            .into_inner();
        assert!(!second.success);
        assert!(second.message.contains("already exists"));
    }

    #[tokio::test]
    async fn change_grade_without_grade_reports_not_found() {
        let svc = service_impl();
        let resp = svc
            .change_grade(grade_request("123", "CIC0001", 7.0))
            .await
            .unwrap()
            .into_inner();
        assert!(!resp.success);
        assert_eq!(resp.message, MSG_CHANGE_NOT_FOUND);
    }

    #[tokio::test]
    async fn query_grade_without_grade_has_no_payload() {
        let svc = service_impl();
        let resp = svc
            .query_grade(Request::new(StudentCourseRequest {
                student_id: "123".to_owned(),
                course_code: "CIC0001".to_owned(),
            }))
            .await
            .unwrap()
            .into_inner();
        assert!(!resp.success);
        assert!(resp.grade.is_none());
        assert_eq!(resp.error_message, MSG_GRADE_NOT_FOUND);
    }

    #[tokio::test]
    async fn compute_average_for_unknown_student_is_zero() {
        let svc = service_impl();
        let resp = svc
            .compute_average(student("999"))
            .await
            .unwrap()
            .into_inner();
        assert!(!resp.success);
        assert!(resp.average.abs() < f64::EPSILON);
        assert_eq!(resp.error_message, MSG_NO_GRADES);
    }

    #[tokio::test]
    async fn list_for_unknown_student_fails_before_streaming() {
        let svc = service_impl();
        let Err(status) = svc.list_student_grades(student("999")).await else {
            panic!("expected NOT_FOUND for a student without grades");
        };
        assert_eq!(status.code(), tonic::Code::NotFound);
    }

    #[tokio::test]
    async fn list_streams_every_grade_with_small_buffer() {
        let svc = service_impl().with_stream_buffer(0);
        for course in ["CIC0001", "CIC0002", "CIC0003"] {
            svc.add_grade(grade_request("123", course, 8.0))
                .await
                .unwrap();
        }

        let stream = svc
            .list_student_grades(student("123"))
            .await
            .unwrap()
            .into_inner();
        let items: Vec<_> = stream.collect().await;

        assert_eq!(items.len(), 3);
        assert!(
            items
                .iter()
                .all(|item| item.as_ref().is_ok_and(|g| g.student_id == "123"))
        );
    }
}
