//! Conversions between proto messages and SDK models.

use crate::models::{AverageReply, Grade, GradeFields, StatusReply};
use crate::proto;

impl From<proto::Grade> for Grade {
    fn from(g: proto::Grade) -> Self {
        Self {
            student_id: g.student_id,
            course_code: g.course_code,
            year: g.year,
            term: g.term,
            score: g.score,
        }
    }
}

impl From<Grade> for proto::Grade {
    fn from(g: Grade) -> Self {
        Self {
            student_id: g.student_id,
            course_code: g.course_code,
            year: g.year,
            term: g.term,
            score: g.score,
        }
    }
}

impl From<Grade> for proto::GradeRequest {
    fn from(g: Grade) -> Self {
        Self {
            student_id: g.student_id,
            course_code: g.course_code,
            year: g.year,
            term: g.term,
            score: g.score,
        }
    }
}

impl From<proto::GradeRequest> for Grade {
    fn from(r: proto::GradeRequest) -> Self {
        Self {
            student_id: r.student_id,
            course_code: r.course_code,
            year: r.year,
            term: r.term,
            score: r.score,
        }
    }
}

impl proto::GradeRequest {
    /// The fields a grade change overwrites.
    #[must_use]
    pub fn fields(&self) -> GradeFields {
        GradeFields {
            year: self.year,
            term: self.term,
            score: self.score,
        }
    }
}

impl From<proto::StatusResponse> for StatusReply {
    fn from(r: proto::StatusResponse) -> Self {
        Self {
            success: r.success,
            message: r.message,
        }
    }
}

impl From<proto::AverageResponse> for AverageReply {
    fn from(r: proto::AverageResponse) -> Self {
        Self {
            success: r.success,
            average: r.average,
            error_message: r.error_message,
        }
    }
}
