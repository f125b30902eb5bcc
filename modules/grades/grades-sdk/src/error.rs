//! Error type for grades client operations.

use thiserror::Error;

/// Errors returned by [`crate::GradesClient`] implementations.
///
/// Business outcomes of the unary operations (duplicate or missing grade)
/// are not errors; they are reported in-band through the reply types.
#[derive(Error, Debug)]
pub enum GradesError {
    #[error("gRPC transport error: {0}")]
    Transport(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl GradesError {
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl From<tonic::Status> for GradesError {
    fn from(status: tonic::Status) -> Self {
        match status.code() {
            tonic::Code::NotFound => Self::NotFound(status.message().to_owned()),
            tonic::Code::Internal => Self::Internal(status.message().to_owned()),
            _ => Self::Transport(status.message().to_owned()),
        }
    }
}

impl From<tonic::transport::Error> for GradesError {
    fn from(e: tonic::transport::Error) -> Self {
        Self::Transport(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_to_variants() {
        let err: GradesError = tonic::Status::not_found("no grades").into();
        assert!(err.is_not_found());

        let err: GradesError = tonic::Status::internal("boom").into();
        assert!(matches!(err, GradesError::Internal(_)));

        let err: GradesError = tonic::Status::unavailable("down").into();
        assert!(matches!(err, GradesError::Transport(_)));
    }

    #[test]
    fn display_includes_message() {
        assert_eq!(
            GradesError::not_found("student 999").to_string(),
            "not found: student 999"
        );
        assert_eq!(
            GradesError::internal("lock poisoned").to_string(),
            "internal error: lock poisoned"
        );
    }
}
