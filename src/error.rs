use axum::http::StatusCode;
use uuid::Uuid;

/// Failures surfaced by the nutrition analysis pipeline and its callers.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("patient {0} not found")]
    PatientNotFound(Uuid),
    #[error("window must be a positive number of days, got {0}")]
    InvalidWindow(i64),
    #[error(transparent)]
    Collaborator(#[from] anyhow::Error),
}

impl AnalysisError {
    pub fn status(&self) -> StatusCode {
        match self {
            AnalysisError::PatientNotFound(_) => StatusCode::NOT_FOUND,
            AnalysisError::InvalidWindow(_) => StatusCode::BAD_REQUEST,
            AnalysisError::Collaborator(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<AnalysisError> for (StatusCode, String) {
    fn from(e: AnalysisError) -> Self {
        match &e {
            AnalysisError::PatientNotFound(_) => (e.status(), "Patient not found".into()),
            _ => (e.status(), e.to_string()),
        }
    }
}

pub fn internal<E: std::fmt::Display>(e: E) -> (StatusCode, String) {
    tracing::error!(error = %e, "internal error");
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}

pub fn bad_request(msg: &str) -> (StatusCode, String) {
    (StatusCode::BAD_REQUEST, msg.to_string())
}

#[cfg(test)]
mod error_tests {
    use super::*;

    #[test]
    fn statuses_match_error_kind() {
        assert_eq!(
            AnalysisError::PatientNotFound(Uuid::nil()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(AnalysisError::InvalidWindow(0).status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AnalysisError::Collaborator(anyhow::anyhow!("db down")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn invalid_window_message_names_value() {
        let (status, msg): (StatusCode, String) = AnalysisError::InvalidWindow(-3).into();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(msg.contains("-3"));
    }

    #[test]
    fn collaborator_error_keeps_source_message() {
        let (_, msg): (StatusCode, String) =
            AnalysisError::from(anyhow::anyhow!("connection refused")).into();
        assert_eq!(msg, "connection refused");
    }
}
