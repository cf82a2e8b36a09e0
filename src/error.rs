use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Message shown to users whenever the back-end cannot be used.
pub const INSTALLATION_ERROR: &str = "Error, check your installation";

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("{0}")]
    InvalidParameter(String),

    #[error("search back-end unreachable: {0}")]
    CollaboratorUnreachable(#[source] reqwest::Error),

    #[error("search back-end answered with status {0}")]
    CollaboratorStatus(u16),

    #[error("malformed search back-end response: {0}")]
    MalformedCollaboratorResponse(String),
}

impl SearchError {
    pub fn negative_parameter() -> Self {
        Self::InvalidParameter("start or hits cannot be negative numbers".to_string())
    }

    pub fn zero_hits() -> Self {
        Self::InvalidParameter("hits must be greater than zero".to_string())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            Self::CollaboratorUnreachable(e) if e.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
            Self::CollaboratorUnreachable(_)
            | Self::CollaboratorStatus(_)
            | Self::MalformedCollaboratorResponse(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Text safe to show in the browser. Back-end details stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidParameter(detail) => format!("Error, {detail}"),
            _ => INSTALLATION_ERROR.to_string(),
        }
    }
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::warn!(error = %self, "search request failed");
        } else {
            tracing::debug!(error = %self, "search request rejected");
        }
        (status, self.user_message()).into_response()
    }
}

#[test]
fn test_invalid_parameter_messages() {
    let err = SearchError::negative_parameter();
    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        err.user_message(),
        "Error, start or hits cannot be negative numbers"
    );

    let err = SearchError::zero_hits();
    assert_eq!(err.user_message(), "Error, hits must be greater than zero");
}

#[test]
fn test_backend_failures_hide_details() {
    let err = SearchError::MalformedCollaboratorResponse("missing field `total`".into());
    assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    assert_eq!(err.user_message(), INSTALLATION_ERROR);

    let err = SearchError::CollaboratorStatus(500);
    assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    assert_eq!(err.user_message(), INSTALLATION_ERROR);
}
