use std::error::Error as StdError;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use domain::error::{DomainErrorKind, Error as DomainError, ExternalErrorKind, InternalErrorKind};

use log::*;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug)]
pub struct Error(DomainError);

/// Body of every error response.
#[derive(Debug, Serialize)]
pub(crate) struct ErrorResponse {
    pub(crate) status_code: u16,
    pub(crate) message: String,
}

impl StdError for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> core::result::Result<(), std::fmt::Error> {
        write!(fmt, "{self:?}")
    }
}

impl Error {
    /// The HTTP status this error is reported with.
    fn status_code(&self) -> StatusCode {
        match &self.0.error_kind {
            DomainErrorKind::Internal(InternalErrorKind::Validation(_)) => StatusCode::BAD_REQUEST,
            DomainErrorKind::External(external_error_kind) => match external_error_kind {
                ExternalErrorKind::Upstream { status, .. } => StatusCode::from_u16(*status)
                    .ok()
                    .filter(|status| status.is_client_error() || status.is_server_error())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                ExternalErrorKind::Network { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

// List of possible StatusCode variants https://docs.rs/http/latest/http/status/struct.StatusCode.html
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        debug!("Responding {status_code} for {:?}", self.0.error_kind);

        let body = ErrorResponse {
            status_code: status_code.as_u16(),
            message: self.0.message().to_string(),
        };

        (status_code, Json(body)).into_response()
    }
}

impl<E> From<E> for Error
where
    E: Into<DomainError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::{json, Value};

    fn upstream(status: u16, message: &str) -> Error {
        Error(DomainError {
            source: None,
            error_kind: DomainErrorKind::External(ExternalErrorKind::Upstream {
                status,
                message: message.to_string(),
            }),
        })
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_error_is_bad_request() {
        let response = Error(DomainError::validation("Member ID is required")).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "status_code": 400, "message": "Member ID is required" })
        );
    }

    #[tokio::test]
    async fn test_upstream_status_is_passed_through() {
        let response = upstream(404, "not found").into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({ "status_code": 404, "message": "not found" })
        );
    }

    #[test]
    fn test_non_error_upstream_status_becomes_internal_server_error() {
        assert_eq!(
            upstream(304, "Not Modified").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            upstream(1000, "bogus").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_non_error_upstream_status_keeps_upstream_message() {
        let response = upstream(302, "moved").into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "status_code": 500, "message": "moved" })
        );
    }

    #[tokio::test]
    async fn test_network_error_is_internal_server_error() {
        let response = Error(DomainError {
            source: None,
            error_kind: DomainErrorKind::External(ExternalErrorKind::Network {
                message: "Failed to fetch family members".to_string(),
            }),
        })
        .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "status_code": 500, "message": "Failed to fetch family members" })
        );
    }
}
