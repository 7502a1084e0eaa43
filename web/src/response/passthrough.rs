//! Relays a successful upstream answer to the client without touching its body.

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use domain::UpstreamResponse;

const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// The upstream body, byte for byte, under the upstream's content type.
#[derive(Debug)]
pub(crate) struct Passthrough(pub(crate) UpstreamResponse);

impl IntoResponse for Passthrough {
    fn into_response(self) -> Response {
        let content_type = self
            .0
            .content_type
            .as_deref()
            .and_then(|value| HeaderValue::from_str(value).ok())
            .unwrap_or_else(|| HeaderValue::from_static(DEFAULT_CONTENT_TYPE));

        (
            StatusCode::OK,
            [(CONTENT_TYPE, content_type)],
            Body::from(self.0.body),
        )
            .into_response()
    }
}
