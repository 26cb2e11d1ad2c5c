//! Axum integration: make `ProblemDetails` directly usable as a response

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::problem::{APPLICATION_PROBLEM_JSON, ProblemDetails};

impl IntoResponse for ProblemDetails {
    fn into_response(self) -> Response {
        let status = self
            .status_code()
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(
                status = self.status,
                title = %self.title,
                type_url = %self.type_url,
                instance = %self.instance,
                "Server error problem response"
            );
        } else {
            tracing::debug!(
                status = self.status,
                title = %self.title,
                type_url = %self.type_url,
                instance = %self.instance,
                "Problem response"
            );
        }

        let mut resp = axum::Json(self).into_response();
        *resp.status_mut() = status;
        resp.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(APPLICATION_PROBLEM_JSON),
        );
        resp
    }
}
