//! HTTP boundary for errors.
//!
//! Handlers return `Result<_, ApiError>`; this is the only place an error kind
//! becomes a status code. Client faults keep their message, everything else is
//! logged and answered with a generic 500 body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use infinite_core::error::InfiniteError;
use infinite_core::protocol::predict::{ErrorBody, INTERNAL_ERROR_MESSAGE};

#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] InfiniteError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        if self.0.is_client_fault() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self.0 {
            InfiniteError::BadRequest(msg) => ErrorBody::new(msg),
            other => {
                tracing::error!(
                    code = other.client_code().as_str(),
                    error = %other,
                    "request failed"
                );
                ErrorBody::new(INTERNAL_ERROR_MESSAGE)
            }
        };
        (status, Json(body)).into_response()
    }
}
