//! Error-to-response and error-to-exit-code mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::debug;

use fibmemo_core::{exit_codes, FibError};

/// Failure of an HTTP request, rendered by [`IntoResponse`].
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The client sent an unusable index or option.
    #[error("{0}")]
    BadRequest(String),

    /// The lookup task did not complete.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<FibError> for ApiError {
    fn from(err: FibError) -> Self {
        match err {
            FibError::InvalidArgument(msg) => Self::BadRequest(msg),
            FibError::Config(_) => Self::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        debug!(%status, message = %self, "request rejected");
        (status, self.to_string()).into_response()
    }
}

/// Map a startup failure to the process exit code.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<FibError>() {
        Some(FibError::Config(_)) => exit_codes::ERROR_CONFIG,
        _ => exit_codes::ERROR_GENERIC,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_is_bad_request_with_verbatim_message() {
        let err = ApiError::from(FibError::InvalidArgument(
            "Argument must be positive, but is: 0".into(),
        ));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Argument must be positive, but is: 0");
    }

    #[test]
    fn config_is_internal() {
        let err = ApiError::from(FibError::Config("bad".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn response_status() {
        let resp = ApiError::BadRequest("nope".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn exit_codes_for_startup_errors() {
        let config = anyhow::Error::new(FibError::Config("bad".into()));
        assert_eq!(exit_code(&config), 4);

        let other = anyhow::anyhow!("address in use");
        assert_eq!(exit_code(&other), 1);
    }
}
