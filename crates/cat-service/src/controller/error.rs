//! Errors a controller action can end in.

use crate::cat_actor::CatError;
use crate::params::ParamsError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ControllerError {
    #[error("Cat not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Params(#[from] ParamsError),

    /// A validation failure that no form could absorb.
    #[error("Validation failed: {}", .0.join(", "))]
    Unprocessable(Vec<String>),

    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    #[error("Persistence unavailable: {0}")]
    Unavailable(String),
}

impl ControllerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ControllerError::NotFound(_) => StatusCode::NOT_FOUND,
            ControllerError::Params(_) => StatusCode::BAD_REQUEST,
            ControllerError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ControllerError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ControllerError::Unavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CatError> for ControllerError {
    fn from(e: CatError) -> Self {
        match e {
            CatError::NotFound(id) => ControllerError::NotFound(id),
            CatError::ValidationFailed(errors) => ControllerError::Unprocessable(errors),
            CatError::ActorCommunicationError(msg) => ControllerError::Unavailable(msg),
        }
    }
}

/// Plain-text fallback used when no presenter is involved.
impl IntoResponse for ControllerError {
    fn into_response(self) -> Response {
        if let ControllerError::Unavailable(msg) = &self {
            tracing::error!(error = %msg, "Persistence unavailable");
        }
        (self.status(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ControllerError::NotFound("1".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ControllerError::Params(ParamsError::Missing("cat".into())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ControllerError::Unprocessable(vec![]).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ControllerError::MethodNotAllowed("delete".into()).status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            ControllerError::Unavailable("closed".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_from_cat_error() {
        assert_eq!(
            ControllerError::from(CatError::NotFound("4".into())),
            ControllerError::NotFound("4".into())
        );
        assert_eq!(
            ControllerError::from(CatError::ActorCommunicationError("Actor closed".into())),
            ControllerError::Unavailable("Actor closed".into())
        );
    }

    #[test]
    fn test_params_error_message_passes_through() {
        let err = ControllerError::from(ParamsError::Missing("cat".into()));
        assert_eq!(err.to_string(), "param is missing or the value is empty: cat");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
