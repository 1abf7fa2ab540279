use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use service::errors::ServiceError;
use thiserror::Error;

/// Per-request failures. Each maps to one status code and a plaintext body.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("bad payload")]
    MalformedPayload,
    #[error("booking exists")]
    DuplicateId,
    #[error("booking not found")]
    UnknownId,
    #[error("meal must be veg|non-veg")]
    InvalidEnumValue,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MalformedPayload | Self::InvalidEnumValue => StatusCode::BAD_REQUEST,
            Self::DuplicateId => StatusCode::CONFLICT,
            Self::UnknownId => StatusCode::NOT_FOUND,
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Conflict(_) => Self::DuplicateId,
            ServiceError::NotFound(_) => Self::UnknownId,
            ServiceError::Validation(_) => Self::InvalidEnumValue,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(ApiError::MalformedPayload.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::InvalidEnumValue.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::DuplicateId.status(), StatusCode::CONFLICT);
        assert_eq!(ApiError::UnknownId.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn service_errors_convert() {
        assert_eq!(ApiError::from(ServiceError::conflict("booking")), ApiError::DuplicateId);
        assert_eq!(ApiError::from(ServiceError::not_found("booking")), ApiError::UnknownId);
        assert_eq!(ApiError::from(ServiceError::Validation("x".into())), ApiError::InvalidEnumValue);
    }

    #[test]
    fn response_is_plaintext() {
        let res = ApiError::DuplicateId.into_response();
        assert_eq!(res.status(), StatusCode::CONFLICT);
        let ct = res.headers().get(axum::http::header::CONTENT_TYPE).and_then(|v| v.to_str().ok());
        assert_eq!(ct, Some("text/plain; charset=utf-8"));
    }
}
