use aide::OperationOutput;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use courier_estimator::error::EstimatorError;

pub enum ApiError {
    BadRequest(String),
    NotFound(String),
}

impl From<EstimatorError> for ApiError {
    fn from(error: EstimatorError) -> Self {
        ApiError::BadRequest(error.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message).into_response(),
        }
    }
}

impl OperationOutput for ApiError {
    type Inner = String;
}
