use http::StatusCode;
use lms_core::{ApiError, Envelope};

/// Landing route
pub async fn root_handler() -> Envelope<()> {
    Envelope::empty(StatusCode::OK, "Welcome to Backend")
}

/// Any path no route matched
pub async fn fallback_handler() -> ApiError {
    ApiError::not_found("Route not found")
}
