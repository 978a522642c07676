use std::any::Any;

use axum::response::{IntoResponse, Response};
use lms_core::Failure;

/// Render a handler panic through the error boundary
///
/// Used with `CatchPanicLayer::custom`; the client gets the generic 500
/// envelope and the panic message only reaches the log.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    Failure::from_panic(payload).into_response()
}
