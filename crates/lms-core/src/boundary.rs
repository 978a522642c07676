//! Terminal error boundary
//!
//! Every failing request ends here exactly once: [`Failure`] is logged and
//! rendered as an envelope with its status. [`ApiError`] responses and
//! rejections route through the same path so nothing is logged twice and no
//! client sees an unshaped body.

use axum::Json;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::{ApiError, Envelope, Failure};

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(self)).into_response()
    }
}

impl IntoResponse for Failure {
    fn into_response(self) -> Response {
        self.report();
        self.to_envelope().into_response()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        Failure::Api(self).into_response()
    }
}
