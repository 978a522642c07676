use http::StatusCode;
use serde::Serialize;

/// Client-facing message for every failure the taxonomy does not classify
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong on the server";

/// Wire shape shared by every API response
///
/// Serializes to `{"message": ..., "data": ..., "isSuccess": ...}`. The
/// status the envelope is sent with is carried alongside but never
/// serialized; `isSuccess` is derived from it, so the flag and the status
/// line cannot disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    message: String,
    data: Option<T>,
    is_success: bool,
    #[serde(skip)]
    status: StatusCode,
}

impl<T> Envelope<T> {
    /// Build an envelope for an arbitrary status
    pub fn new(status: StatusCode, message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            message: message.into(),
            data,
            is_success: status.as_u16() < 400,
            status,
        }
    }

    /// `200 OK` carrying a payload
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self::new(StatusCode::OK, message, Some(data))
    }

    /// `201 Created` carrying the created resource
    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self::new(StatusCode::CREATED, message, Some(data))
    }

    /// Envelope with `data: null`
    ///
    /// Used for failures and for success responses that carry no payload.
    pub fn empty(status: StatusCode, message: impl Into<String>) -> Self {
        Self::new(status, message, None)
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub const fn is_success(&self) -> bool {
        self.is_success
    }

    /// Discard the envelope and keep the payload
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}
