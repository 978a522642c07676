//! Shared API contract for the LMS backend
//!
//! Every HTTP response is an [`Envelope`]. Anticipated failures are built
//! from the closed [`ErrorKind`] taxonomy via [`ApiError`], and anything a
//! handler did not anticipate travels as [`Failure::Unclassified`] until the
//! error boundary collapses it into the generic server error.

#![allow(clippy::must_use_candidate)]

mod envelope;
mod error;
mod failure;

#[cfg(feature = "http")]
mod boundary;
#[cfg(feature = "http")]
mod extract;

pub use envelope::{Envelope, GENERIC_FAILURE_MESSAGE};
pub use error::{ApiError, ErrorKind};
pub use failure::Failure;

#[cfg(feature = "http")]
pub use extract::ApiJson;

/// Result type returned by request handlers
pub type ApiResult<T> = Result<Envelope<T>, Failure>;
