use std::any::Any;

use http::StatusCode;
use thiserror::Error;

use crate::{ApiError, Envelope, GENERIC_FAILURE_MESSAGE};

/// Any way a request can fail
///
/// Handlers return `Result<_, Failure>`; `?` converts both [`ApiError`] and
/// [`anyhow::Error`]. Classification is by variant: only `Api` reaches the
/// client with its own status and message.
#[derive(Debug, Error)]
pub enum Failure {
    /// Failure from the taxonomy
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Anything else; its detail is only ever logged
    #[error(transparent)]
    Unclassified(#[from] anyhow::Error),
}

impl Failure {
    /// Wrap an arbitrary message as an unclassified failure
    pub fn unclassified<M>(message: M) -> Self
    where
        M: std::fmt::Display + std::fmt::Debug + Send + Sync + 'static,
    {
        Self::Unclassified(anyhow::Error::msg(message))
    }

    /// Turn a caught panic payload into an unclassified failure
    pub fn from_panic(payload: Box<dyn Any + Send + 'static>) -> Self {
        let detail = match payload.downcast::<String>() {
            Ok(s) => *s,
            Err(payload) => payload
                .downcast_ref::<&str>()
                .map_or_else(|| "unknown panic payload".to_owned(), |s| (*s).to_owned()),
        };

        Self::Unclassified(anyhow::anyhow!("handler panicked: {detail}"))
    }

    pub const fn is_classified(&self) -> bool {
        matches!(self, Self::Api(_))
    }

    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Api(error) => error.status_code(),
            Self::Unclassified(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Envelope sent to the client
    ///
    /// Unclassified failures always produce the generic message.
    pub fn to_envelope(&self) -> Envelope<()> {
        match self {
            Self::Api(error) => error.to_envelope(),
            Self::Unclassified(_) => Envelope::empty(StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE_MESSAGE),
        }
    }

    /// Record the failure for operators
    pub fn report(&self) {
        match self {
            Self::Api(error) if error.status_code().is_server_error() => {
                tracing::error!(
                    kind = error.kind().as_str(),
                    status = error.status_code().as_u16(),
                    message = error.message(),
                    "request failed"
                );
            }
            Self::Api(error) => {
                tracing::warn!(
                    kind = error.kind().as_str(),
                    status = error.status_code().as_u16(),
                    message = error.message(),
                    "request rejected"
                );
            }
            Self::Unclassified(error) => {
                tracing::error!(error = ?error, "unclassified request failure");
            }
        }
    }
}
