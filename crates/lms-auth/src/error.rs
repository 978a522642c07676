use lms_core::{ApiError, Failure};

/// Access-token errors
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Token is not a well-formed JWT
    #[error("malformed token: {0}")]
    Malformed(String),

    /// Signature does not match the configured secret
    #[error("invalid token signature")]
    InvalidSignature,

    /// Token is past its `exp` claim
    #[error("token expired")]
    Expired,

    /// `iss` claim does not match the configured issuer
    #[error("unexpected token issuer")]
    InvalidIssuer,

    /// Claims are missing or cannot be decoded
    #[error("invalid token claims: {0}")]
    InvalidClaims(String),

    /// Token could not be created
    #[error("failed to sign token: {0}")]
    Signing(String),
}

impl From<AuthError> for ApiError {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::Expired => Self::unauthorized("Token expired"),
            AuthError::Signing(_) => Self::internal("Could not issue access token"),
            AuthError::Malformed(_)
            | AuthError::InvalidSignature
            | AuthError::InvalidIssuer
            | AuthError::InvalidClaims(_) => Self::unauthorized("Invalid token"),
        }
    }
}

impl From<AuthError> for Failure {
    fn from(error: AuthError) -> Self {
        tracing::debug!(error = %error, "access token rejected");
        Self::Api(error.into())
    }
}

/// Password hashing errors
#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    /// Hashing failed
    #[error("failed to hash password: {0}")]
    Hash(argon2::password_hash::Error),

    /// Stored hash is not a valid PHC string
    #[error("stored password hash is invalid: {0}")]
    InvalidHash(argon2::password_hash::Error),

    /// Verification failed for a reason other than a mismatch
    #[error("failed to verify password: {0}")]
    Verify(argon2::password_hash::Error),
}

impl From<PasswordError> for Failure {
    fn from(error: PasswordError) -> Self {
        Self::Unclassified(anyhow::Error::new(error))
    }
}

#[cfg(test)]
mod tests {
    use lms_core::ErrorKind;

    use super::*;

    #[test]
    fn token_errors_map_to_unauthorized() {
        for error in [
            AuthError::Malformed("x".to_owned()),
            AuthError::InvalidSignature,
            AuthError::InvalidIssuer,
            AuthError::InvalidClaims("x".to_owned()),
        ] {
            let api = ApiError::from(error);
            assert_eq!(api.kind(), ErrorKind::Unauthorized);
            assert_eq!(api.message(), "Invalid token");
        }
    }

    #[test]
    fn expired_token_has_its_own_message() {
        let api = ApiError::from(AuthError::Expired);
        assert_eq!(api.kind(), ErrorKind::Unauthorized);
        assert_eq!(api.message(), "Token expired");
    }

    #[test]
    fn signing_failure_is_internal_without_detail() {
        let api = ApiError::from(AuthError::Signing("hmac exploded".to_owned()));
        assert_eq!(api.kind(), ErrorKind::Internal);
        assert!(!api.message().contains("hmac"));
    }

    #[test]
    fn password_errors_are_unclassified() {
        let failure = Failure::from(PasswordError::InvalidHash(argon2::password_hash::Error::PhcStringField));
        assert!(!failure.is_classified());
    }
}
