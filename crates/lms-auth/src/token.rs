use std::fmt;
use std::sync::Arc;

use chrono::TimeDelta;
use jwt_compact::alg::{Hs256, Hs256Key};
use jwt_compact::{AlgorithmExt, Claims, Header, TimeOptions, Token, UntrustedToken, ValidationError};
use lms_config::AuthConfig;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::AuthError;

/// Identity carried inside an access token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct Payload {
    #[serde(flatten)]
    claims: TokenClaims,
    #[serde(rename = "iss", default, skip_serializing_if = "Option::is_none")]
    issuer: Option<String>,
}

/// Signs and verifies HS256 access tokens
#[derive(Clone)]
pub struct TokenService {
    key: Arc<Hs256Key>,
    ttl: TimeDelta,
    issuer: Option<String>,
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("key", &"[REDACTED]")
            .field("ttl", &self.ttl)
            .field("issuer", &self.issuer)
            .finish()
    }
}

impl TokenService {
    /// Build the service from the `[auth]` config section
    ///
    /// # Errors
    ///
    /// Returns an error if the token lifetime cannot be parsed or does not
    /// fit a timestamp offset
    pub fn from_config(config: &AuthConfig) -> anyhow::Result<Self> {
        let ttl = TimeDelta::from_std(config.token_ttl_duration()?)
            .map_err(|e| anyhow::anyhow!("auth.token_ttl is out of range: {e}"))?;

        Ok(Self {
            key: Arc::new(Hs256Key::new(config.jwt_secret.expose_secret().as_bytes())),
            ttl,
            issuer: config.issuer.clone(),
        })
    }

    /// Sign a token for `claims`, valid from now for the configured lifetime
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Signing` if the token cannot be serialized
    pub fn issue(&self, claims: &TokenClaims) -> Result<String, AuthError> {
        let payload = Payload {
            claims: claims.clone(),
            issuer: self.issuer.clone(),
        };
        let claims = Claims::new(payload).set_duration_and_issuance(&TimeOptions::default(), self.ttl);

        Hs256
            .token(&Header::empty(), &claims, &self.key)
            .map_err(|e| AuthError::Signing(e.to_string()))
    }

    /// Verify a token and return the identity it carries
    ///
    /// # Errors
    ///
    /// Returns an `AuthError` describing why the token was rejected
    pub fn verify(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let untrusted = UntrustedToken::new(token).map_err(|e| AuthError::Malformed(e.to_string()))?;

        let token: Token<Payload> = Hs256
            .validator::<Payload>(&self.key)
            .validate(&untrusted)
            .map_err(validation_error)?;

        token
            .claims()
            .validate_expiration(&TimeOptions::default())
            .map_err(validation_error)?;

        let payload = &token.claims().custom;
        if let Some(ref expected) = self.issuer
            && payload.issuer.as_ref() != Some(expected)
        {
            return Err(AuthError::InvalidIssuer);
        }

        Ok(payload.claims.clone())
    }
}

fn validation_error(error: ValidationError) -> AuthError {
    match error {
        ValidationError::InvalidSignature => AuthError::InvalidSignature,
        ValidationError::Expired => AuthError::Expired,
        other => AuthError::InvalidClaims(other.to_string()),
    }
}
