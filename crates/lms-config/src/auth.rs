use std::time::Duration;

use secrecy::SecretString;
use serde::Deserialize;

/// Minimum accepted length of the HMAC signing secret, in bytes
pub const MIN_SECRET_LEN: usize = 32;

/// Access-token signing configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthConfig {
    /// HMAC secret used to sign and verify access tokens
    pub jwt_secret: SecretString,

    /// Token lifetime, e.g. `"1h"` or `"30m"`
    #[serde(default = "default_token_ttl")]
    pub token_ttl: String,

    /// Expected `iss` claim; set on issued tokens and enforced on verify
    #[serde(default)]
    pub issuer: Option<String>,
}

impl AuthConfig {
    /// Parse the configured token lifetime
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a valid duration
    pub fn token_ttl_duration(&self) -> anyhow::Result<Duration> {
        duration_str::parse(&self.token_ttl)
            .map_err(|e| anyhow::anyhow!("invalid auth.token_ttl '{}': {e}", self.token_ttl))
    }
}

fn default_token_ttl() -> String {
    "1h".to_string()
}
