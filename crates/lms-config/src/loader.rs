use std::path::Path;

use secrecy::ExposeSecret;

use crate::{AnyOrArray, Config, MIN_SECRET_LEN};

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let config = Self::from_toml(&raw)?;
        tracing::debug!(path = %path.display(), "configuration loaded");

        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, parsing, or validation fails
    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error describing the first inconsistency found
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_health_config()?;
        self.validate_cors_config()?;
        self.validate_auth_config()?;
        self.validate_telemetry_config()?;
        Ok(())
    }

    fn validate_health_config(&self) -> anyhow::Result<()> {
        let health = &self.server.health;
        if health.enabled && !health.path.starts_with('/') {
            anyhow::bail!("server.health.path must start with '/': `{}`", health.path);
        }
        if health.enabled && (health.path == "/" || health.path == "/api" || health.path.starts_with("/api/")) {
            anyhow::bail!("server.health.path collides with a reserved route: `{}`", health.path);
        }
        Ok(())
    }

    /// Browsers refuse credentialed responses with a wildcard origin
    fn validate_cors_config(&self) -> anyhow::Result<()> {
        let Some(ref cors) = self.server.cors else {
            return Ok(());
        };

        if cors.credentials && cors.origins == AnyOrArray::Any {
            anyhow::bail!("server.cors.credentials requires an explicit origins list, not \"*\"");
        }

        Ok(())
    }

    fn validate_auth_config(&self) -> anyhow::Result<()> {
        let Some(ref auth) = self.auth else {
            return Ok(());
        };

        let secret_len = auth.jwt_secret.expose_secret().len();
        if secret_len == 0 {
            anyhow::bail!("auth.jwt_secret must not be empty");
        }
        if secret_len < MIN_SECRET_LEN {
            anyhow::bail!("auth.jwt_secret must be at least {MIN_SECRET_LEN} bytes, got {secret_len}");
        }

        if auth.token_ttl_duration()?.is_zero() {
            anyhow::bail!("auth.token_ttl must be greater than 0");
        }

        Ok(())
    }

    fn validate_telemetry_config(&self) -> anyhow::Result<()> {
        let Some(ref telemetry) = self.telemetry else {
            return Ok(());
        };

        if !(0.0..=1.0).contains(&telemetry.sampling_rate) {
            anyhow::bail!(
                "telemetry.sampling_rate must be between 0.0 and 1.0, got {}",
                telemetry.sampling_rate
            );
        }

        Ok(())
    }
}
