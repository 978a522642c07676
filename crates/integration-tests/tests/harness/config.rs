//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use lms_config::{AuthConfig, Config, CorsConfig, ServerConfig};
use secrecy::SecretString;

pub const TEST_SECRET: &str = "integration-test-secret-0123456789";

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    ..ServerConfig::default()
                },
                auth: None,
                telemetry: None,
            },
        }
    }

    /// Enable token signing with a fixed test secret
    pub fn with_auth(mut self) -> Self {
        self.config.auth = Some(AuthConfig {
            jwt_secret: SecretString::from(TEST_SECRET),
            token_ttl: "1h".to_owned(),
            issuer: Some("lms-tests".to_owned()),
        });
        self
    }

    /// Set CORS configuration
    pub fn with_cors(mut self, config: CorsConfig) -> Self {
        self.config.server.cors = Some(config);
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Disable response compression
    pub fn without_compression(mut self) -> Self {
        self.config.server.compression = false;
        self
    }

    /// Disable the default security headers
    pub fn without_security_headers(mut self) -> Self {
        self.config.server.security_headers = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
