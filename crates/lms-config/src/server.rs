use std::net::SocketAddr;

use serde::Deserialize;

use crate::{cors::CorsConfig, health::HealthConfig};

/// Port the backend listens on when no address is configured
pub const DEFAULT_PORT: u16 = 4000;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub listen_address: Option<SocketAddr>,
    /// Compress response bodies when the client accepts it
    #[serde(default = "default_true")]
    pub compression: bool,
    /// Send the hardened default security headers
    #[serde(default = "default_true")]
    pub security_headers: bool,
    #[serde(default)]
    pub health: HealthConfig,
    #[serde(default)]
    pub cors: Option<CorsConfig>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_address: None,
            compression: true,
            security_headers: true,
            health: HealthConfig::default(),
            cors: None,
        }
    }
}

impl ServerConfig {
    /// Configured listen address, or all interfaces on [`DEFAULT_PORT`]
    pub fn listen_address_or_default(&self) -> SocketAddr {
        self.listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)))
    }
}

#[allow(clippy::missing_const_for_fn)]
fn default_true() -> bool {
    true
}
