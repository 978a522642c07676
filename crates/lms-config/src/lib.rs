#![allow(clippy::must_use_candidate)]

pub mod auth;
pub mod cors;
mod env;
pub mod health;
mod loader;
pub mod server;
pub mod telemetry;

use serde::Deserialize;

pub use auth::*;
pub use cors::*;
pub use health::*;
pub use server::*;
pub use telemetry::{ExportProtocol, ExporterConfig, LogFormat, TelemetryConfig};

/// Top-level LMS backend configuration
///
/// Loaded once at startup and passed by reference to everything that needs
/// it; request handling never reads the process environment.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Access-token signing configuration
    #[serde(default)]
    pub auth: Option<AuthConfig>,
    /// Logging and trace export configuration
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}
