use lms_core::Envelope;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    status: &'static str,
    version: &'static str,
}

/// Health check handler
pub async fn health_handler() -> Envelope<HealthStatus> {
    Envelope::ok(
        "ok",
        HealthStatus {
            status: "healthy",
            version: env!("CARGO_PKG_VERSION"),
        },
    )
}
