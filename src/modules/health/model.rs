use serde::Serialize;
use utoipa::ToSchema;

/// Banner returned from the root path.
#[derive(Debug, Serialize, ToSchema)]
pub struct RootResponse {
    #[schema(example = "✅ Insurai Backend is running!")]
    pub status: String,
    /// RFC 3339 timestamp taken when the request was served.
    pub timestamp: String,
    #[schema(example = "Welcome to Insurai Insurance API")]
    pub message: String,
}

/// Service-level health report.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "UP")]
    pub status: String,
    #[schema(example = "Insurai Backend")]
    pub service: String,
}

/// Minimal status body in the actuator format monitoring probes expect.
#[derive(Debug, Serialize, ToSchema)]
pub struct ActuatorHealthResponse {
    #[schema(example = "UP")]
    pub status: String,
}
