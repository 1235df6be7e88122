use serde::{Deserialize, Serialize};

pub const STATUS_OK: &str = "ok";

/// # Liveness Response
///
/// Returned by `/healthcheck` once the host name resolves. `status` is always
/// `"ok"`; the endpoint performs no downstream checks.
///
/// ## Example JSON
/// ```json
/// { "status": "ok", "hostname": "web-1" }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub hostname: String,
}

impl HealthResponse {
    pub fn ok(hostname: impl Into<String>) -> Self {
        Self {
            status: STATUS_OK.to_string(),
            hostname: hostname.into(),
        }
    }
}
