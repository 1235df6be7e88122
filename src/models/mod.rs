/// # Liveness Response
///
/// Body of `/healthcheck`: the constant status `"ok"` and the host name.
///
/// ## Example JSON
/// ```json
/// { "status": "ok", "hostname": "web-1" }
/// ```
pub mod health;

/// # Identifier Response
///
/// Body of `/uuid`: a fresh v4 identifier together with the host name, the
/// local time in the fixed zone and the caller's raw peer address.
pub mod identifier;

pub use health::HealthResponse;
pub use identifier::IdentifierResponse;
