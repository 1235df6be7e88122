use actix_web::web;

/// # Liveness Endpoint
///
/// `/healthcheck`, any method.
///
/// ## Example Response
///
/// ```json
/// { "status": "ok", "hostname": "web-1" }
/// ```
pub mod health;

/// # Identifier Endpoint
///
/// `/uuid`, any method. Returns a new v4 identifier and sets it as the `uuid`
/// cookie.
///
/// ## Example Response
///
/// ```json
/// {
///   "uuid": "9b2f3c1e-6a0d-4f5e-8c7b-2d1a0e9f8b7c",
///   "hostname": "web-1",
///   "timestamp": "2024-03-10 22:30:45",
///   "clientip": "10.0.0.5:54321"
/// }
/// ```
pub mod identifier;


/// # Route Configuration
///
/// Mounts both endpoints at the root. Anything else falls through to the
/// default 404.
///
/// ```text
/// ANY /uuid        - fresh identifier and server metadata
/// ANY /healthcheck - liveness probe
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(identifier::configure_routes)
        .configure(health::configure_routes);
}
