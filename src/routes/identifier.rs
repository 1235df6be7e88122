use crate::config::{COOKIE_NAME, COOKIE_PATH};
use crate::error::ServiceError;
use crate::models::IdentifierResponse;
use crate::models::identifier::format_timestamp;
use crate::state::AppState;
use actix_web::cookie::Cookie;
use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse, web};
use uuid::Uuid;

/// # Identifier Endpoint
///
/// Answers any method on `/uuid` with a new random v4 identifier and the
/// server's view of the call.
///
/// ## Response
///
/// - **200 OK**: [`IdentifierResponse`] as `application/json`, plus
///   `Set-Cookie: uuid=<id>; Path=/`
/// - **500 Internal Server Error**: plain text, one of
///   - `could not get hostname`
///   - the time-zone lookup failure
///   - the JSON encoding failure
///
/// Failures return before the cookie or any body is written.
pub async fn issue_identifier(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ServiceError> {
    let id = Uuid::new_v4();

    let hostname = state.host.hostname().map_err(ServiceError::Hostname)?;

    let zone = state
        .zones
        .locate(state.config.timezone)
        .map_err(ServiceError::TimeZone)?;
    let local = state.clock.now().with_timezone(&zone);
    let timestamp = format_timestamp(&local, state.config.timestamp_format);

    // Raw transport address, port included; not parsed or validated.
    let client_ip = req
        .peer_addr()
        .map(|addr| addr.to_string())
        .unwrap_or_default();

    let response = IdentifierResponse::new(id, hostname, timestamp, client_ip);
    let body = serde_json::to_vec(&response)?;

    tracing::debug!(uuid = %response.uuid, client_ip = %response.client_ip, "issued identifier");

    let cookie = Cookie::build(COOKIE_NAME, response.uuid)
        .path(COOKIE_PATH)
        .finish();

    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .content_type(ContentType::json())
        .body(body))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/uuid").to(issue_identifier));
}
