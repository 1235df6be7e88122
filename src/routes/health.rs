use crate::error::ServiceError;
use crate::models::HealthResponse;
use crate::state::AppState;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, web};

/// # Liveness Probe
///
/// Answers any method on `/healthcheck`.
///
/// ## Response
///
/// - **200 OK**: `{"status":"ok","hostname":"<host>"}`, `application/json`
/// - **500 Internal Server Error**: `could not get hostname`, plain text
pub async fn healthcheck(state: web::Data<AppState>) -> Result<HttpResponse, ServiceError> {
    let hostname = state.host.hostname().map_err(ServiceError::Hostname)?;
    let body = serde_json::to_vec(&HealthResponse::ok(hostname))?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::json())
        .body(body))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/healthcheck").to(healthcheck));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use crate::system::{MockClock, MockHostInfo, MockTimeZones};
    use actix_web::{App, test};
    use std::io;
    use std::sync::Arc;

    fn state_with_host(host: MockHostInfo) -> AppState {
        AppState::new(
            ServerConfig::default(),
            Arc::new(host),
            Arc::new(MockClock::new()),
            Arc::new(MockTimeZones::new()),
        )
    }

    #[actix_web::test]
    async fn test_healthcheck_reports_host() {
        let mut host = MockHostInfo::new();
        host.expect_hostname()
            .returning(|| Ok("test-host".to_string()));

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with_host(host)))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/healthcheck").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200, "Status code should be 200 OK");
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "application/json"
        );

        let body = test::read_body(resp).await;
        assert_eq!(body, r#"{"status":"ok","hostname":"test-host"}"#);
    }

    #[actix_web::test]
    async fn test_healthcheck_accepts_any_method() {
        let mut host = MockHostInfo::new();
        host.expect_hostname()
            .times(2)
            .returning(|| Ok("test-host".to_string()));

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with_host(host)))
                .configure(configure_routes),
        )
        .await;

        let post = test::TestRequest::post().uri("/healthcheck").to_request();
        assert_eq!(test::call_service(&app, post).await.status(), 200);

        let delete = test::TestRequest::delete().uri("/healthcheck").to_request();
        assert_eq!(test::call_service(&app, delete).await.status(), 200);
    }

    #[actix_web::test]
    async fn test_healthcheck_hostname_failure() {
        let mut host = MockHostInfo::new();
        host.expect_hostname()
            .returning(|| Err(io::Error::other("uname failed")));

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with_host(host)))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/healthcheck").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 500);
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "text/plain; charset=utf-8"
        );

        let body = test::read_body(resp).await;
        assert_eq!(body, "could not get hostname\n");
    }
}
