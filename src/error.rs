use actix_web::http::StatusCode;
use actix_web::http::header::{self, ContentType};
use actix_web::{HttpResponse, ResponseError};

/// # Request Failure
///
/// Every variant fails only the request that produced it and is rendered as a
/// `500 Internal Server Error` with a plain-text body.
///
/// - `Hostname`: host name resolution failed, rendered with a fixed message
/// - `TimeZone`: the zone database lookup failed, rendered with its description
/// - `Serialization`: JSON encoding failed, rendered with the encoder's description
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("could not get hostname")]
    Hostname(#[source] std::io::Error),

    #[error("{0}")]
    TimeZone(String),

    #[error("{0}")]
    Serialization(#[from] serde_json::Error),
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ServiceError::Hostname(source) => {
                tracing::error!(error = %source, "host name lookup failed")
            }
            other => tracing::error!(error = %other, "request failed"),
        }

        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .insert_header((header::X_CONTENT_TYPE_OPTIONS, "nosniff"))
            .body(format!("{}\n", self))
    }
}
