use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

/// # Identifier Response
///
/// Built fresh for every `/uuid` call; nothing is stored.
///
/// ## Fields
/// - `uuid`: random v4 identifier, hyphenated lowercase
/// - `hostname`: name the operating system reports
/// - `timestamp`: local time in the configured zone, `YYYY-MM-DD HH:MM:SS`
/// - `clientip`: peer address exactly as the listener saw it, port included
///
/// ## Example JSON
/// ```json
/// {
///   "uuid": "9b2f3c1e-6a0d-4f5e-8c7b-2d1a0e9f8b7c",
///   "hostname": "web-1",
///   "timestamp": "2024-03-10 22:30:45",
///   "clientip": "10.0.0.5:54321"
/// }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize)]
pub struct IdentifierResponse {
    pub uuid: String,
    pub hostname: String,
    pub timestamp: String,
    #[serde(rename = "clientip")]
    pub client_ip: String,
}

impl IdentifierResponse {
    pub fn new(id: Uuid, hostname: String, timestamp: String, client_ip: String) -> Self {
        Self {
            uuid: id.hyphenated().to_string(),
            hostname,
            timestamp,
            client_ip,
        }
    }
}

/// Renders `at` with the given `strftime` pattern in its own zone.
pub fn format_timestamp<Tz>(at: &DateTime<Tz>, pattern: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.format(pattern).to_string()
}
