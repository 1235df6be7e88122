/// Address the listener binds to (all IPv4 interfaces).
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// TCP port the listener binds to.
pub const DEFAULT_PORT: u16 = 8081;

/// IANA zone used when rendering `timestamp`.
pub const DEFAULT_TIMEZONE: &str = "Asia/Jakarta";

/// `YYYY-MM-DD HH:MM:SS`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub const COOKIE_NAME: &str = "uuid";
pub const COOKIE_PATH: &str = "/";

/// Default tracing filter, used when `RUST_LOG` is unset. actix-server's own
/// startup chatter is held at `warn` so a clean start logs one line.
pub const DEFAULT_LOG_FILTER: &str = "info,actix_server=warn";

/// # Server Configuration
///
/// Fixed settings for the listener and the identifier endpoint. There are no
/// overrides: the binary always runs with [`ServerConfig::default`].
///
/// ## Fields
/// - `host`: bind address, `0.0.0.0` (IPv4 only)
/// - `port`: bind port, `8081`
/// - `timezone`: zone name for `timestamp`, `Asia/Jakarta`
/// - `timestamp_format`: `strftime` pattern for `timestamp`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: &'static str,
    pub port: u16,
    pub timezone: &'static str,
    pub timestamp_format: &'static str,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            timezone: DEFAULT_TIMEZONE,
            timestamp_format: TIMESTAMP_FORMAT,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> (&'static str, u16) {
        (self.host, self.port)
    }

    /// Port-only label used in the startup log line, e.g. `:8081`.
    pub fn listen_label(&self) -> String {
        format!(":{}", self.port)
    }
}

/// Loads an optional `.env` file. Only the tracing filter reads from the
/// environment.
pub fn load_env() {
    dotenv::dotenv().ok();
}
