use uuid_server::config::{self, ServerConfig};
use uuid_server::state::AppState;
use uuid_server::{server, telemetry};

/// UUID Service Entry Point
///
/// Launches the Actix-web HTTP server with:
/// - `/uuid`: fresh identifier, host name, Jakarta time and peer address
/// - `/healthcheck`: liveness probe
///
/// # Configuration
/// - Binds to `0.0.0.0:8081` (IPv4), no flags or overrides
/// - `RUST_LOG` (optionally from a `.env` file) sets the log filter
///
/// A bind or serve failure is logged and exits the process with status 1.
#[actix_web::main]
async fn main() {
    config::load_env();
    telemetry::init();

    if let Err(err) = run(ServerConfig::default()).await {
        tracing::error!("Could not start server: {}", err);
        std::process::exit(1);
    }
}

async fn run(config: ServerConfig) -> std::io::Result<()> {
    let server = server::bind(&config, AppState::system(config.clone()))?;

    tracing::info!("Starting server on {}", config.listen_label());

    server.await
}
