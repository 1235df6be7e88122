use std::sync::Arc;

use crate::config::ServerConfig;
use crate::system::{Clock, HostInfo, SystemClock, SystemHost, TimeZones, TzDatabase};

/// Read-only collaborators shared by every worker.
///
/// Registered once as `web::Data<AppState>`; handlers never mutate it.
#[derive(Clone)]
pub struct AppState {
    pub config: ServerConfig,
    pub host: Arc<dyn HostInfo>,
    pub clock: Arc<dyn Clock>,
    pub zones: Arc<dyn TimeZones>,
}

impl AppState {
    pub fn new(
        config: ServerConfig,
        host: Arc<dyn HostInfo>,
        clock: Arc<dyn Clock>,
        zones: Arc<dyn TimeZones>,
    ) -> Self {
        Self {
            config,
            host,
            clock,
            zones,
        }
    }

    /// State wired to the operating system, the real clock and the bundled
    /// zone database.
    pub fn system(config: ServerConfig) -> Self {
        Self::new(
            config,
            Arc::new(SystemHost),
            Arc::new(SystemClock),
            Arc::new(TzDatabase),
        )
    }
}
