pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod server;
pub mod state;
pub mod system;
pub mod telemetry;
