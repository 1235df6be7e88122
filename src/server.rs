use std::io;
use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::middleware::Logger;
use actix_web::web::{self, Data};
use actix_web::{App, HttpServer};

use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;

fn mount(cfg: &mut web::ServiceConfig, state: &Data<AppState>) {
    cfg.app_data(state.clone()).configure(routes::configure);
}

/// # Server Bootstrap
///
/// Binds `config.bind_addr()` and returns the server, not yet polled. A bind
/// failure (port in use, permission denied) comes back as `Err` before any
/// worker starts; the caller decides whether that is fatal.
pub fn bind(config: &ServerConfig, state: AppState) -> io::Result<Server> {
    let state = Data::new(state);

    let server = HttpServer::new(move || {
        let state = state.clone();
        App::new()
            .wrap(Logger::default())
            .configure(move |cfg| mount(cfg, &state))
    })
    .bind(config.bind_addr())?
    .run();

    Ok(server)
}

/// Same as [`bind`] on a listener the caller already owns.
pub fn listen(listener: TcpListener, state: AppState) -> io::Result<Server> {
    let state = Data::new(state);

    let server = HttpServer::new(move || {
        let state = state.clone();
        App::new()
            .wrap(Logger::default())
            .configure(move |cfg| mount(cfg, &state))
    })
    .listen(listener)?
    .run();

    Ok(server)
}
