use actix_web::dev::Server;
use actix_web::{middleware, App, HttpServer};
use std::net::SocketAddr;

use crate::api;
use crate::config::ServerConfig;

/// Binds the listener and returns the not-yet-polled server with the
/// addresses it actually bound (useful when the port is 0).
pub fn bind(config: &ServerConfig) -> std::io::Result<(Server, Vec<SocketAddr>)> {
    let server = HttpServer::new(|| {
        App::new()
            // Log each incoming request with status, time, and size
            .wrap(middleware::Logger::new("%a \"%r\" %s %b %T"))
            .configure(api::init_routes)
    })
    .bind(config.bind_addr())?;

    let addrs = server.addrs();
    Ok((server.run(), addrs))
}
