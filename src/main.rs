use env_logger::Env;
use log::{error, info};
mod api;
mod config;
mod error;
mod order_batch;
mod server;
use config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger (RUST_LOG overrides default if set)
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = ServerConfig::default();

    // No fallback port: without the listener there is nothing to mock
    let (server, _addrs) = match server::bind(&config) {
        Ok(bound) => bound,
        Err(e) => {
            error!("Failed to bind {}:{}: {}", config.host, config.port, e);
            return Err(e);
        }
    };

    info!("Mock Marketplace API running on {} (STRICT array-only mode)", config.public_url());
    server.await
}
