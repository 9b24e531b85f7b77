use actix_web::web;

pub mod orders;

/// Only the exact order route is registered; every other path, including
/// slash variants of it, falls through to the server's default 404.
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api").configure(orders::init_routes));
}
