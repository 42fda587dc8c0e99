#[macro_use]
extern crate log;

use sr_core::gateways::search::SearchGateway;
use sr_db_sqlite::Connections;

mod web;

pub use web::Cfg;

pub async fn run(
    connections: Connections,
    cfg: Cfg,
    search_gw: Box<dyn SearchGateway + Send + Sync>,
) {
    web::run(connections.into(), cfg, search_gw).await;
}
