#[macro_use]
extern crate log;

use addrbook_core::gateways::geocode::GeoCodingGateway;
use addrbook_db_sqlite::Connections;

mod adapters;
mod web;

pub async fn run(
    connections: Connections,
    enable_cors: bool,
    geo_gw: Box<dyn GeoCodingGateway + Send + Sync>,
    version: &'static str,
) {
    web::run(connections.into(), enable_cors, geo_gw, version).await;
}
