use addrbook_core::{entities::Address, gateways::geocode::GeoCodingGateway};
use geocoding::Openstreetmap;

use crate::forward::resolve_first_match;

/// Geocoding with the public OpenStreetMap Nominatim service
/// or a self-hosted instance.
pub struct Nominatim {
    endpoint: Option<String>,
}

impl Nominatim {
    pub fn new(endpoint: Option<String>) -> Self {
        Self { endpoint }
    }
}

impl GeoCodingGateway for Nominatim {
    fn resolve_address_lat_lng(&self, addr: &Address) -> anyhow::Result<Option<(f64, f64)>> {
        let osm = match &self.endpoint {
            Some(endpoint) => Openstreetmap::new_with_endpoint(endpoint.clone()),
            None => Openstreetmap::new(),
        };
        resolve_first_match("Nominatim", &osm, addr)
    }
}
