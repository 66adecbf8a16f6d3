use addrbook_core::{entities::Address, gateways::geocode::GeoCodingGateway};
use geocoding::Opencage;

use crate::forward::resolve_first_match;

pub struct OpenCage {
    api_key: String,
}

impl OpenCage {
    pub fn new(api_key: String) -> Self {
        Self { api_key }
    }
}

impl GeoCodingGateway for OpenCage {
    fn resolve_address_lat_lng(&self, addr: &Address) -> anyhow::Result<Option<(f64, f64)>> {
        let oc_req = Opencage::new(self.api_key.clone());
        resolve_first_match("OpenCage", &oc_req, addr)
    }
}
