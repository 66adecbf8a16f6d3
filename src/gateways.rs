use addrbook_core::gateways::geocode::GeoCodingGateway;
use addrbook_gateways::{nominatim::Nominatim, opencage::OpenCage};

use crate::config;

pub fn geocoding_gateway(cfg: &config::Geocoding) -> Box<dyn GeoCodingGateway + Send + Sync> {
    match &cfg.gateway {
        config::GeocodingGateway::Nominatim { endpoint } => {
            match endpoint {
                Some(endpoint) => log::info!("Use Nominatim geocoding gateway ({endpoint})"),
                None => log::info!("Use public Nominatim geocoding gateway"),
            }
            Box::new(Nominatim::new(endpoint.clone()))
        }
        config::GeocodingGateway::OpenCage { api_key } => {
            log::info!("Use OpenCage geocoding gateway");
            Box::new(OpenCage::new(api_key.clone()))
        }
    }
}
