use super::prelude::*;
use crate::{
    gateways::geocode::GeoCodingGateway,
    util::validate::{AutoCorrect, Validate},
};

/// Raw address fields as submitted by a client.
#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct NewAddress {
    pub street : String,
    pub city   : String,
    pub state  : String,
    pub zip    : String,
}

/// A validated address with a freshly resolved position,
/// ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedAddress {
    pub address: Address,
    pub pos: MapPoint,
}

pub fn validate_new_address(new_address: NewAddress) -> Result<Address> {
    let NewAddress {
        street,
        city,
        state,
        zip,
    } = new_address;
    let address = Address {
        street,
        city,
        state,
        zip,
    }
    .auto_correct();
    address.validate()?;
    Ok(address)
}

pub fn resolve_address_position<G>(geo_gw: &G, address: &Address) -> Result<MapPoint>
where
    G: GeoCodingGateway + ?Sized,
{
    let (lat, lng) = geo_gw
        .resolve_address_lat_lng(address)
        .map_err(|err| {
            log::warn!("Failed to geocode address {address:?}: {err}");
            Error::GeocodingService(err)
        })?
        .ok_or_else(|| {
            log::info!("Unable to geocode address {address:?}");
            Error::Geocoding
        })?;
    let pos = MapPoint::try_from_lat_lng_deg(lat, lng).map_err(|err| {
        log::warn!("Geocoding of {address:?} returned an invalid position: {err}");
        err
    })?;
    Ok(pos)
}

/// Validates the submitted fields and resolves the position.
///
/// The position is always resolved from the text fields, i.e.
/// coordinates from other sources are never trusted.
pub fn prepare_new_address<G>(geo_gw: &G, new_address: NewAddress) -> Result<GeocodedAddress>
where
    G: GeoCodingGateway + ?Sized,
{
    let address = validate_new_address(new_address)?;
    let pos = resolve_address_position(geo_gw, &address)?;
    log::debug!("Resolved position of {address:?}: {pos}");
    Ok(GeocodedAddress { address, pos })
}
