use crate::entities::Address;

/// Forward geocoding of postal addresses.
///
/// Returns the `(latitude, longitude)` of the best match in
/// decimal degrees or `None` if the address could not be resolved.
/// Errors are reserved for failures of the geocoding service itself.
pub trait GeoCodingGateway {
    fn resolve_address_lat_lng(&self, addr: &Address) -> anyhow::Result<Option<(f64, f64)>>;
}
