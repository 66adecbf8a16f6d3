use super::*;

/// Replaces an existing address and re-resolves its position.
///
/// Nothing is stored if the new address could not be resolved.
pub fn update_address(
    connections: &sqlite::Connections,
    geo_gw: &dyn GeoCodingGateway,
    id: AddressId,
    new_address: usecases::NewAddress,
) -> Result<()> {
    let geocoded = usecases::prepare_new_address(geo_gw, new_address)?;
    usecases::store_updated_address(&connections.exclusive()?, id, geocoded).map_err(|err| {
        warn!("Failed to store updated address {}: {}", id, err);
        err
    })?;
    Ok(())
}
