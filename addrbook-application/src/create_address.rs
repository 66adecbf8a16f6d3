use super::*;

pub fn create_address(
    connections: &sqlite::Connections,
    geo_gw: &dyn GeoCodingGateway,
    new_address: usecases::NewAddress,
) -> Result<AddressId> {
    // Resolve the position before locking the database
    let geocoded = usecases::prepare_new_address(geo_gw, new_address)?;
    let id = usecases::store_new_address(&connections.exclusive()?, geocoded).map_err(|err| {
        warn!("Failed to store new address: {}", err);
        err
    })?;
    info!("Added address {}", id);
    Ok(id)
}
