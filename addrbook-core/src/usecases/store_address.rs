use super::{prelude::*, GeocodedAddress};

pub fn store_new_address<R>(repo: &R, geocoded: GeocodedAddress) -> Result<AddressId>
where
    R: AddressRepo,
{
    let GeocodedAddress { address, pos } = geocoded;
    let id = repo.create_address(&address, pos)?;
    log::debug!("Stored new address {id}");
    Ok(id)
}

/// Replaces all fields of an existing address.
///
/// Updating an address that doesn't exist is not
/// considered an error.
pub fn store_updated_address<R>(repo: &R, id: AddressId, geocoded: GeocodedAddress) -> Result<()>
where
    R: AddressRepo,
{
    let GeocodedAddress { address, pos } = geocoded;
    let count = repo.update_address(id, &address, pos)?;
    if count == 0 {
        log::warn!("Address {id} does not exist and has not been updated");
    } else {
        log::debug!("Updated address {id}");
    }
    Ok(())
}
