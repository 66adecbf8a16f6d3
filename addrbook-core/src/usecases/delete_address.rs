use super::prelude::*;

/// Deleting an address that doesn't exist is not
/// considered an error, i.e. this operation is idempotent.
pub fn delete_address<R>(repo: &R, id: AddressId) -> Result<()>
where
    R: AddressRepo,
{
    let count = repo.delete_address(id)?;
    if count == 0 {
        log::debug!("Address {id} does not exist and has not been deleted");
    } else {
        log::debug!("Deleted address {id}");
    }
    Ok(())
}
