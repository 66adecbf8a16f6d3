use super::prelude::*;

pub fn get_address<R: AddressRepo>(repo: &R, id: AddressId) -> Result<AddressRecord> {
    Ok(repo.get_address(id)?)
}

pub fn count_addresses<R: AddressRepo>(repo: &R) -> Result<usize> {
    Ok(repo.count_addresses()?)
}
