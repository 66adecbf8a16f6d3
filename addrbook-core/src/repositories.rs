// Low-level database access traits.
// Each repository is responsible for a single entity.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait AddressRepo {
    fn create_address(&self, address: &Address, pos: MapPoint) -> Result<AddressId>;

    // Returns the number of affected rows, i.e. 0 if no
    // address with the given id exists.
    fn update_address(&self, id: AddressId, address: &Address, pos: MapPoint) -> Result<usize>;
    fn delete_address(&self, id: AddressId) -> Result<usize>;

    fn get_address(&self, id: AddressId) -> Result<AddressRecord>;
    fn all_addresses(&self) -> Result<Vec<AddressRecord>>;
    fn count_addresses(&self) -> Result<usize>;
}
