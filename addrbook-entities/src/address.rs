use crate::{geo::MapPoint, id::AddressId};

/// A postal address with all required text fields.
///
/// Instances are created after validating user input,
/// i.e. none of the fields is empty.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub street : String,
    pub city   : String,
    pub state  : String,
    pub zip    : String,
}

/// A stored address together with its resolved position.
#[derive(Debug, Clone, PartialEq)]
pub struct AddressRecord {
    pub id: AddressId,
    pub address: Address,
    pub pos: MapPoint,
}
