use super::*;
use addrbook_entities as e;

impl From<e::address::AddressRecord> for Address {
    fn from(from: e::address::AddressRecord) -> Self {
        let e::address::AddressRecord { id, address, pos } = from;
        let e::address::Address {
            street,
            city,
            state,
            zip,
        } = address;
        let (latitude, longitude) = pos.to_lat_lng_deg();
        Self {
            id: id.into(),
            street,
            city,
            state,
            zip_code: zip,
            latitude,
            longitude,
        }
    }
}

impl From<Vec<e::address::AddressRecord>> for AddressList {
    fn from(from: Vec<e::address::AddressRecord>) -> Self {
        Self {
            addresses: from.into_iter().map(Into::into).collect(),
        }
    }
}
