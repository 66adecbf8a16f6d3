pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{address_builder::*, address_record_builder::*};

pub mod address_builder {

    use super::*;
    use crate::address::*;

    #[derive(Debug)]
    pub struct AddressBuild {
        addr: Address,
    }

    impl AddressBuild {
        pub fn street(mut self, x: &str) -> Self {
            self.addr.street = x.into();
            self
        }
        pub fn city(mut self, x: &str) -> Self {
            self.addr.city = x.into();
            self
        }
        pub fn state(mut self, x: &str) -> Self {
            self.addr.state = x.into();
            self
        }
        pub fn zip(mut self, x: &str) -> Self {
            self.addr.zip = x.into();
            self
        }
        pub fn finish(self) -> Address {
            self.addr
        }
    }

    impl Builder for Address {
        type Build = AddressBuild;
        fn build() -> AddressBuild {
            AddressBuild {
                addr: Address {
                    street: "1 Main St".into(),
                    city: "Springfield".into(),
                    state: "IL".into(),
                    zip: "62701".into(),
                },
            }
        }
    }
}

pub mod address_record_builder {

    use super::*;
    use crate::{address::*, geo::*, id::*};

    #[derive(Debug)]
    pub struct AddressRecordBuild {
        record: AddressRecord,
    }

    impl AddressRecordBuild {
        pub fn id(mut self, id: i64) -> Self {
            self.record.id = id.into();
            self
        }
        pub fn address(mut self, address: Address) -> Self {
            self.record.address = address;
            self
        }
        pub fn city(mut self, city: &str) -> Self {
            self.record.address.city = city.into();
            self
        }
        pub fn pos(mut self, lat: f64, lng: f64) -> Self {
            self.record.pos = MapPoint::try_from_lat_lng_deg(lat, lng).unwrap();
            self
        }
        pub fn finish(self) -> AddressRecord {
            self.record
        }
    }

    impl Builder for AddressRecord {
        type Build = AddressRecordBuild;
        fn build() -> AddressRecordBuild {
            AddressRecordBuild {
                record: AddressRecord {
                    id: AddressId::from(1),
                    address: Address::build().finish(),
                    pos: MapPoint::try_from_lat_lng_deg(0.0, 0.0).unwrap(),
                },
            }
        }
    }
}
