pub mod prelude {
    use std::collections::HashMap;

    pub use addrbook_core::{
        entities::*,
        gateways::geocode::GeoCodingGateway,
        repositories::{Error as RepoError, *},
        usecases,
    };

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub struct DummyGeoGW {
        known: HashMap<String, (f64, f64)>,
    }

    impl Default for DummyGeoGW {
        fn default() -> Self {
            let mut known = HashMap::new();
            known.insert("20 W 34th St|New York".to_string(), (40.7484, -73.9857));
            known.insert("200 N Spring St|Los Angeles".to_string(), (34.0537, -118.2428));
            Self { known }
        }
    }

    impl GeoCodingGateway for DummyGeoGW {
        fn resolve_address_lat_lng(&self, addr: &Address) -> anyhow::Result<Option<(f64, f64)>> {
            if addr.city == "Offline" {
                anyhow::bail!("Connection refused");
            }
            Ok(self
                .known
                .get(&format!("{}|{}", addr.street, addr.city))
                .copied())
        }
    }

    pub fn empire_state_building() -> usecases::NewAddress {
        usecases::NewAddress {
            street: "20 W 34th St".into(),
            city: "New York".into(),
            state: "NY".into(),
            zip: "10118".into(),
        }
    }

    pub fn city_hall_la() -> usecases::NewAddress {
        usecases::NewAddress {
            street: "200 N Spring St".into(),
            city: "Los Angeles".into(),
            state: "CA".into(),
            zip: "90012".into(),
        }
    }

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
        pub geo_gw: DummyGeoGW,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            addrbook_db_sqlite::run_embedded_database_migrations(
                db_connections.exclusive().unwrap(),
            )
            .unwrap();
            Self {
                db_connections,
                geo_gw: DummyGeoGW::default(),
            }
        }

        pub fn create_address(&self, new_address: usecases::NewAddress) -> AddressId {
            flows::create_address(&self.db_connections, &self.geo_gw, new_address).unwrap()
        }

        pub fn count_addresses(&self) -> usize {
            usecases::count_addresses(&self.db_connections.shared().unwrap()).unwrap()
        }
    }
}
