pub use addrbook_boundary::*;

use addrbook_core::usecases;

pub mod from_json {
    //! JSON -> Entity

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the use case parameters both are outside this crate.

    pub fn new_address(from: NewAddress) -> usecases::NewAddress {
        let NewAddress {
            street,
            city,
            state,
            zip_code,
            latitude,
            longitude,
        } = from;
        if latitude.is_some() || longitude.is_some() {
            log::debug!("Ignoring submitted coordinates ({latitude:?}, {longitude:?})");
        }
        usecases::NewAddress {
            street,
            city,
            state,
            zip: zip_code,
        }
    }
}
