mod delete_address;
mod error;
mod load_addresses;
mod prepare_address;
mod query_addresses;
mod store_address;


pub use self::{
    delete_address::*, error::Error, load_addresses::*, prepare_address::*, query_addresses::*,
    store_address::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
