pub mod entities {
    pub use addrbook_entities::{address::*, geo::*, id::*};
}

pub mod gateways;
pub mod repositories;
pub mod usecases;
pub mod util;

pub use repositories::Error as RepoError;
