use diesel::{
    self,
    prelude::{Connection as DieselConnection, *},
    result::Error as DieselError,
};

use addrbook_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod address;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        _ => repo::Error::Other(err.into()),
    }
}
