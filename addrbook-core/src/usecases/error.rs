use crate::{
    entities::{CoordRangeError, InvalidDistanceError},
    repositories,
    util::validate::AddressInvalidation,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing street")]
    Street,
    #[error("Missing city")]
    City,
    #[error("Missing state")]
    State,
    #[error("Missing zip code")]
    Zip,
    #[error("Unable to geocode address")]
    Geocoding,
    #[error("Geocoding service unavailable")]
    GeocodingService(#[source] anyhow::Error),
    #[error("Invalid position")]
    InvalidPosition,
    #[error("Invalid distance")]
    InvalidDistance,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<AddressInvalidation> for Error {
    fn from(err: AddressInvalidation) -> Self {
        match err {
            AddressInvalidation::Street => Self::Street,
            AddressInvalidation::City => Self::City,
            AddressInvalidation::State => Self::State,
            AddressInvalidation::Zip => Self::Zip,
        }
    }
}

impl From<CoordRangeError> for Error {
    fn from(_: CoordRangeError) -> Self {
        Self::InvalidPosition
    }
}

impl From<InvalidDistanceError> for Error {
    fn from(_: InvalidDistanceError) -> Self {
        Self::InvalidDistance
    }
}
