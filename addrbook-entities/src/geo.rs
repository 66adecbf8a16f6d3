use std::fmt;
use thiserror::Error;

pub const LAT_DEG_MIN: f64 = -90.0;
pub const LAT_DEG_MAX: f64 = 90.0;
pub const LNG_DEG_MIN: f64 = -180.0;
pub const LNG_DEG_MAX: f64 = 180.0;

const METERS_PER_MILE: f64 = 1_609.344;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("Coordinate out of range: ({lat}, {lng})")]
pub struct CoordRangeError {
    pub lat: f64,
    pub lng: f64,
}

/// A geographical position in decimal degrees (WGS84).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

impl MapPoint {
    pub fn is_valid_lat_deg(lat: f64) -> bool {
        (LAT_DEG_MIN..=LAT_DEG_MAX).contains(&lat)
    }

    pub fn is_valid_lng_deg(lng: f64) -> bool {
        (LNG_DEG_MIN..=LNG_DEG_MAX).contains(&lng)
    }

    pub fn try_from_lat_lng_deg<LAT, LNG>(lat: LAT, lng: LNG) -> Result<Self, CoordRangeError>
    where
        LAT: Into<f64>,
        LNG: Into<f64>,
    {
        let lat = lat.into();
        let lng = lng.into();
        // NaN is never contained in a range
        if Self::is_valid_lat_deg(lat) && Self::is_valid_lng_deg(lng) {
            Ok(Self { lat, lng })
        } else {
            Err(CoordRangeError { lat, lng })
        }
    }

    pub const fn lat_deg(self) -> f64 {
        self.lat
    }

    pub const fn lng_deg(self) -> f64 {
        self.lng
    }

    pub const fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("Invalid distance: {0}")]
pub struct InvalidDistanceError(pub f64);

/// A non-negative length on the earth's surface.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Distance(f64); // meters

impl Distance {
    pub const fn zero() -> Self {
        Self(0.0)
    }

    pub fn try_from_meters(meters: f64) -> Result<Self, InvalidDistanceError> {
        if meters.is_finite() && meters >= 0.0 {
            Ok(Self(meters))
        } else {
            Err(InvalidDistanceError(meters))
        }
    }

    pub fn try_from_miles(miles: f64) -> Result<Self, InvalidDistanceError> {
        if miles.is_finite() && miles >= 0.0 {
            Ok(Self(miles * METERS_PER_MILE))
        } else {
            Err(InvalidDistanceError(miles))
        }
    }

    pub const fn to_meters(self) -> f64 {
        self.0
    }

    pub fn to_miles(self) -> f64 {
        self.0 / METERS_PER_MILE
    }
}
