pub mod nominatim;
pub mod opencage;

mod forward;
