use std::{ops::Deref, sync::Arc};

use addrbook_core::gateways::geocode::GeoCodingGateway;

/// Shared geocoding gateway that could be moved
/// into blocking tasks.
#[derive(Clone)]
pub struct GeoCoding(pub Arc<dyn GeoCodingGateway + Send + Sync>);

impl Deref for GeoCoding {
    type Target = dyn GeoCodingGateway + Send + Sync;
    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

pub struct Version(pub &'static str);
