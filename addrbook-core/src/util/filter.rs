use super::geo::geodesic_distance;
use addrbook_entities::{
    address::AddressRecord,
    geo::{Distance, MapPoint},
};

// Absorbs rounding errors of the geodesic calculation
// for (almost) identical positions.
const TOLERANCE_METERS: f64 = 1e-3;

pub trait WithinDistance {
    fn within_distance(&self, center: MapPoint, max_distance: Distance) -> bool;
}

impl WithinDistance for MapPoint {
    fn within_distance(&self, center: MapPoint, max_distance: Distance) -> bool {
        geodesic_distance(center, *self).to_meters() <= max_distance.to_meters() + TOLERANCE_METERS
    }
}

impl WithinDistance for AddressRecord {
    fn within_distance(&self, center: MapPoint, max_distance: Distance) -> bool {
        self.pos.within_distance(center, max_distance)
    }
}

/// Retains all items that are not farther away from `center`
/// than `max_distance`. The order of the items is preserved.
pub fn filter_within_distance<T, I>(items: I, center: MapPoint, max_distance: Distance) -> Vec<T>
where
    T: WithinDistance,
    I: IntoIterator<Item = T>,
{
    items
        .into_iter()
        .filter(|item| item.within_distance(center, max_distance))
        .collect()
}
