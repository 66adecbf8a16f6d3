//! Distances on the WGS84 ellipsoid.

use addrbook_entities::geo::{Distance, MapPoint};
use geo::{GeodesicDistance, Point};

fn to_point(pos: MapPoint) -> Point<f64> {
    Point::new(pos.lng_deg(), pos.lat_deg())
}

/// Shortest distance between two points on the surface
/// of the WGS84 ellipsoid (Karney's geodesic algorithm).
pub fn geodesic_distance(a: MapPoint, b: MapPoint) -> Distance {
    let meters = to_point(a).geodesic_distance(&to_point(b));
    // Valid map points always yield a finite, non-negative result
    Distance::try_from_meters(meters).unwrap_or_else(|_| {
        debug_assert!(false, "Invalid geodesic distance between {a} and {b}: {meters}");
        Distance::zero()
    })
}
