use super::prelude::*;
use crate::util::filter::filter_within_distance;

#[derive(Debug, Clone, Copy)]
pub struct DistanceQuery {
    pub lat: f64,
    pub lng: f64,
    pub max_distance_miles: f64,
}

/// Loads all addresses that are not farther away from the
/// reference point than the given distance.
///
/// This is a linear scan over all stored addresses.
pub fn query_addresses_within_distance<R>(
    repo: &R,
    query: DistanceQuery,
) -> Result<Vec<AddressRecord>>
where
    R: AddressRepo,
{
    let DistanceQuery {
        lat,
        lng,
        max_distance_miles,
    } = query;
    let center = MapPoint::try_from_lat_lng_deg(lat, lng)?;
    let max_distance = Distance::try_from_miles(max_distance_miles)?;
    let candidates = repo.all_addresses()?;
    let total_count = candidates.len();
    let results = filter_within_distance(candidates, center, max_distance);
    log::debug!(
        "Found {} of {} address(es) within {} mi around {}",
        results.len(),
        total_count,
        max_distance_miles,
        center
    );
    Ok(results)
}
