use addrbook_core::entities::Address;
use anyhow::{anyhow, Result};
use geocoding::Forward;

/// Renders an address as a single-line query:
/// `"<street>, <city>, <state> <zip>"`
pub fn address_to_forward_query_string(addr: &Address) -> String {
    let Address {
        street,
        city,
        state,
        zip,
    } = addr;
    format!("{street}, {city}, {state} {zip}")
}

/// Picks the first (best ranked) match of a forward geocoding request.
///
/// Failed requests are reported as errors and not as a missing match.
pub fn resolve_first_match<G>(
    provider: &str,
    gw: &G,
    addr: &Address,
) -> Result<Option<(f64, f64)>>
where
    G: Forward<f64>,
{
    let addr_str = address_to_forward_query_string(addr);
    let res = gw.forward(&addr_str).map_err(|err| {
        log::warn!("Failed to resolve address location '{addr_str}' with {provider}: {err}");
        anyhow!("{provider} request failed: {err}")
    })?;
    let Some(point) = res.first() else {
        log::info!("No location found for address '{addr_str}' with {provider}");
        return Ok(None);
    };
    log::debug!("Resolved address location '{addr_str}' with {provider}: {point:?}");
    Ok(Some((point.y(), point.x())))
}
