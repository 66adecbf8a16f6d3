use super::*;

const MSG_ADDED: &str = "Address added successfully";
const MSG_UPDATED: &str = "Address updated successfully";
const MSG_DELETED: &str = "Address deleted successfully";

#[post("/addresses", data = "<body>")]
pub async fn post_address(
    connections: sqlite::Connections,
    geo_gw: &State<GeoCoding>,
    body: JsonResult<'_, json::NewAddress>,
) -> Result<json::Acknowledgment> {
    let new_address = from_json::new_address(body?.into_inner());
    let geo_gw = geo_gw.inner().clone();
    // Both the geocoding request and the database access are blocking
    let id = spawn_blocking(move || flows::create_address(&connections, &*geo_gw, new_address))
        .await??;
    Ok(Json(json::Acknowledgment::with_id(MSG_ADDED, id.into())))
}

#[put("/addresses/<id>", data = "<body>")]
pub async fn put_address(
    connections: sqlite::Connections,
    geo_gw: &State<GeoCoding>,
    id: i64,
    body: JsonResult<'_, json::NewAddress>,
) -> Result<json::Acknowledgment> {
    let new_address = from_json::new_address(body?.into_inner());
    let geo_gw = geo_gw.inner().clone();
    spawn_blocking(move || {
        flows::update_address(&connections, &*geo_gw, AddressId::from(id), new_address)
    })
    .await??;
    Ok(Json(json::Acknowledgment::new(MSG_UPDATED)))
}

#[delete("/addresses/<id>")]
pub async fn delete_address(
    connections: sqlite::Connections,
    id: i64,
) -> Result<json::Acknowledgment> {
    spawn_blocking(move || flows::delete_address(&connections, AddressId::from(id))).await??;
    Ok(Json(json::Acknowledgment::new(MSG_DELETED)))
}

#[get("/addresses/<id>")]
pub async fn get_address(connections: sqlite::Connections, id: i64) -> Result<json::Address> {
    let record = spawn_blocking(move || -> result::Result<_, ApiError> {
        Ok(usecases::get_address(
            &connections.shared()?,
            AddressId::from(id),
        )?)
    })
    .await??;
    Ok(Json(record.into()))
}

#[get("/addresses?<latitude>&<longitude>&<distance>")]
pub async fn get_addresses_within_distance(
    connections: sqlite::Connections,
    latitude: Option<f64>,
    longitude: Option<f64>,
    distance: Option<f64>,
) -> Result<json::AddressList> {
    query_addresses(connections, latitude, longitude, distance).await
}

#[get("/get_addresses?<latitude>&<longitude>&<distance>")]
pub async fn get_addresses_within_distance_compat(
    connections: sqlite::Connections,
    latitude: Option<f64>,
    longitude: Option<f64>,
    distance: Option<f64>,
) -> Result<json::AddressList> {
    query_addresses(connections, latitude, longitude, distance).await
}

async fn query_addresses(
    connections: sqlite::Connections,
    latitude: Option<f64>,
    longitude: Option<f64>,
    distance: Option<f64>,
) -> Result<json::AddressList> {
    // Missing or unparsable query parameters
    let (Some(lat), Some(lng)) = (latitude, longitude) else {
        return Err(ParameterError::InvalidPosition.into());
    };
    let Some(max_distance_miles) = distance else {
        return Err(ParameterError::InvalidDistance.into());
    };
    let query = usecases::DistanceQuery {
        lat,
        lng,
        max_distance_miles,
    };
    let records = spawn_blocking(move || -> result::Result<_, ApiError> {
        Ok(usecases::query_addresses_within_distance(
            &connections.shared()?,
            query,
        )?)
    })
    .await??;
    Ok(Json(records.into()))
}
