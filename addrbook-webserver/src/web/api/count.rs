use super::*;

#[get("/count/addresses")]
pub async fn get_count_addresses(connections: sqlite::Connections) -> Result<usize> {
    let count = spawn_blocking(move || -> result::Result<_, ApiError> {
        Ok(usecases::count_addresses(&connections.shared()?)?)
    })
    .await??;
    Ok(Json(count))
}
