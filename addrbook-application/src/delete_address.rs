use super::*;

pub fn delete_address(connections: &sqlite::Connections, id: AddressId) -> Result<()> {
    usecases::delete_address(&connections.exclusive()?, id)?;
    info!("Deleted address {}", id);
    Ok(())
}
