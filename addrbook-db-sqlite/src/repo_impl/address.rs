use diesel::{dsl::sql, sql_types::BigInt};

use super::*;

impl AddressRepo for DbReadOnly<'_> {
    fn create_address(&self, _address: &Address, _pos: MapPoint) -> Result<AddressId> {
        unreachable!();
    }
    fn update_address(&self, _id: AddressId, _address: &Address, _pos: MapPoint) -> Result<usize> {
        unreachable!();
    }
    fn delete_address(&self, _id: AddressId) -> Result<usize> {
        unreachable!();
    }

    fn get_address(&self, id: AddressId) -> Result<AddressRecord> {
        get_address(&mut self.conn.borrow_mut(), id)
    }
    fn all_addresses(&self) -> Result<Vec<AddressRecord>> {
        all_addresses(&mut self.conn.borrow_mut())
    }
    fn count_addresses(&self) -> Result<usize> {
        count_addresses(&mut self.conn.borrow_mut())
    }
}

impl AddressRepo for DbReadWrite<'_> {
    fn create_address(&self, address: &Address, pos: MapPoint) -> Result<AddressId> {
        create_address(&mut self.conn.borrow_mut(), address, pos)
    }
    fn update_address(&self, id: AddressId, address: &Address, pos: MapPoint) -> Result<usize> {
        update_address(&mut self.conn.borrow_mut(), id, address, pos)
    }
    fn delete_address(&self, id: AddressId) -> Result<usize> {
        delete_address(&mut self.conn.borrow_mut(), id)
    }

    fn get_address(&self, id: AddressId) -> Result<AddressRecord> {
        get_address(&mut self.conn.borrow_mut(), id)
    }
    fn all_addresses(&self) -> Result<Vec<AddressRecord>> {
        all_addresses(&mut self.conn.borrow_mut())
    }
    fn count_addresses(&self) -> Result<usize> {
        count_addresses(&mut self.conn.borrow_mut())
    }
}

fn new_address_model(address: &Address, pos: MapPoint) -> models::NewAddress<'_> {
    let Address {
        street,
        city,
        state,
        zip,
    } = address;
    let (latitude, longitude) = pos.to_lat_lng_deg();
    models::NewAddress {
        street,
        city,
        state,
        zip_code: zip,
        latitude,
        longitude,
    }
}

fn load_address_record(model: models::Address) -> Result<AddressRecord> {
    let models::Address {
        id,
        street,
        city,
        state,
        zip_code,
        latitude,
        longitude,
    } = model;
    let pos = MapPoint::try_from_lat_lng_deg(latitude, longitude).map_err(|err| {
        log::warn!("Address {id} has an invalid position: {err}");
        repo::Error::Other(err.into())
    })?;
    Ok(AddressRecord {
        id: id.into(),
        address: Address {
            street,
            city,
            state,
            zip: zip_code,
        },
        pos,
    })
}

fn create_address(conn: &mut SqliteConnection, address: &Address, pos: MapPoint) -> Result<AddressId> {
    let new_address = new_address_model(address, pos);
    let id = conn
        .transaction::<_, DieselError, _>(|conn| {
            diesel::insert_into(schema::addresses::table)
                .values(&new_address)
                .execute(conn)?;
            diesel::select(sql::<BigInt>("last_insert_rowid()")).get_result::<i64>(conn)
        })
        .map_err(from_diesel_err)?;
    Ok(id.into())
}

fn update_address(
    conn: &mut SqliteConnection,
    id: AddressId,
    address: &Address,
    pos: MapPoint,
) -> Result<usize> {
    use schema::addresses::dsl;
    let changeset = new_address_model(address, pos);
    diesel::update(dsl::addresses.filter(dsl::id.eq(id.to_i64())))
        .set(&changeset)
        .execute(conn)
        .map_err(from_diesel_err)
}

fn delete_address(conn: &mut SqliteConnection, id: AddressId) -> Result<usize> {
    use schema::addresses::dsl;
    diesel::delete(dsl::addresses.filter(dsl::id.eq(id.to_i64())))
        .execute(conn)
        .map_err(from_diesel_err)
}

fn get_address(conn: &mut SqliteConnection, id: AddressId) -> Result<AddressRecord> {
    use schema::addresses::dsl;
    let model = dsl::addresses
        .filter(dsl::id.eq(id.to_i64()))
        .first::<models::Address>(conn)
        .map_err(from_diesel_err)?;
    load_address_record(model)
}

fn all_addresses(conn: &mut SqliteConnection) -> Result<Vec<AddressRecord>> {
    use schema::addresses::dsl;
    dsl::addresses
        .load::<models::Address>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_address_record)
        .collect()
}

fn count_addresses(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::addresses::dsl;
    let count = dsl::addresses
        .select(diesel::dsl::count_star())
        .first::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(count as usize)
}
