use super::schema::*;

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = addresses)]
pub struct NewAddress<'a> {
    pub street: &'a str,
    pub city: &'a str,
    pub state: &'a str,
    pub zip_code: &'a str,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Queryable)]
pub struct Address {
    pub id: i64,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub latitude: f64,
    pub longitude: f64,
}
