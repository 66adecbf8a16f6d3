use super::*;

pub mod prelude {
    use crate::web::{self, api, sqlite};

    pub use crate::web::tests::prelude::{LocalResponse as Response, *};

    pub fn setup() -> (Client, sqlite::Connections) {
        web::tests::setup(vec![("/", api::routes())])
    }

    pub fn test_json(r: &Response) {
        assert_eq!(
            r.headers().get("Content-Type").collect::<Vec<_>>()[0],
            "application/json"
        );
    }

    pub const EMPIRE_STATE_BUILDING: &str =
        r#"{"street":"20 W 34th St","city":"New York","state":"NY","zip_code":"10118"}"#;

    pub const CITY_HALL_LA: &str =
        r#"{"street":"200 N Spring St","city":"Los Angeles","state":"CA","zip_code":"90012"}"#;

    pub fn create_address(client: &Client, body: &str) -> i64 {
        let response = client
            .post("/addresses")
            .header(ContentType::JSON)
            .body(body)
            .dispatch();
        assert_eq!(response.status(), Status::Ok);
        let ack: super::json::Acknowledgment =
            serde_json::from_str(&response.into_string().unwrap()).unwrap();
        ack.id.unwrap()
    }
}

use self::prelude::*;

fn count_addresses(db: &sqlite::Connections) -> usize {
    usecases::count_addresses(&db.shared().unwrap()).unwrap()
}

fn error_message(response: Response) -> String {
    let err: json::Error = serde_json::from_str(&response.into_string().unwrap()).unwrap();
    err.message
}

#[test]
fn create_a_new_address() {
    let (client, db) = setup();
    let response = client
        .post("/addresses")
        .header(ContentType::JSON)
        .body(EMPIRE_STATE_BUILDING)
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    test_json(&response);
    let ack: json::Acknowledgment =
        serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert_eq!("Address added successfully", ack.message);
    let id = ack.id.unwrap();
    let record = usecases::get_address(&db.shared().unwrap(), id.into()).unwrap();
    assert_eq!("New York", record.address.city);
    assert_eq!("10118", record.address.zip);
    assert_eq!((40.7484, -73.9857), record.pos.to_lat_lng_deg());
}

#[test]
fn create_without_content_type() {
    let (client, db) = setup();
    let response = client
        .post("/addresses")
        .body(EMPIRE_STATE_BUILDING)
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    test_json(&response);
    assert_eq!(1, count_addresses(&db));
}

#[test]
fn update_without_content_type() {
    let (client, db) = setup();
    let id = create_address(&client, EMPIRE_STATE_BUILDING);
    let response = client
        .put(format!("/addresses/{id}"))
        .body(CITY_HALL_LA)
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    let record = usecases::get_address(&db.shared().unwrap(), id.into()).unwrap();
    assert_eq!("Los Angeles", record.address.city);
}

#[test]
fn submitted_coordinates_are_ignored() {
    let (client, db) = setup();
    let id = create_address(
        &client,
        r#"{"street":"20 W 34th St","city":"New York","state":"NY","zip_code":"10118","latitude":0.0,"longitude":0.0}"#,
    );
    let record = usecases::get_address(&db.shared().unwrap(), id.into()).unwrap();
    assert_eq!((40.7484, -73.9857), record.pos.to_lat_lng_deg());
}

#[test]
fn create_with_missing_field() {
    let (client, db) = setup();
    let response = client
        .post("/addresses")
        .header(ContentType::JSON)
        .body(r#"{"street":"20 W 34th St","state":"NY","zip_code":"10118"}"#)
        .dispatch();
    assert_eq!(response.status(), Status::BadRequest);
    test_json(&response);
    assert_eq!("Missing city", error_message(response));
    assert_eq!(0, count_addresses(&db));
}

#[test]
fn create_with_blank_field() {
    let (client, db) = setup();
    let response = client
        .post("/addresses")
        .header(ContentType::JSON)
        .body(r#"{"street":"20 W 34th St","city":"New York","state":"  ","zip_code":"10118"}"#)
        .dispatch();
    assert_eq!(response.status(), Status::BadRequest);
    assert_eq!("Missing state", error_message(response));
    assert_eq!(0, count_addresses(&db));
}

#[test]
fn create_with_unresolvable_address() {
    let (client, db) = setup();
    let response = client
        .post("/addresses")
        .header(ContentType::JSON)
        .body(r#"{"street":"1 Nowhere Rd","city":"Atlantis","state":"ZZ","zip_code":"00000"}"#)
        .dispatch();
    assert_eq!(response.status(), Status::BadRequest);
    assert_eq!("Unable to geocode address", error_message(response));
    assert_eq!(0, count_addresses(&db));
}

#[test]
fn create_with_unavailable_geocoding_service() {
    let (client, db) = setup();
    let response = client
        .post("/addresses")
        .header(ContentType::JSON)
        .body(r#"{"street":"1 Timeout Rd","city":"Springfield","state":"IL","zip_code":"62701"}"#)
        .dispatch();
    assert_eq!(response.status(), Status::BadGateway);
    test_json(&response);
    assert_eq!("Geocoding service unavailable", error_message(response));
    assert_eq!(0, count_addresses(&db));
}

#[test]
fn create_with_out_of_range_position() {
    let (client, db) = setup();
    let response = client
        .post("/addresses")
        .header(ContentType::JSON)
        .body(r#"{"street":"1 Off The Map","city":"X","state":"Y","zip_code":"Z"}"#)
        .dispatch();
    assert_eq!(response.status(), Status::BadRequest);
    assert_eq!(0, count_addresses(&db));
}

#[test]
fn create_with_malformed_json() {
    let (client, db) = setup();
    let response = client
        .post("/addresses")
        .header(ContentType::JSON)
        .body(r#"{"street":"#)
        .dispatch();
    assert_eq!(response.status(), Status::UnprocessableEntity);
    test_json(&response);
    assert_eq!(0, count_addresses(&db));
}

#[test]
fn get_an_address() {
    let (client, _) = setup();
    let id = create_address(&client, CITY_HALL_LA);
    let response = client.get(format!("/addresses/{id}")).dispatch();
    assert_eq!(response.status(), Status::Ok);
    test_json(&response);
    let address: json::Address = serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert_eq!(
        json::Address {
            id,
            street: "200 N Spring St".into(),
            city: "Los Angeles".into(),
            state: "CA".into(),
            zip_code: "90012".into(),
            latitude: 34.0537,
            longitude: -118.2428,
        },
        address
    );
}

#[test]
fn get_a_missing_address() {
    let (client, _) = setup();
    let response = client.get("/addresses/42").dispatch();
    assert_eq!(response.status(), Status::NotFound);
    test_json(&response);
}

#[test]
fn update_an_address() {
    let (client, db) = setup();
    let id = create_address(&client, EMPIRE_STATE_BUILDING);
    let response = client
        .put(format!("/addresses/{id}"))
        .header(ContentType::JSON)
        .body(CITY_HALL_LA)
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    let ack: json::Acknowledgment =
        serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert_eq!("Address updated successfully", ack.message);
    assert!(ack.id.is_none());
    let record = usecases::get_address(&db.shared().unwrap(), id.into()).unwrap();
    assert_eq!("Los Angeles", record.address.city);
    assert_eq!((34.0537, -118.2428), record.pos.to_lat_lng_deg());
    assert_eq!(1, count_addresses(&db));
}

#[test]
fn update_with_unresolvable_address_keeps_record() {
    let (client, db) = setup();
    let id = create_address(&client, EMPIRE_STATE_BUILDING);
    let response = client
        .put(format!("/addresses/{id}"))
        .header(ContentType::JSON)
        .body(r#"{"street":"1 Nowhere Rd","city":"Atlantis","state":"ZZ","zip_code":"00000"}"#)
        .dispatch();
    assert_eq!(response.status(), Status::BadRequest);
    let record = usecases::get_address(&db.shared().unwrap(), id.into()).unwrap();
    assert_eq!("New York", record.address.city);
}

#[test]
fn update_a_missing_address() {
    let (client, db) = setup();
    let response = client
        .put("/addresses/42")
        .header(ContentType::JSON)
        .body(CITY_HALL_LA)
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(0, count_addresses(&db));
}

#[test]
fn delete_an_address_twice() {
    let (client, db) = setup();
    let id = create_address(&client, EMPIRE_STATE_BUILDING);
    for _ in 0..2 {
        let response = client.delete(format!("/addresses/{id}")).dispatch();
        assert_eq!(response.status(), Status::Ok);
        let ack: json::Acknowledgment =
            serde_json::from_str(&response.into_string().unwrap()).unwrap();
        assert_eq!("Address deleted successfully", ack.message);
    }
    assert_eq!(0, count_addresses(&db));
    let response = client.get(format!("/addresses/{id}")).dispatch();
    assert_eq!(response.status(), Status::NotFound);
}

#[test]
fn ids_are_not_reused_after_deletion() {
    let (client, _) = setup();
    let first = create_address(&client, EMPIRE_STATE_BUILDING);
    client.delete(format!("/addresses/{first}")).dispatch();
    let second = create_address(&client, EMPIRE_STATE_BUILDING);
    assert!(second > first);
}

fn query_cities(client: &Client, uri: &str) -> Vec<String> {
    let response = client.get(uri.to_string()).dispatch();
    assert_eq!(response.status(), Status::Ok);
    test_json(&response);
    let list: json::AddressList = serde_json::from_str(&response.into_string().unwrap()).unwrap();
    let mut cities: Vec<_> = list.addresses.into_iter().map(|a| a.city).collect();
    cities.sort();
    cities
}

#[test]
fn query_addresses_within_distance() {
    let (client, _) = setup();
    create_address(&client, EMPIRE_STATE_BUILDING);
    create_address(&client, CITY_HALL_LA);

    // Midtown Manhattan, New York
    assert_eq!(
        vec!["New York"],
        query_cities(&client, "/addresses?latitude=40.7128&longitude=-74.0060&distance=10")
    );
    assert_eq!(
        vec!["Los Angeles", "New York"],
        query_cities(&client, "/addresses?latitude=40.7128&longitude=-74.0060&distance=3000")
    );
    // Far away from both
    assert!(query_cities(&client, "/addresses?latitude=0&longitude=0&distance=10").is_empty());
}

#[test]
fn query_addresses_with_compatibility_route() {
    let (client, _) = setup();
    create_address(&client, EMPIRE_STATE_BUILDING);
    create_address(&client, CITY_HALL_LA);
    assert_eq!(
        vec!["Los Angeles"],
        query_cities(
            &client,
            "/get_addresses?latitude=34.0522&longitude=-118.2437&distance=10"
        )
    );
}

#[test]
fn query_addresses_with_zero_distance() {
    let (client, _) = setup();
    create_address(&client, EMPIRE_STATE_BUILDING);
    assert_eq!(
        vec!["New York"],
        query_cities(&client, "/addresses?latitude=40.7484&longitude=-73.9857&distance=0")
    );
}

#[test]
fn query_addresses_with_invalid_parameters() {
    let (client, _) = setup();
    for uri in [
        "/addresses?latitude=40.7&longitude=-74.0&distance=-1",
        "/addresses?latitude=40.7&longitude=-74.0",
        "/addresses?latitude=95.0&longitude=-74.0&distance=10",
        "/addresses?latitude=abc&longitude=-74.0&distance=10",
        "/addresses",
    ] {
        let response = client.get(uri).dispatch();
        assert_eq!(response.status(), Status::BadRequest, "{uri}");
        test_json(&response);
    }
}

#[test]
fn count_addresses_via_api() {
    let (client, _) = setup();
    create_address(&client, EMPIRE_STATE_BUILDING);
    create_address(&client, CITY_HALL_LA);
    let response = client.get("/count/addresses").dispatch();
    assert_eq!(response.status(), Status::Ok);
    assert_eq!("2", response.into_string().unwrap());
}

#[test]
fn get_version() {
    let (client, _) = setup();
    let response = client.get("/server/version").dispatch();
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(DUMMY_VERSION, response.into_string().unwrap());
}
