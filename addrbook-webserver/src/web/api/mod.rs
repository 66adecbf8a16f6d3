use std::{fmt::Display, result};

use addrbook_boundary::Error as JsonErrorResponse;
use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self, delete, get,
    http::Status,
    post, put,
    response::{self, Responder},
    routes,
    tokio::task::spawn_blocking,
    Route, State,
};

use super::guards::*;
use self::error::ParameterError;
use crate::{
    adapters::json::{self, from_json},
    web::sqlite,
};
use addrbook_application::prelude as flows;
use addrbook_core::{entities::*, usecases};

mod addresses;
mod count;
mod error;
mod util;

pub use self::error::Error as ApiError;

#[cfg(test)]
pub mod tests;

type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   addresses   --- //
        addresses::post_address,
        addresses::put_address,
        addresses::delete_address,
        addresses::get_address,
        addresses::get_addresses_within_distance,
        addresses::get_addresses_within_distance_compat,
        // ---   count   --- //
        count::get_count_addresses,
        util::get_version,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
