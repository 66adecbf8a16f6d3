use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

/// Address fields submitted by clients.
///
/// Missing text fields are deserialized as empty strings
/// and rejected by the validation. Coordinates are accepted
/// for compatibility but always re-resolved.
#[rustfmt::skip]
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewAddress {
    #[serde(default)]
    pub street    : String,
    #[serde(default)]
    pub city      : String,
    #[serde(default)]
    pub state     : String,
    #[serde(default, alias = "postal_code")]
    pub zip_code  : String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude  : Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude : Option<f64>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Address {
    pub id        : i64,
    pub street    : String,
    pub city      : String,
    pub state     : String,
    pub zip_code  : String,
    pub latitude  : f64,
    pub longitude : f64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct AddressList {
    pub addresses: Vec<Address>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Acknowledgment {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl Acknowledgment {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            id: None,
        }
    }

    pub fn with_id(message: impl Into<String>, id: i64) -> Self {
        Self {
            message: message.into(),
            id: Some(id),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, thiserror::Error))]
#[cfg_attr(feature = "extra-derive", error("{message}"))]
pub struct Error {
    pub http_status: u16,
    pub message: String,
}
