use std::{fmt, num::ParseIntError, str::FromStr};

/// Identifier of a stored address.
///
/// Assigned by the store on creation and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AddressId(i64);

impl AddressId {
    pub const fn to_i64(self) -> i64 {
        self.0
    }
}

impl From<i64> for AddressId {
    fn from(from: i64) -> Self {
        Self(from)
    }
}

impl From<AddressId> for i64 {
    fn from(from: AddressId) -> Self {
        from.0
    }
}

impl FromStr for AddressId {
    type Err = ParseIntError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl fmt::Display for AddressId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
