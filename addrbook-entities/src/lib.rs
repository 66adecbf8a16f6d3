pub mod address;
pub mod geo;
pub mod id;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
