pub mod filter;
pub mod geo;
pub mod validate;
