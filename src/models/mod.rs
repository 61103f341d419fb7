//! Diesel models mirroring the database schema, converted to and from the
//! domain entities at the repository boundary.

pub mod client;
pub mod config;
pub mod ledger;
pub mod order;
pub mod product;
pub mod supplier;
