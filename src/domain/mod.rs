//! Domain entities exchanged between the repository and service layers.

pub mod auth;
pub mod client;
pub mod ledger;
pub mod order;
pub mod product;
pub mod supplier;
pub mod types;
