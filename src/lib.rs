//! ERP list-query core: a data-driven listing engine shared by every
//! entity (clients, suppliers, products, orders, ledgers) plus the
//! transactional stock-adjustment write path.
//!
//! The outer HTTP surface lives elsewhere; this crate owns the domain
//! types, the query planner, the Diesel repository and the role-gated
//! services on top of it.

pub mod db;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod query;
pub mod repository;
pub mod schema;
pub mod services;

pub const SERVICE_ACCESS_ROLE: &str = "erp";
pub const SERVICE_ADMIN_ROLE: &str = "erp_admin";
