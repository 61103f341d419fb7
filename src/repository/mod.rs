//! Repository traits and their Diesel implementation.
//!
//! Reader traits cover the list/get read path; writer traits cover the
//! mutations. Services stay generic over these traits so they can be
//! exercised against mocks.

use crate::db::{DbConnection, DbPool};
use crate::domain::client::{Client, NewClient, UpdateClient};
use crate::domain::ledger::{NewPayable, NewReceivable, Payable, Receivable};
use crate::domain::order::{
    NewPurchaseOrder, NewSalesOrder, OrderStatus, PurchaseOrder, SalesOrder,
};
use crate::domain::product::{NewProduct, NewStockMovement, Product, StockMovement, UpdateProduct};
use crate::domain::supplier::{NewSupplier, Supplier, UpdateSupplier};
use crate::pagination::PageResult;
use crate::query::{ListQuery, PlannerConfig};
use crate::repository::errors::{RepositoryError, RepositoryResult};

pub mod client;
pub mod errors;
pub mod ledger;
pub(crate) mod list;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod order;
pub mod product;
pub mod supplier;

pub trait ClientReader {
    fn get_client_by_id(&self, id: i32) -> RepositoryResult<Option<Client>>;
    fn list_clients(&self, query: ListQuery) -> RepositoryResult<PageResult<Client>>;
}

pub trait ClientWriter {
    fn create_clients(&self, new_clients: &[NewClient]) -> RepositoryResult<usize>;
    fn update_client(&self, client_id: i32, updates: &UpdateClient) -> RepositoryResult<Client>;
    fn delete_client(&self, client_id: i32) -> RepositoryResult<()>;
}

pub trait SupplierReader {
    fn get_supplier_by_id(&self, id: i32) -> RepositoryResult<Option<Supplier>>;
    fn list_suppliers(&self, query: ListQuery) -> RepositoryResult<PageResult<Supplier>>;
}

pub trait SupplierWriter {
    fn create_supplier(&self, new_supplier: &NewSupplier) -> RepositoryResult<Supplier>;
    fn update_supplier(
        &self,
        supplier_id: i32,
        updates: &UpdateSupplier,
    ) -> RepositoryResult<Supplier>;
    fn delete_supplier(&self, supplier_id: i32) -> RepositoryResult<()>;
}

pub trait ProductReader {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
    fn list_products(&self, query: ListQuery) -> RepositoryResult<PageResult<Product>>;
}

pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    fn update_product(&self, product_id: i32, updates: &UpdateProduct)
    -> RepositoryResult<Product>;
    fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
}

pub trait InventoryReader {
    fn list_stock_movements(
        &self,
        product_id: i32,
        query: ListQuery,
    ) -> RepositoryResult<PageResult<StockMovement>>;
}

pub trait InventoryWriter {
    /// Applies the movement to the product's stock counter and records the
    /// movement in one transaction.
    fn adjust_stock(&self, movement: &NewStockMovement) -> RepositoryResult<Product>;
}

pub trait SalesOrderReader {
    fn get_sales_order_by_id(&self, id: i32) -> RepositoryResult<Option<SalesOrder>>;
    fn list_sales_orders(&self, query: ListQuery) -> RepositoryResult<PageResult<SalesOrder>>;
}

pub trait SalesOrderWriter {
    fn create_sales_order(&self, new_order: &NewSalesOrder) -> RepositoryResult<SalesOrder>;
    fn update_sales_order_status(
        &self,
        order_id: i32,
        status: OrderStatus,
    ) -> RepositoryResult<SalesOrder>;
    fn delete_sales_order(&self, order_id: i32) -> RepositoryResult<()>;
}

pub trait PurchaseOrderReader {
    fn get_purchase_order_by_id(&self, id: i32) -> RepositoryResult<Option<PurchaseOrder>>;
    fn list_purchase_orders(&self, query: ListQuery)
    -> RepositoryResult<PageResult<PurchaseOrder>>;
}

pub trait PurchaseOrderWriter {
    fn create_purchase_order(
        &self,
        new_order: &NewPurchaseOrder,
    ) -> RepositoryResult<PurchaseOrder>;
    fn update_purchase_order_status(
        &self,
        order_id: i32,
        status: OrderStatus,
    ) -> RepositoryResult<PurchaseOrder>;
    fn delete_purchase_order(&self, order_id: i32) -> RepositoryResult<()>;
}

pub trait PayableReader {
    fn get_payable_by_id(&self, id: i32) -> RepositoryResult<Option<Payable>>;
    fn list_payables(&self, query: ListQuery) -> RepositoryResult<PageResult<Payable>>;
}

pub trait PayableWriter {
    fn create_payable(&self, new_payable: &NewPayable) -> RepositoryResult<Payable>;
    fn settle_payable(&self, payable_id: i32) -> RepositoryResult<Payable>;
}

pub trait ReceivableReader {
    fn get_receivable_by_id(&self, id: i32) -> RepositoryResult<Option<Receivable>>;
    fn list_receivables(&self, query: ListQuery) -> RepositoryResult<PageResult<Receivable>>;
}

pub trait ReceivableWriter {
    fn create_receivable(&self, new_receivable: &NewReceivable) -> RepositoryResult<Receivable>;
    fn settle_receivable(&self, receivable_id: i32) -> RepositoryResult<Receivable>;
}

/// Diesel-backed implementation of every repository trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
    planner: PlannerConfig,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            planner: PlannerConfig::default(),
        }
    }

    /// Overrides the default planner configuration (time zone offset,
    /// page-size bounds, store capabilities).
    pub fn with_planner(mut self, planner: PlannerConfig) -> Self {
        self.planner = planner;
        self
    }

    pub(crate) fn conn(&self) -> Result<DbConnection, RepositoryError> {
        self.pool.get().map_err(RepositoryError::from)
    }

    pub(crate) fn planner(&self) -> &PlannerConfig {
        &self.planner
    }
}
