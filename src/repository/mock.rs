//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::client::{Client, NewClient, UpdateClient};
use crate::domain::ledger::{NewPayable, NewReceivable, Payable, Receivable};
use crate::domain::order::{
    NewPurchaseOrder, NewSalesOrder, OrderStatus, PurchaseOrder, SalesOrder,
};
use crate::domain::product::{NewProduct, NewStockMovement, Product, StockMovement, UpdateProduct};
use crate::domain::supplier::{NewSupplier, Supplier, UpdateSupplier};
use crate::pagination::PageResult;
use crate::query::ListQuery;
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    ClientReader, ClientWriter, InventoryReader, InventoryWriter, PayableReader, PayableWriter,
    ProductReader, ProductWriter, PurchaseOrderReader, PurchaseOrderWriter, ReceivableReader,
    ReceivableWriter, SalesOrderReader, SalesOrderWriter, SupplierReader, SupplierWriter,
};

mock! {
    pub Repository {}

    impl ClientReader for Repository {
        fn get_client_by_id(&self, id: i32) -> RepositoryResult<Option<Client>>;
        fn list_clients(&self, query: ListQuery) -> RepositoryResult<PageResult<Client>>;
    }

    impl ClientWriter for Repository {
        fn create_clients(&self, new_clients: &[NewClient]) -> RepositoryResult<usize>;
        fn update_client(&self, client_id: i32, updates: &UpdateClient) -> RepositoryResult<Client>;
        fn delete_client(&self, client_id: i32) -> RepositoryResult<()>;
    }

    impl SupplierReader for Repository {
        fn get_supplier_by_id(&self, id: i32) -> RepositoryResult<Option<Supplier>>;
        fn list_suppliers(&self, query: ListQuery) -> RepositoryResult<PageResult<Supplier>>;
    }

    impl SupplierWriter for Repository {
        fn create_supplier(&self, new_supplier: &NewSupplier) -> RepositoryResult<Supplier>;
        fn update_supplier(
            &self,
            supplier_id: i32,
            updates: &UpdateSupplier,
        ) -> RepositoryResult<Supplier>;
        fn delete_supplier(&self, supplier_id: i32) -> RepositoryResult<()>;
    }

    impl ProductReader for Repository {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
        fn list_products(&self, query: ListQuery) -> RepositoryResult<PageResult<Product>>;
    }

    impl ProductWriter for Repository {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
        fn update_product(
            &self,
            product_id: i32,
            updates: &UpdateProduct,
        ) -> RepositoryResult<Product>;
        fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
    }

    impl InventoryReader for Repository {
        fn list_stock_movements(
            &self,
            product_id: i32,
            query: ListQuery,
        ) -> RepositoryResult<PageResult<StockMovement>>;
    }

    impl InventoryWriter for Repository {
        fn adjust_stock(&self, movement: &NewStockMovement) -> RepositoryResult<Product>;
    }

    impl SalesOrderReader for Repository {
        fn get_sales_order_by_id(&self, id: i32) -> RepositoryResult<Option<SalesOrder>>;
        fn list_sales_orders(&self, query: ListQuery) -> RepositoryResult<PageResult<SalesOrder>>;
    }

    impl SalesOrderWriter for Repository {
        fn create_sales_order(&self, new_order: &NewSalesOrder) -> RepositoryResult<SalesOrder>;
        fn update_sales_order_status(
            &self,
            order_id: i32,
            status: OrderStatus,
        ) -> RepositoryResult<SalesOrder>;
        fn delete_sales_order(&self, order_id: i32) -> RepositoryResult<()>;
    }

    impl PurchaseOrderReader for Repository {
        fn get_purchase_order_by_id(&self, id: i32) -> RepositoryResult<Option<PurchaseOrder>>;
        fn list_purchase_orders(
            &self,
            query: ListQuery,
        ) -> RepositoryResult<PageResult<PurchaseOrder>>;
    }

    impl PurchaseOrderWriter for Repository {
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

    impl PayableReader for Repository {
        fn get_payable_by_id(&self, id: i32) -> RepositoryResult<Option<Payable>>;
        fn list_payables(&self, query: ListQuery) -> RepositoryResult<PageResult<Payable>>;
    }

    impl PayableWriter for Repository {
        fn create_payable(&self, new_payable: &NewPayable) -> RepositoryResult<Payable>;
        fn settle_payable(&self, payable_id: i32) -> RepositoryResult<Payable>;
    }

    impl ReceivableReader for Repository {
        fn get_receivable_by_id(&self, id: i32) -> RepositoryResult<Option<Receivable>>;
        fn list_receivables(&self, query: ListQuery) -> RepositoryResult<PageResult<Receivable>>;
    }

    impl ReceivableWriter for Repository {
        fn create_receivable(&self, new_receivable: &NewReceivable) -> RepositoryResult<Receivable>;
        fn settle_receivable(&self, receivable_id: i32) -> RepositoryResult<Receivable>;
    }
}
