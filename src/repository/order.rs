use chrono::Utc;
use diesel::prelude::*;

use crate::domain::order::{
    NewPurchaseOrder, NewSalesOrder, ORDER_STATUSES, OrderStatus, PurchaseOrder, SalesOrder,
};
use crate::pagination::PageResult;
use crate::query::{
    DeletedVisibility, FilterKind, FilterRule, ListQuery, QuerySpec, RelationSpec, SoftDelete,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::list::run_list_query;
use crate::repository::{
    DieselRepository, PurchaseOrderReader, PurchaseOrderWriter, SalesOrderReader, SalesOrderWriter,
};

/// Sales order listings project the counterparty name out of `clients`
/// and can sort and search through it. Cancelled paperwork is still a
/// document, so deletion hides rows instead of removing them.
pub const SALES_ORDER_SPEC: QuerySpec = QuerySpec {
    table: "sales_orders",
    id_column: "id",
    default_sort: "issued_at",
    searchable: &["reference"],
    fulltext: &["reference"],
    sortable: &[
        ("id", "id"),
        ("reference", "reference"),
        ("status", "status"),
        ("total", "total"),
        ("issued_at", "issued_at"),
        ("client_name", "clients.name"),
    ],
    filters: &[
        FilterRule {
            key: "status",
            column: "status",
            kind: FilterKind::Member(ORDER_STATUSES),
        },
        FilterRule {
            key: "client_id",
            column: "client_id",
            kind: FilterKind::InSet,
        },
        FilterRule {
            key: "issued_at",
            column: "issued_at",
            kind: FilterKind::DateRange,
        },
    ],
    relations: &[RelationSpec {
        table: "clients",
        local_key: "client_id",
        foreign_key: "id",
        projected: &[("name", "client_name")],
        searchable: &["name", "email"],
    }],
    soft_delete: Some(SoftDelete {
        column: "deleted_at",
        visibility: DeletedVisibility::Exclude,
    }),
};

pub const PURCHASE_ORDER_SPEC: QuerySpec = QuerySpec {
    table: "purchase_orders",
    id_column: "id",
    default_sort: "issued_at",
    searchable: &["reference"],
    fulltext: &["reference"],
    sortable: &[
        ("id", "id"),
        ("reference", "reference"),
        ("status", "status"),
        ("total", "total"),
        ("issued_at", "issued_at"),
        ("supplier_name", "suppliers.name"),
    ],
    filters: &[
        FilterRule {
            key: "status",
            column: "status",
            kind: FilterKind::Member(ORDER_STATUSES),
        },
        FilterRule {
            key: "supplier_id",
            column: "supplier_id",
            kind: FilterKind::InSet,
        },
        FilterRule {
            key: "issued_at",
            column: "issued_at",
            kind: FilterKind::DateRange,
        },
    ],
    relations: &[RelationSpec {
        table: "suppliers",
        local_key: "supplier_id",
        foreign_key: "id",
        projected: &[("name", "supplier_name")],
        searchable: &["name", "email"],
    }],
    soft_delete: Some(SoftDelete {
        column: "deleted_at",
        visibility: DeletedVisibility::Exclude,
    }),
};

impl SalesOrderReader for DieselRepository {
    fn get_sales_order_by_id(&self, id: i32) -> RepositoryResult<Option<SalesOrder>> {
        use crate::models::order::SalesOrder as DbSalesOrder;
        use crate::schema::sales_orders;

        let mut conn = self.conn()?;
        let order = sales_orders::table
            .find(id)
            .filter(sales_orders::deleted_at.is_null())
            .first::<DbSalesOrder>(&mut conn)
            .optional()?;

        Ok(order.map(Into::into))
    }

    fn list_sales_orders(&self, query: ListQuery) -> RepositoryResult<PageResult<SalesOrder>> {
        use crate::models::order::SalesOrderRow;

        let mut conn = self.conn()?;
        let page =
            run_list_query::<SalesOrderRow>(&mut conn, &SALES_ORDER_SPEC, &query, self.planner())?;
        Ok(page.map(Into::into))
    }
}

impl SalesOrderWriter for DieselRepository {
    fn create_sales_order(&self, new_order: &NewSalesOrder) -> RepositoryResult<SalesOrder> {
        use crate::models::order::{NewSalesOrder as DbNewSalesOrder, SalesOrder as DbSalesOrder};
        use crate::schema::sales_orders;

        let mut conn = self.conn()?;
        let insertable: DbNewSalesOrder = new_order.into();
        let created = diesel::insert_into(sales_orders::table)
            .values(&insertable)
            .get_result::<DbSalesOrder>(&mut conn)?;

        Ok(created.into())
    }

    fn update_sales_order_status(
        &self,
        order_id: i32,
        status: OrderStatus,
    ) -> RepositoryResult<SalesOrder> {
        use crate::models::order::SalesOrder as DbSalesOrder;
        use crate::schema::sales_orders;

        let mut conn = self.conn()?;
        let updated = diesel::update(sales_orders::table.find(order_id))
            .set((
                sales_orders::status.eq(status.as_str()),
                sales_orders::updated_at.eq(Utc::now().naive_utc()),
            ))
            .get_result::<DbSalesOrder>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_sales_order(&self, order_id: i32) -> RepositoryResult<()> {
        use crate::schema::sales_orders;

        let mut conn = self.conn()?;
        let now = Utc::now().naive_utc();
        diesel::update(sales_orders::table.find(order_id))
            .set((
                sales_orders::deleted_at.eq(Some(now)),
                sales_orders::updated_at.eq(now),
            ))
            .execute(&mut conn)?;
        Ok(())
    }
}

impl PurchaseOrderReader for DieselRepository {
    fn get_purchase_order_by_id(&self, id: i32) -> RepositoryResult<Option<PurchaseOrder>> {
        use crate::models::order::PurchaseOrder as DbPurchaseOrder;
        use crate::schema::purchase_orders;

        let mut conn = self.conn()?;
        let order = purchase_orders::table
            .find(id)
            .filter(purchase_orders::deleted_at.is_null())
            .first::<DbPurchaseOrder>(&mut conn)
            .optional()?;

        Ok(order.map(Into::into))
    }

    fn list_purchase_orders(
        &self,
        query: ListQuery,
    ) -> RepositoryResult<PageResult<PurchaseOrder>> {
        use crate::models::order::PurchaseOrderRow;

        let mut conn = self.conn()?;
        let page = run_list_query::<PurchaseOrderRow>(
            &mut conn,
            &PURCHASE_ORDER_SPEC,
            &query,
            self.planner(),
        )?;
        Ok(page.map(Into::into))
    }
}

impl PurchaseOrderWriter for DieselRepository {
    fn create_purchase_order(
        &self,
        new_order: &NewPurchaseOrder,
    ) -> RepositoryResult<PurchaseOrder> {
        use crate::models::order::{
            NewPurchaseOrder as DbNewPurchaseOrder, PurchaseOrder as DbPurchaseOrder,
        };
        use crate::schema::purchase_orders;

        let mut conn = self.conn()?;
        let insertable: DbNewPurchaseOrder = new_order.into();
        let created = diesel::insert_into(purchase_orders::table)
            .values(&insertable)
            .get_result::<DbPurchaseOrder>(&mut conn)?;

        Ok(created.into())
    }

    fn update_purchase_order_status(
        &self,
        order_id: i32,
        status: OrderStatus,
    ) -> RepositoryResult<PurchaseOrder> {
        use crate::models::order::PurchaseOrder as DbPurchaseOrder;
        use crate::schema::purchase_orders;

        let mut conn = self.conn()?;
        let updated = diesel::update(purchase_orders::table.find(order_id))
            .set((
                purchase_orders::status.eq(status.as_str()),
                purchase_orders::updated_at.eq(Utc::now().naive_utc()),
            ))
            .get_result::<DbPurchaseOrder>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_purchase_order(&self, order_id: i32) -> RepositoryResult<()> {
        use crate::schema::purchase_orders;

        let mut conn = self.conn()?;
        let now = Utc::now().naive_utc();
        diesel::update(purchase_orders::table.find(order_id))
            .set((
                purchase_orders::deleted_at.eq(Some(now)),
                purchase_orders::updated_at.eq(now),
            ))
            .execute(&mut conn)?;
        Ok(())
    }
}
