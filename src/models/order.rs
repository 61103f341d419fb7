use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::sql_types::{Nullable, Text};

use crate::domain::order::{
    NewPurchaseOrder as DomainNewPurchaseOrder, NewSalesOrder as DomainNewSalesOrder,
    OrderStatus, PurchaseOrder as DomainPurchaseOrder, SalesOrder as DomainSalesOrder,
};

#[derive(Debug, Clone, Identifiable, Queryable, QueryableByName)]
#[diesel(table_name = crate::schema::sales_orders)]
/// Diesel model for [`crate::domain::order::SalesOrder`].
pub struct SalesOrder {
    pub id: i32,
    pub reference: String,
    pub client_id: i32,
    pub status: String,
    pub total: f64,
    pub issued_at: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

/// Listing row: the order plus the client name the query spec projects
/// out of the joined `clients` table.
#[derive(Debug, QueryableByName)]
pub struct SalesOrderRow {
    #[diesel(embed)]
    pub order: SalesOrder,
    #[diesel(sql_type = Nullable<Text>)]
    pub client_name: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::sales_orders)]
pub struct NewSalesOrder<'a> {
    pub reference: &'a str,
    pub client_id: i32,
    pub status: &'a str,
    pub total: f64,
    pub issued_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, QueryableByName)]
#[diesel(table_name = crate::schema::purchase_orders)]
/// Diesel model for [`crate::domain::order::PurchaseOrder`].
pub struct PurchaseOrder {
    pub id: i32,
    pub reference: String,
    pub supplier_id: i32,
    pub status: String,
    pub total: f64,
    pub issued_at: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

#[derive(Debug, QueryableByName)]
pub struct PurchaseOrderRow {
    #[diesel(embed)]
    pub order: PurchaseOrder,
    #[diesel(sql_type = Nullable<Text>)]
    pub supplier_name: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::purchase_orders)]
pub struct NewPurchaseOrder<'a> {
    pub reference: &'a str,
    pub supplier_id: i32,
    pub status: &'a str,
    pub total: f64,
    pub issued_at: NaiveDateTime,
}

impl From<SalesOrder> for DomainSalesOrder {
    fn from(order: SalesOrder) -> Self {
        Self {
            id: order.id,
            reference: order.reference,
            client_id: order.client_id,
            client_name: None,
            status: OrderStatus::from(order.status.as_str()),
            total: order.total,
            issued_at: order.issued_at,
            created_at: order.created_at,
            updated_at: order.updated_at,
            deleted_at: order.deleted_at,
        }
    }
}

impl From<SalesOrderRow> for DomainSalesOrder {
    fn from(row: SalesOrderRow) -> Self {
        let mut order: DomainSalesOrder = row.order.into();
        order.client_name = row.client_name;
        order
    }
}

impl<'a> From<&'a DomainNewSalesOrder> for NewSalesOrder<'a> {
    fn from(order: &'a DomainNewSalesOrder) -> Self {
        Self {
            reference: order.reference.as_str(),
            client_id: order.client_id,
            status: order.status.as_str(),
            total: order.total,
            issued_at: order.issued_at,
        }
    }
}

impl From<PurchaseOrder> for DomainPurchaseOrder {
    fn from(order: PurchaseOrder) -> Self {
        Self {
            id: order.id,
            reference: order.reference,
            supplier_id: order.supplier_id,
            supplier_name: None,
            status: OrderStatus::from(order.status.as_str()),
            total: order.total,
            issued_at: order.issued_at,
            created_at: order.created_at,
            updated_at: order.updated_at,
            deleted_at: order.deleted_at,
        }
    }
}

impl From<PurchaseOrderRow> for DomainPurchaseOrder {
    fn from(row: PurchaseOrderRow) -> Self {
        let mut order: DomainPurchaseOrder = row.order.into();
        order.supplier_name = row.supplier_name;
        order
    }
}

impl<'a> From<&'a DomainNewPurchaseOrder> for NewPurchaseOrder<'a> {
    fn from(order: &'a DomainNewPurchaseOrder) -> Self {
        Self {
            reference: order.reference.as_str(),
            supplier_id: order.supplier_id,
            status: order.status.as_str(),
            total: order.total,
            issued_at: order.issued_at,
        }
    }
}
