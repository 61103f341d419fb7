use std::fmt::Display;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Document lifecycle state, stored as text.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Draft,
    Confirmed,
    Completed,
    Cancelled,
}

/// Values accepted by the `status` filter, in storage form.
pub const ORDER_STATUSES: &[&str] = &["draft", "confirmed", "completed", "cancelled"];

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Draft => "draft",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for OrderStatus {
    fn from(s: &str) -> Self {
        match s {
            "confirmed" => OrderStatus::Confirmed,
            "completed" => OrderStatus::Completed,
            "cancelled" => OrderStatus::Cancelled,
            _ => OrderStatus::Draft,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SalesOrder {
    pub id: i32,
    pub reference: String,
    pub client_id: i32,
    /// Eager-projected from the joined client row in listings.
    pub client_name: Option<String>,
    pub status: OrderStatus,
    pub total: f64,
    pub issued_at: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewSalesOrder {
    pub reference: String,
    pub client_id: i32,
    pub status: OrderStatus,
    pub total: f64,
    pub issued_at: NaiveDateTime,
}

impl NewSalesOrder {
    /// New draft order with a generated document reference.
    #[must_use]
    pub fn draft(client_id: i32, total: f64, issued_at: NaiveDateTime) -> Self {
        Self {
            reference: format!("SO-{}", Uuid::new_v4()),
            client_id,
            status: OrderStatus::Draft,
            total,
            issued_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PurchaseOrder {
    pub id: i32,
    pub reference: String,
    pub supplier_id: i32,
    /// Eager-projected from the joined supplier row in listings.
    pub supplier_name: Option<String>,
    pub status: OrderStatus,
    pub total: f64,
    pub issued_at: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewPurchaseOrder {
    pub reference: String,
    pub supplier_id: i32,
    pub status: OrderStatus,
    pub total: f64,
    pub issued_at: NaiveDateTime,
}

impl NewPurchaseOrder {
    #[must_use]
    pub fn draft(supplier_id: i32, total: f64, issued_at: NaiveDateTime) -> Self {
        Self {
            reference: format!("PO-{}", Uuid::new_v4()),
            supplier_id,
            status: OrderStatus::Draft,
            total,
            issued_at,
        }
    }
}
