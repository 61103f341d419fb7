//! Open items on the purchasing (payables) and sales (receivables) ledgers.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Payable {
    pub id: i32,
    pub supplier_id: i32,
    /// Eager-projected from the joined supplier row in listings.
    pub supplier_name: Option<String>,
    pub amount: f64,
    pub due_date: NaiveDateTime,
    pub settled: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewPayable {
    pub supplier_id: i32,
    pub amount: f64,
    pub due_date: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Receivable {
    pub id: i32,
    pub client_id: i32,
    /// Eager-projected from the joined client row in listings.
    pub client_name: Option<String>,
    pub amount: f64,
    pub due_date: NaiveDateTime,
    pub settled: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewReceivable {
    pub client_id: i32,
    pub amount: f64,
    pub due_date: NaiveDateTime,
}
