use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::sql_types::{Nullable, Text};

use crate::domain::ledger::{
    NewPayable as DomainNewPayable, NewReceivable as DomainNewReceivable,
    Payable as DomainPayable, Receivable as DomainReceivable,
};

#[derive(Debug, Clone, Identifiable, Queryable, QueryableByName)]
#[diesel(table_name = crate::schema::payables)]
/// Diesel model for [`crate::domain::ledger::Payable`].
pub struct Payable {
    pub id: i32,
    pub supplier_id: i32,
    pub amount: f64,
    pub due_date: NaiveDateTime,
    pub settled: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, QueryableByName)]
pub struct PayableRow {
    #[diesel(embed)]
    pub payable: Payable,
    #[diesel(sql_type = Nullable<Text>)]
    pub supplier_name: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::payables)]
pub struct NewPayable {
    pub supplier_id: i32,
    pub amount: f64,
    pub due_date: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, QueryableByName)]
#[diesel(table_name = crate::schema::receivables)]
/// Diesel model for [`crate::domain::ledger::Receivable`].
pub struct Receivable {
    pub id: i32,
    pub client_id: i32,
    pub amount: f64,
    pub due_date: NaiveDateTime,
    pub settled: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, QueryableByName)]
pub struct ReceivableRow {
    #[diesel(embed)]
    pub receivable: Receivable,
    #[diesel(sql_type = Nullable<Text>)]
    pub client_name: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::receivables)]
pub struct NewReceivable {
    pub client_id: i32,
    pub amount: f64,
    pub due_date: NaiveDateTime,
}

impl From<Payable> for DomainPayable {
    fn from(payable: Payable) -> Self {
        Self {
            id: payable.id,
            supplier_id: payable.supplier_id,
            supplier_name: None,
            amount: payable.amount,
            due_date: payable.due_date,
            settled: payable.settled,
            created_at: payable.created_at,
            updated_at: payable.updated_at,
        }
    }
}

impl From<PayableRow> for DomainPayable {
    fn from(row: PayableRow) -> Self {
        let mut payable: DomainPayable = row.payable.into();
        payable.supplier_name = row.supplier_name;
        payable
    }
}

impl From<&DomainNewPayable> for NewPayable {
    fn from(payable: &DomainNewPayable) -> Self {
        Self {
            supplier_id: payable.supplier_id,
            amount: payable.amount,
            due_date: payable.due_date,
        }
    }
}

impl From<Receivable> for DomainReceivable {
    fn from(receivable: Receivable) -> Self {
        Self {
            id: receivable.id,
            client_id: receivable.client_id,
            client_name: None,
            amount: receivable.amount,
            due_date: receivable.due_date,
            settled: receivable.settled,
            created_at: receivable.created_at,
            updated_at: receivable.updated_at,
        }
    }
}

impl From<ReceivableRow> for DomainReceivable {
    fn from(row: ReceivableRow) -> Self {
        let mut receivable: DomainReceivable = row.receivable.into();
        receivable.client_name = row.client_name;
        receivable
    }
}

impl From<&DomainNewReceivable> for NewReceivable {
    fn from(receivable: &DomainNewReceivable) -> Self {
        Self {
            client_id: receivable.client_id,
            amount: receivable.amount,
            due_date: receivable.due_date,
        }
    }
}
