use chrono::Utc;
use diesel::prelude::*;

use crate::domain::ledger::{NewPayable, NewReceivable, Payable, Receivable};
use crate::pagination::PageResult;
use crate::query::{FilterKind, FilterRule, ListQuery, QuerySpec, RelationSpec};
use crate::repository::errors::RepositoryResult;
use crate::repository::list::run_list_query;
use crate::repository::{
    DieselRepository, PayableReader, PayableWriter, ReceivableReader, ReceivableWriter,
};

pub const PAYABLE_SPEC: QuerySpec = QuerySpec {
    table: "payables",
    id_column: "id",
    default_sort: "due_date",
    searchable: &[],
    fulltext: &[],
    sortable: &[
        ("id", "id"),
        ("amount", "amount"),
        ("due_date", "due_date"),
        ("supplier_name", "suppliers.name"),
    ],
    filters: &[
        FilterRule {
            key: "settled",
            column: "settled",
            kind: FilterKind::BoolFlag,
        },
        FilterRule {
            key: "supplier_id",
            column: "supplier_id",
            kind: FilterKind::InSet,
        },
        FilterRule {
            key: "due_date",
            column: "due_date",
            kind: FilterKind::DateRange,
        },
    ],
    relations: &[RelationSpec {
        table: "suppliers",
        local_key: "supplier_id",
        foreign_key: "id",
        projected: &[("name", "supplier_name")],
        searchable: &[],
    }],
    soft_delete: None,
};

pub const RECEIVABLE_SPEC: QuerySpec = QuerySpec {
    table: "receivables",
    id_column: "id",
    default_sort: "due_date",
    searchable: &[],
    fulltext: &[],
    sortable: &[
        ("id", "id"),
        ("amount", "amount"),
        ("due_date", "due_date"),
        ("client_name", "clients.name"),
    ],
    filters: &[
        FilterRule {
            key: "settled",
            column: "settled",
            kind: FilterKind::BoolFlag,
        },
        FilterRule {
            key: "client_id",
            column: "client_id",
            kind: FilterKind::InSet,
        },
        FilterRule {
            key: "due_date",
            column: "due_date",
            kind: FilterKind::DateRange,
        },
    ],
    relations: &[RelationSpec {
        table: "clients",
        local_key: "client_id",
        foreign_key: "id",
        projected: &[("name", "client_name")],
        searchable: &[],
    }],
    soft_delete: None,
};

impl PayableReader for DieselRepository {
    fn get_payable_by_id(&self, id: i32) -> RepositoryResult<Option<Payable>> {
        use crate::models::ledger::Payable as DbPayable;
        use crate::schema::payables;

        let mut conn = self.conn()?;
        let payable = payables::table
            .find(id)
            .first::<DbPayable>(&mut conn)
            .optional()?;

        Ok(payable.map(Into::into))
    }

    fn list_payables(&self, query: ListQuery) -> RepositoryResult<PageResult<Payable>> {
        use crate::models::ledger::PayableRow;

        let mut conn = self.conn()?;
        let page = run_list_query::<PayableRow>(&mut conn, &PAYABLE_SPEC, &query, self.planner())?;
        Ok(page.map(Into::into))
    }
}

impl PayableWriter for DieselRepository {
    fn create_payable(&self, new_payable: &NewPayable) -> RepositoryResult<Payable> {
        use crate::models::ledger::{NewPayable as DbNewPayable, Payable as DbPayable};
        use crate::schema::payables;

        let mut conn = self.conn()?;
        let insertable: DbNewPayable = new_payable.into();
        let created = diesel::insert_into(payables::table)
            .values(&insertable)
            .get_result::<DbPayable>(&mut conn)?;

        Ok(created.into())
    }

    fn settle_payable(&self, payable_id: i32) -> RepositoryResult<Payable> {
        use crate::models::ledger::Payable as DbPayable;
        use crate::schema::payables;

        let mut conn = self.conn()?;
        let settled = diesel::update(payables::table.find(payable_id))
            .set((
                payables::settled.eq(true),
                payables::updated_at.eq(Utc::now().naive_utc()),
            ))
            .get_result::<DbPayable>(&mut conn)?;

        Ok(settled.into())
    }
}

impl ReceivableReader for DieselRepository {
    fn get_receivable_by_id(&self, id: i32) -> RepositoryResult<Option<Receivable>> {
        use crate::models::ledger::Receivable as DbReceivable;
        use crate::schema::receivables;

        let mut conn = self.conn()?;
        let receivable = receivables::table
            .find(id)
            .first::<DbReceivable>(&mut conn)
            .optional()?;

        Ok(receivable.map(Into::into))
    }

    fn list_receivables(&self, query: ListQuery) -> RepositoryResult<PageResult<Receivable>> {
        use crate::models::ledger::ReceivableRow;

        let mut conn = self.conn()?;
        let page =
            run_list_query::<ReceivableRow>(&mut conn, &RECEIVABLE_SPEC, &query, self.planner())?;
        Ok(page.map(Into::into))
    }
}

impl ReceivableWriter for DieselRepository {
    fn create_receivable(&self, new_receivable: &NewReceivable) -> RepositoryResult<Receivable> {
        use crate::models::ledger::{NewReceivable as DbNewReceivable, Receivable as DbReceivable};
        use crate::schema::receivables;

        let mut conn = self.conn()?;
        let insertable: DbNewReceivable = new_receivable.into();
        let created = diesel::insert_into(receivables::table)
            .values(&insertable)
            .get_result::<DbReceivable>(&mut conn)?;

        Ok(created.into())
    }

    fn settle_receivable(&self, receivable_id: i32) -> RepositoryResult<Receivable> {
        use crate::models::ledger::Receivable as DbReceivable;
        use crate::schema::receivables;

        let mut conn = self.conn()?;
        let settled = diesel::update(receivables::table.find(receivable_id))
            .set((
                receivables::settled.eq(true),
                receivables::updated_at.eq(Utc::now().naive_utc()),
            ))
            .get_result::<DbReceivable>(&mut conn)?;

        Ok(settled.into())
    }
}
