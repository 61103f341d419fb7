use chrono::Utc;
use diesel::prelude::*;

use crate::domain::supplier::{NewSupplier, Supplier, UpdateSupplier};
use crate::pagination::PageResult;
use crate::query::{
    DeletedVisibility, FilterKind, FilterRule, ListQuery, QuerySpec, SoftDelete,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::list::run_list_query;
use crate::repository::{DieselRepository, SupplierReader, SupplierWriter};

pub const SUPPLIER_SPEC: QuerySpec = QuerySpec {
    table: "suppliers",
    id_column: "id",
    default_sort: "id",
    searchable: &["name", "email", "phone", "identification"],
    fulltext: &["name", "email", "identification"],
    sortable: &[
        ("id", "id"),
        ("name", "name"),
        ("email", "email"),
        ("created_at", "created_at"),
    ],
    filters: &[
        FilterRule {
            key: "is_active",
            column: "is_active",
            kind: FilterKind::BoolFlag,
        },
        FilterRule {
            key: "created_at",
            column: "created_at",
            kind: FilterKind::DateRange,
        },
    ],
    relations: &[],
    soft_delete: Some(SoftDelete {
        column: "deleted_at",
        visibility: DeletedVisibility::Include,
    }),
};

impl SupplierReader for DieselRepository {
    fn get_supplier_by_id(&self, id: i32) -> RepositoryResult<Option<Supplier>> {
        use crate::models::supplier::Supplier as DbSupplier;
        use crate::schema::suppliers;

        let mut conn = self.conn()?;
        let supplier = suppliers::table
            .find(id)
            .first::<DbSupplier>(&mut conn)
            .optional()?;

        Ok(supplier.map(Into::into))
    }

    fn list_suppliers(&self, query: ListQuery) -> RepositoryResult<PageResult<Supplier>> {
        use crate::models::supplier::Supplier as DbSupplier;

        let mut conn = self.conn()?;
        let page =
            run_list_query::<DbSupplier>(&mut conn, &SUPPLIER_SPEC, &query, self.planner())?;
        Ok(page.map(Into::into))
    }
}

impl SupplierWriter for DieselRepository {
    fn create_supplier(&self, new_supplier: &NewSupplier) -> RepositoryResult<Supplier> {
        use crate::models::supplier::{NewSupplier as DbNewSupplier, Supplier as DbSupplier};
        use crate::schema::suppliers;

        let mut conn = self.conn()?;
        let insertable: DbNewSupplier = new_supplier.into();
        let created = diesel::insert_into(suppliers::table)
            .values(&insertable)
            .get_result::<DbSupplier>(&mut conn)?;

        Ok(created.into())
    }

    fn update_supplier(
        &self,
        supplier_id: i32,
        updates: &UpdateSupplier,
    ) -> RepositoryResult<Supplier> {
        use crate::models::supplier::{Supplier as DbSupplier, UpdateSupplier as DbUpdateSupplier};
        use crate::schema::suppliers;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateSupplier = updates.into();

        let updated = diesel::update(suppliers::table.find(supplier_id))
            .set((&db_updates, suppliers::updated_at.eq(Utc::now().naive_utc())))
            .get_result::<DbSupplier>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_supplier(&self, supplier_id: i32) -> RepositoryResult<()> {
        use crate::schema::suppliers;

        let mut conn = self.conn()?;
        let now = Utc::now().naive_utc();
        diesel::update(suppliers::table.find(supplier_id))
            .set((
                suppliers::deleted_at.eq(Some(now)),
                suppliers::updated_at.eq(now),
            ))
            .execute(&mut conn)?;
        Ok(())
    }
}
