use chrono::Utc;
use diesel::prelude::*;

use crate::domain::product::{NewProduct, NewStockMovement, Product, StockMovement, UpdateProduct};
use crate::pagination::PageResult;
use crate::query::{
    DeletedVisibility, FilterKind, FilterRule, ListQuery, QuerySpec, SoftDelete,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::list::run_list_query;
use crate::repository::{DieselRepository, InventoryReader, InventoryWriter, ProductReader,
    ProductWriter};

pub const PRODUCT_SPEC: QuerySpec = QuerySpec {
    table: "products",
    id_column: "id",
    default_sort: "id",
    searchable: &["sku", "name", "category"],
    fulltext: &["name", "category"],
    sortable: &[
        ("id", "id"),
        ("sku", "sku"),
        ("name", "name"),
        ("price", "price"),
        ("stock", "stock"),
        ("created_at", "created_at"),
    ],
    filters: &[
        FilterRule {
            key: "category",
            column: "category",
            kind: FilterKind::InSet,
        },
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

const MOVEMENT_KINDS: &[&str] = &["inbound", "outbound", "adjustment"];

/// Movements declare no searchable columns: free-text input on this
/// listing is ignored by the planner.
pub const STOCK_MOVEMENT_SPEC: QuerySpec = QuerySpec {
    table: "stock_movements",
    id_column: "id",
    default_sort: "id",
    searchable: &[],
    fulltext: &[],
    sortable: &[("id", "id"), ("quantity", "quantity"), ("created_at", "created_at")],
    filters: &[
        FilterRule {
            key: "kind",
            column: "kind",
            kind: FilterKind::Member(MOVEMENT_KINDS),
        },
        FilterRule {
            key: "created_at",
            column: "created_at",
            kind: FilterKind::DateRange,
        },
    ],
    relations: &[],
    soft_delete: None,
};

impl ProductReader for DieselRepository {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>> {
        use crate::models::product::Product as DbProduct;
        use crate::schema::products;

        let mut conn = self.conn()?;
        let product = products::table
            .find(id)
            .first::<DbProduct>(&mut conn)
            .optional()?;

        Ok(product.map(Into::into))
    }

    fn list_products(&self, query: ListQuery) -> RepositoryResult<PageResult<Product>> {
        use crate::models::product::Product as DbProduct;

        let mut conn = self.conn()?;
        let page = run_list_query::<DbProduct>(&mut conn, &PRODUCT_SPEC, &query, self.planner())?;
        Ok(page.map(Into::into))
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product> {
        use crate::models::product::{NewProduct as DbNewProduct, Product as DbProduct};
        use crate::schema::products;

        let mut conn = self.conn()?;
        let insertable: DbNewProduct = new_product.into();
        let created = diesel::insert_into(products::table)
            .values(&insertable)
            .get_result::<DbProduct>(&mut conn)?;

        Ok(created.into())
    }

    fn update_product(
        &self,
        product_id: i32,
        updates: &UpdateProduct,
    ) -> RepositoryResult<Product> {
        use crate::models::product::{Product as DbProduct, UpdateProduct as DbUpdateProduct};
        use crate::schema::products;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateProduct = updates.into();

        let updated = diesel::update(products::table.find(product_id))
            .set((&db_updates, products::updated_at.eq(Utc::now().naive_utc())))
            .get_result::<DbProduct>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_product(&self, product_id: i32) -> RepositoryResult<()> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let now = Utc::now().naive_utc();
        diesel::update(products::table.find(product_id))
            .set((
                products::deleted_at.eq(Some(now)),
                products::updated_at.eq(now),
            ))
            .execute(&mut conn)?;
        Ok(())
    }
}

impl InventoryReader for DieselRepository {
    fn list_stock_movements(
        &self,
        product_id: i32,
        query: ListQuery,
    ) -> RepositoryResult<PageResult<StockMovement>> {
        use crate::models::product::StockMovement as DbStockMovement;

        // The product scope is mandatory, so it is pinned here instead of
        // arriving through the caller's filter map.
        let query = query.filter("product_id", serde_json::json!(product_id));
        const SCOPED_SPEC: QuerySpec = QuerySpec {
            filters: &[
                FilterRule {
                    key: "product_id",
                    column: "product_id",
                    kind: FilterKind::InSet,
                },
                FilterRule {
                    key: "kind",
                    column: "kind",
                    kind: FilterKind::Member(MOVEMENT_KINDS),
                },
                FilterRule {
                    key: "created_at",
                    column: "created_at",
                    kind: FilterKind::DateRange,
                },
            ],
            ..STOCK_MOVEMENT_SPEC
        };

        let mut conn = self.conn()?;
        let page =
            run_list_query::<DbStockMovement>(&mut conn, &SCOPED_SPEC, &query, self.planner())?;
        Ok(page.map(Into::into))
    }
}

impl InventoryWriter for DieselRepository {
    fn adjust_stock(&self, movement: &NewStockMovement) -> RepositoryResult<Product> {
        use crate::models::product::{
            NewStockMovement as DbNewStockMovement, Product as DbProduct,
        };
        use crate::schema::{products, stock_movements};

        let mut conn = self.conn()?;
        let updated = conn.transaction::<DbProduct, diesel::result::Error, _>(|conn| {
            let product = products::table
                .find(movement.product_id)
                .first::<DbProduct>(conn)?;

            let new_stock = movement.kind.apply(product.stock, movement.quantity);
            let updated = diesel::update(products::table.find(product.id))
                .set((
                    products::stock.eq(new_stock),
                    products::updated_at.eq(Utc::now().naive_utc()),
                ))
                .get_result::<DbProduct>(conn)?;

            let insertable: DbNewStockMovement = movement.into();
            diesel::insert_into(stock_movements::table)
                .values(&insertable)
                .execute(conn)?;

            Ok(updated)
        })?;

        Ok(updated.into())
    }
}
