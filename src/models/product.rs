use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{
    MovementKind, NewProduct as DomainNewProduct, NewStockMovement as DomainNewStockMovement,
    Product as DomainProduct, StockMovement as DomainStockMovement,
    UpdateProduct as DomainUpdateProduct,
};

#[derive(Debug, Clone, Identifiable, Queryable, QueryableByName)]
#[diesel(table_name = crate::schema::products)]
/// Diesel model for [`crate::domain::product::Product`].
pub struct Product {
    pub id: i32,
    pub sku: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: i32,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct<'a> {
    pub sku: &'a str,
    pub name: &'a str,
    pub category: &'a str,
    pub price: f64,
    pub stock: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::products)]
pub struct UpdateProduct<'a> {
    pub name: &'a str,
    pub category: &'a str,
    pub price: f64,
    pub is_active: bool,
}

#[derive(Debug, Clone, Identifiable, Queryable, QueryableByName, Associations)]
#[diesel(table_name = crate::schema::stock_movements)]
#[diesel(belongs_to(Product, foreign_key = product_id))]
pub struct StockMovement {
    pub id: i32,
    pub product_id: i32,
    pub kind: String,
    pub quantity: i32,
    pub note: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::stock_movements)]
pub struct NewStockMovement<'a> {
    pub product_id: i32,
    pub kind: &'a str,
    pub quantity: i32,
    pub note: Option<&'a str>,
}

impl From<Product> for DomainProduct {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            sku: product.sku,
            name: product.name,
            category: product.category,
            price: product.price,
            stock: product.stock,
            is_active: product.is_active,
            created_at: product.created_at,
            updated_at: product.updated_at,
            deleted_at: product.deleted_at,
        }
    }
}

impl<'a> From<&'a DomainNewProduct> for NewProduct<'a> {
    fn from(product: &'a DomainNewProduct) -> Self {
        Self {
            sku: product.sku.as_str(),
            name: product.name.as_str(),
            category: product.category.as_str(),
            price: product.price,
            stock: product.stock,
        }
    }
}

impl<'a> From<&'a DomainUpdateProduct> for UpdateProduct<'a> {
    fn from(product: &'a DomainUpdateProduct) -> Self {
        Self {
            name: product.name.as_str(),
            category: product.category.as_str(),
            price: product.price,
            is_active: product.is_active,
        }
    }
}

impl From<StockMovement> for DomainStockMovement {
    fn from(movement: StockMovement) -> Self {
        Self {
            id: movement.id,
            product_id: movement.product_id,
            // Stored kinds are validated on the way in; an unexpected value
            // degrades to an absolute adjustment rather than panicking.
            kind: movement
                .kind
                .parse::<MovementKind>()
                .unwrap_or(MovementKind::Adjustment),
            quantity: movement.quantity,
            note: movement.note,
            created_at: movement.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewStockMovement> for NewStockMovement<'a> {
    fn from(movement: &'a DomainNewStockMovement) -> Self {
        Self {
            product_id: movement.product_id,
            kind: movement.kind.as_str(),
            quantity: movement.quantity,
            note: movement.note.as_deref(),
        }
    }
}
