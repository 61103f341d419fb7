use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::supplier::{
    NewSupplier as DomainNewSupplier, Supplier as DomainSupplier,
    UpdateSupplier as DomainUpdateSupplier,
};

#[derive(Debug, Clone, Identifiable, Queryable, QueryableByName)]
#[diesel(table_name = crate::schema::suppliers)]
/// Diesel model for [`crate::domain::supplier::Supplier`].
pub struct Supplier {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub identification: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::suppliers)]
pub struct NewSupplier<'a> {
    pub name: &'a str,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub identification: Option<&'a str>,
    pub is_active: bool,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::suppliers)]
pub struct UpdateSupplier<'a> {
    pub name: &'a str,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub identification: Option<&'a str>,
    pub is_active: bool,
}

impl From<Supplier> for DomainSupplier {
    fn from(supplier: Supplier) -> Self {
        Self {
            id: supplier.id,
            name: supplier.name,
            email: supplier.email,
            phone: supplier.phone,
            identification: supplier.identification,
            is_active: supplier.is_active,
            created_at: supplier.created_at,
            updated_at: supplier.updated_at,
            deleted_at: supplier.deleted_at,
        }
    }
}

impl<'a> From<&'a DomainNewSupplier> for NewSupplier<'a> {
    fn from(supplier: &'a DomainNewSupplier) -> Self {
        Self {
            name: supplier.name.as_str(),
            email: supplier.email.as_deref(),
            phone: supplier.phone.as_deref(),
            identification: supplier.identification.as_deref(),
            is_active: supplier.is_active,
        }
    }
}

impl<'a> From<&'a DomainUpdateSupplier> for UpdateSupplier<'a> {
    fn from(supplier: &'a DomainUpdateSupplier) -> Self {
        Self {
            name: supplier.name.as_str(),
            email: supplier.email.as_deref(),
            phone: supplier.phone.as_deref(),
            identification: supplier.identification.as_deref(),
            is_active: supplier.is_active,
        }
    }
}
