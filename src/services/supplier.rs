use crate::domain::auth::AuthenticatedUser;
use crate::domain::supplier::{NewSupplier, Supplier, UpdateSupplier};
use crate::dto::list::{ListParams, PageEnvelope};
use crate::repository::{SupplierReader, SupplierWriter};
use crate::services::{ServiceError, ServiceResult, check_role};
use crate::{SERVICE_ACCESS_ROLE, SERVICE_ADMIN_ROLE};

pub fn get_supplier_by_id<R>(
    repo: &R,
    user: &AuthenticatedUser,
    supplier_id: i32,
) -> ServiceResult<Option<Supplier>>
where
    R: SupplierReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    repo.get_supplier_by_id(supplier_id)
        .map_err(ServiceError::from)
}

pub fn list_suppliers<R>(
    repo: &R,
    user: &AuthenticatedUser,
    params: ListParams,
) -> ServiceResult<PageEnvelope<Supplier>>
where
    R: SupplierReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let page = repo.list_suppliers(params.into())?;
    Ok(page.into())
}

pub fn create_supplier<R>(
    repo: &R,
    user: &AuthenticatedUser,
    new_supplier: &NewSupplier,
) -> ServiceResult<Supplier>
where
    R: SupplierWriter + ?Sized,
{
    if !check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    repo.create_supplier(new_supplier)
        .map_err(ServiceError::from)
}

pub fn update_supplier<R>(
    repo: &R,
    user: &AuthenticatedUser,
    supplier_id: i32,
    updates: &UpdateSupplier,
) -> ServiceResult<Supplier>
where
    R: SupplierWriter + ?Sized,
{
    if !check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    repo.update_supplier(supplier_id, updates)
        .map_err(ServiceError::from)
}

pub fn delete_supplier<R>(repo: &R, user: &AuthenticatedUser, supplier_id: i32) -> ServiceResult<()>
where
    R: SupplierWriter + ?Sized,
{
    if !check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    repo.delete_supplier(supplier_id).map_err(ServiceError::from)
}
