use validator::Validate;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::product::{MovementKind, NewStockMovement, Product, StockMovement};
use crate::dto::list::{ListParams, PageEnvelope};
use crate::forms::inventory::AdjustStockForm;
use crate::repository::errors::RepositoryError;
use crate::repository::{InventoryReader, InventoryWriter};
use crate::services::{ServiceError, ServiceResult, check_role};
use crate::{SERVICE_ACCESS_ROLE, SERVICE_ADMIN_ROLE};

/// One page of the movement history for a product.
pub fn list_stock_movements<R>(
    repo: &R,
    user: &AuthenticatedUser,
    product_id: i32,
    params: ListParams,
) -> ServiceResult<PageEnvelope<StockMovement>>
where
    R: InventoryReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let page = repo.list_stock_movements(product_id, params.into())?;
    Ok(page.into())
}

/// Parses and applies a stock adjustment.
///
/// The movement kind is parsed up front; an unknown kind fails the request
/// before the repository is touched.
pub fn adjust_stock<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: AdjustStockForm,
) -> ServiceResult<Product>
where
    R: InventoryWriter + ?Sized,
{
    if !check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    if let Err(err) = form.validate() {
        log::error!("Failed to validate adjustment form: {err}");
        return Err(ServiceError::Form(err.to_string()));
    }

    let kind: MovementKind = form
        .kind
        .parse()
        .map_err(|err: crate::domain::product::UnsupportedMovementKind| {
            ServiceError::Form(err.to_string())
        })?;

    let movement = NewStockMovement::new(form.product_id, kind, form.quantity, form.note);
    repo.adjust_stock(&movement).map_err(|err| match err {
        RepositoryError::NotFound => ServiceError::NotFound,
        other => ServiceError::Repository(other),
    })
}
