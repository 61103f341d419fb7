use crate::domain::auth::AuthenticatedUser;
use crate::domain::order::{
    NewPurchaseOrder, NewSalesOrder, OrderStatus, PurchaseOrder, SalesOrder,
};
use crate::dto::list::{ListParams, PageEnvelope};
use crate::repository::{
    PurchaseOrderReader, PurchaseOrderWriter, SalesOrderReader, SalesOrderWriter,
};
use crate::services::{ServiceError, ServiceResult, check_role};
use crate::{SERVICE_ACCESS_ROLE, SERVICE_ADMIN_ROLE};

pub fn get_sales_order_by_id<R>(
    repo: &R,
    user: &AuthenticatedUser,
    order_id: i32,
) -> ServiceResult<Option<SalesOrder>>
where
    R: SalesOrderReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    repo.get_sales_order_by_id(order_id)
        .map_err(ServiceError::from)
}

pub fn list_sales_orders<R>(
    repo: &R,
    user: &AuthenticatedUser,
    params: ListParams,
) -> ServiceResult<PageEnvelope<SalesOrder>>
where
    R: SalesOrderReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let page = repo.list_sales_orders(params.into())?;
    Ok(page.into())
}

pub fn create_sales_order<R>(
    repo: &R,
    user: &AuthenticatedUser,
    new_order: &NewSalesOrder,
) -> ServiceResult<SalesOrder>
where
    R: SalesOrderWriter + ?Sized,
{
    if !check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    repo.create_sales_order(new_order).map_err(ServiceError::from)
}

pub fn update_sales_order_status<R>(
    repo: &R,
    user: &AuthenticatedUser,
    order_id: i32,
    status: OrderStatus,
) -> ServiceResult<SalesOrder>
where
    R: SalesOrderWriter + ?Sized,
{
    if !check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    repo.update_sales_order_status(order_id, status)
        .map_err(ServiceError::from)
}

pub fn delete_sales_order<R>(
    repo: &R,
    user: &AuthenticatedUser,
    order_id: i32,
) -> ServiceResult<()>
where
    R: SalesOrderWriter + ?Sized,
{
    if !check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    repo.delete_sales_order(order_id).map_err(ServiceError::from)
}

pub fn get_purchase_order_by_id<R>(
    repo: &R,
    user: &AuthenticatedUser,
    order_id: i32,
) -> ServiceResult<Option<PurchaseOrder>>
where
    R: PurchaseOrderReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    repo.get_purchase_order_by_id(order_id)
        .map_err(ServiceError::from)
}

pub fn list_purchase_orders<R>(
    repo: &R,
    user: &AuthenticatedUser,
    params: ListParams,
) -> ServiceResult<PageEnvelope<PurchaseOrder>>
where
    R: PurchaseOrderReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let page = repo.list_purchase_orders(params.into())?;
    Ok(page.into())
}

pub fn create_purchase_order<R>(
    repo: &R,
    user: &AuthenticatedUser,
    new_order: &NewPurchaseOrder,
) -> ServiceResult<PurchaseOrder>
where
    R: PurchaseOrderWriter + ?Sized,
{
    if !check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    repo.create_purchase_order(new_order)
        .map_err(ServiceError::from)
}

pub fn update_purchase_order_status<R>(
    repo: &R,
    user: &AuthenticatedUser,
    order_id: i32,
    status: OrderStatus,
) -> ServiceResult<PurchaseOrder>
where
    R: PurchaseOrderWriter + ?Sized,
{
    if !check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    repo.update_purchase_order_status(order_id, status)
        .map_err(ServiceError::from)
}

pub fn delete_purchase_order<R>(
    repo: &R,
    user: &AuthenticatedUser,
    order_id: i32,
) -> ServiceResult<()>
where
    R: PurchaseOrderWriter + ?Sized,
{
    if !check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    repo.delete_purchase_order(order_id)
        .map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::PageResult;
    use crate::repository::mock::MockRepository;

    #[test]
    fn listing_requires_access_role() {
        let repo = MockRepository::new();
        let user = AuthenticatedUser::new("x@example.com", "X", vec!["other".to_string()]);
        let result = list_sales_orders(&repo, &user, ListParams::default());
        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    #[test]
    fn listing_passes_through_for_readers() {
        let mut repo = MockRepository::new();
        repo.expect_list_sales_orders()
            .returning(|_| Ok(PageResult::new(Vec::<SalesOrder>::new(), 1, 10, 0)));

        let user = AuthenticatedUser::new("x@example.com", "X", vec!["erp".to_string()]);
        let envelope = list_sales_orders(&repo, &user, ListParams::default()).unwrap();
        assert!(envelope.data.is_empty());
    }
}
