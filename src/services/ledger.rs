use crate::domain::auth::AuthenticatedUser;
use crate::domain::ledger::{NewPayable, NewReceivable, Payable, Receivable};
use crate::dto::list::{ListParams, PageEnvelope};
use crate::repository::{PayableReader, PayableWriter, ReceivableReader, ReceivableWriter};
use crate::services::{ServiceError, ServiceResult, check_role};
use crate::{SERVICE_ACCESS_ROLE, SERVICE_ADMIN_ROLE};

pub fn list_payables<R>(
    repo: &R,
    user: &AuthenticatedUser,
    params: ListParams,
) -> ServiceResult<PageEnvelope<Payable>>
where
    R: PayableReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let page = repo.list_payables(params.into())?;
    Ok(page.into())
}

pub fn create_payable<R>(
    repo: &R,
    user: &AuthenticatedUser,
    new_payable: &NewPayable,
) -> ServiceResult<Payable>
where
    R: PayableWriter + ?Sized,
{
    if !check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    repo.create_payable(new_payable).map_err(ServiceError::from)
}

pub fn settle_payable<R>(
    repo: &R,
    user: &AuthenticatedUser,
    payable_id: i32,
) -> ServiceResult<Payable>
where
    R: PayableWriter + ?Sized,
{
    if !check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    repo.settle_payable(payable_id).map_err(ServiceError::from)
}

pub fn list_receivables<R>(
    repo: &R,
    user: &AuthenticatedUser,
    params: ListParams,
) -> ServiceResult<PageEnvelope<Receivable>>
where
    R: ReceivableReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let page = repo.list_receivables(params.into())?;
    Ok(page.into())
}

pub fn create_receivable<R>(
    repo: &R,
    user: &AuthenticatedUser,
    new_receivable: &NewReceivable,
) -> ServiceResult<Receivable>
where
    R: ReceivableWriter + ?Sized,
{
    if !check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    repo.create_receivable(new_receivable)
        .map_err(ServiceError::from)
}

pub fn settle_receivable<R>(
    repo: &R,
    user: &AuthenticatedUser,
    receivable_id: i32,
) -> ServiceResult<Receivable>
where
    R: ReceivableWriter + ?Sized,
{
    if !check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    repo.settle_receivable(receivable_id)
        .map_err(ServiceError::from)
}
