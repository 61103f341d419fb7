use validator::Validate;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::client::Client;
use crate::dto::list::{ListParams, PageEnvelope};
use crate::forms::client::{AddClientForm, UpdateClientForm};
use crate::repository::{ClientReader, ClientWriter};
use crate::services::{ServiceError, ServiceResult, check_role};
use crate::{SERVICE_ACCESS_ROLE, SERVICE_ADMIN_ROLE};

/// Fetches a client by its identifier.
pub fn get_client_by_id<R>(
    repo: &R,
    user: &AuthenticatedUser,
    client_id: i32,
) -> ServiceResult<Option<Client>>
where
    R: ClientReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    repo.get_client_by_id(client_id).map_err(ServiceError::from)
}

/// Loads one page of clients for the given listing parameters.
pub fn list_clients<R>(
    repo: &R,
    user: &AuthenticatedUser,
    params: ListParams,
) -> ServiceResult<PageEnvelope<Client>>
where
    R: ClientReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let page = repo.list_clients(params.into())?;
    Ok(page.into())
}

/// Validates the add-client form and persists a new client record.
pub fn add_client<R>(repo: &R, user: &AuthenticatedUser, form: AddClientForm) -> ServiceResult<()>
where
    R: ClientWriter + ?Sized,
{
    if !check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    if let Err(err) = form.validate() {
        log::error!("Failed to validate client form: {err}");
        return Err(ServiceError::Form(err.to_string()));
    }

    repo.create_clients(&[form.into()])?;
    Ok(())
}

/// Applies the validated updates to the client entity.
pub fn update_client<R>(
    repo: &R,
    user: &AuthenticatedUser,
    client_id: i32,
    form: UpdateClientForm,
) -> ServiceResult<Client>
where
    R: ClientWriter + ?Sized,
{
    if !check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    if let Err(err) = form.validate() {
        log::error!("Failed to validate client form: {err}");
        return Err(ServiceError::Form(err.to_string()));
    }

    repo.update_client(client_id, &form.into())
        .map_err(ServiceError::from)
}

/// Marks the client as deleted. Listings keep showing the row.
pub fn delete_client<R>(repo: &R, user: &AuthenticatedUser, client_id: i32) -> ServiceResult<()>
where
    R: ClientWriter + ?Sized,
{
    if !check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    repo.delete_client(client_id).map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::client::ClientType;
    use crate::pagination::PageResult;
    use crate::repository::mock::MockRepository;

    fn user(roles: &[&str]) -> AuthenticatedUser {
        AuthenticatedUser::new(
            "ops@example.com",
            "Ops",
            roles.iter().map(|r| r.to_string()).collect(),
        )
    }

    #[test]
    fn list_requires_access_role() {
        let repo = MockRepository::new();
        let result = list_clients(&repo, &user(&[]), ListParams::default());
        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    #[test]
    fn list_wraps_page_in_envelope() {
        let mut repo = MockRepository::new();
        repo.expect_list_clients()
            .returning(|_| Ok(PageResult::new(Vec::<Client>::new(), 1, 10, 0)));

        let envelope = list_clients(&repo, &user(&["erp"]), ListParams::default()).unwrap();
        assert_eq!(envelope.current_page, 1);
        assert_eq!(envelope.total, 0);
        assert_eq!(envelope.last_page, 1);
    }

    #[test]
    fn add_client_requires_admin_role() {
        let repo = MockRepository::new();
        let form = AddClientForm {
            name: "Acme".to_string(),
            email: None,
            phone: None,
            identification: None,
            client_type: ClientType::Company,
        };
        let result = add_client(&repo, &user(&["erp"]), form);
        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    #[test]
    fn add_client_rejects_invalid_form() {
        let repo = MockRepository::new();
        let form = AddClientForm {
            name: String::new(),
            email: None,
            phone: None,
            identification: None,
            client_type: ClientType::Individual,
        };
        let result = add_client(&repo, &user(&["erp_admin"]), form);
        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn add_client_persists_valid_form() {
        let mut repo = MockRepository::new();
        repo.expect_create_clients()
            .withf(|clients| clients.len() == 1 && clients[0].name == "Acme")
            .returning(|clients| Ok(clients.len()));

        let form = AddClientForm {
            name: "Acme".to_string(),
            email: Some("sales@acme.example".to_string()),
            phone: None,
            identification: None,
            client_type: ClientType::Company,
        };
        add_client(&repo, &user(&["erp_admin"]), form).unwrap();
    }
}
