use serde::Deserialize;
use validator::Validate;

use crate::domain::client::{ClientType, NewClient, UpdateClient};

#[derive(Debug, Deserialize, Validate)]
pub struct AddClientForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub identification: Option<String>,
    pub client_type: ClientType,
}

impl From<AddClientForm> for NewClient {
    fn from(form: AddClientForm) -> Self {
        NewClient::new(
            form.name,
            form.email,
            form.phone,
            form.identification,
            form.client_type,
        )
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateClientForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub identification: Option<String>,
    pub client_type: ClientType,
}

impl From<UpdateClientForm> for UpdateClient {
    fn from(form: UpdateClientForm) -> Self {
        UpdateClient::new(
            form.name,
            form.email,
            form.phone,
            form.identification,
            form.client_type,
        )
    }
}
