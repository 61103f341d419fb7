use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::client::{
    Client as DomainClient, ClientType, NewClient as DomainNewClient,
    UpdateClient as DomainUpdateClient,
};

#[derive(Debug, Clone, Identifiable, Queryable, QueryableByName)]
#[diesel(table_name = crate::schema::clients)]
/// Diesel model for [`crate::domain::client::Client`].
pub struct Client {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub identification: Option<String>,
    pub client_type: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::clients)]
/// Insertable form of [`Client`].
pub struct NewClient<'a> {
    pub name: &'a str,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub identification: Option<&'a str>,
    pub client_type: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::clients)]
/// Data used when updating a [`Client`] record.
pub struct UpdateClient<'a> {
    pub name: &'a str,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub identification: Option<&'a str>,
    pub client_type: &'a str,
}

impl From<Client> for DomainClient {
    fn from(client: Client) -> Self {
        Self {
            id: client.id,
            name: client.name,
            email: client.email,
            phone: client.phone,
            identification: client.identification,
            client_type: ClientType::from(client.client_type.as_str()),
            created_at: client.created_at,
            updated_at: client.updated_at,
            deleted_at: client.deleted_at,
        }
    }
}

impl<'a> From<&'a DomainNewClient> for NewClient<'a> {
    fn from(client: &'a DomainNewClient) -> Self {
        Self {
            name: client.name.as_str(),
            email: client.email.as_deref(),
            phone: client.phone.as_deref(),
            identification: client.identification.as_deref(),
            client_type: client.client_type.as_str(),
        }
    }
}

impl<'a> From<&'a DomainUpdateClient> for UpdateClient<'a> {
    fn from(client: &'a DomainUpdateClient) -> Self {
        Self {
            name: client.name.as_str(),
            email: client.email.as_deref(),
            phone: client.phone.as_deref(),
            identification: client.identification.as_deref(),
            client_type: client.client_type.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn client_into_domain_parses_type() {
        let now = Utc::now().naive_utc();
        let db_client = Client {
            id: 7,
            name: "Corp Industries".to_string(),
            email: Some("sales@corp.example".to_string()),
            phone: None,
            identification: Some("B-1234".to_string()),
            client_type: "company".to_string(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        let domain: DomainClient = db_client.into();
        assert_eq!(domain.id, 7);
        assert_eq!(domain.client_type, ClientType::Company);
        assert_eq!(domain.identification.as_deref(), Some("B-1234"));
    }

    #[test]
    fn from_domain_new_borrows_fields() {
        let domain = DomainNewClient::new(
            "Jane".to_string(),
            Some("jane@example.com".to_string()),
            None,
            None,
            ClientType::Individual,
        );
        let new: NewClient = (&domain).into();
        assert_eq!(new.name, "Jane");
        assert_eq!(new.email, Some("jane@example.com"));
        assert_eq!(new.client_type, "individual");
    }
}
