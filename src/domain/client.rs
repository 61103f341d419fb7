use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{normalize_email, normalize_phone_to_e164};

/// Legal form of a client, stored as text.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ClientType {
    Individual,
    Company,
}

/// Values accepted by the `client_type` filter, in storage form.
pub const CLIENT_TYPES: &[&str] = &["individual", "company"];

impl ClientType {
    pub fn as_str(self) -> &'static str {
        match self {
            ClientType::Individual => "individual",
            ClientType::Company => "company",
        }
    }
}

impl From<&str> for ClientType {
    fn from(s: &str) -> Self {
        match s {
            "company" => ClientType::Company,
            _ => ClientType::Individual,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Tax or national identification number.
    pub identification: Option<String>,
    pub client_type: ClientType,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewClient {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub identification: Option<String>,
    pub client_type: ClientType,
}

impl NewClient {
    /// Builds a normalized record; invalid email or phone values are
    /// dropped rather than stored raw.
    #[must_use]
    pub fn new(
        name: String,
        email: Option<String>,
        phone: Option<String>,
        identification: Option<String>,
        client_type: ClientType,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.and_then(|s| normalize_email(s).ok()),
            phone: phone.and_then(|s| normalize_phone_to_e164(&s).ok()),
            identification: identification
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            client_type,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateClient {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub identification: Option<String>,
    pub client_type: ClientType,
}

impl UpdateClient {
    #[must_use]
    pub fn new(
        name: String,
        email: Option<String>,
        phone: Option<String>,
        identification: Option<String>,
        client_type: ClientType,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.and_then(|s| normalize_email(s).ok()),
            phone: phone.and_then(|s| normalize_phone_to_e164(&s).ok()),
            identification: identification
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            client_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_client_normalizes_contact_fields() {
        let client = NewClient::new(
            "  Corp Industries ".to_string(),
            Some("Sales@CORP.example".to_string()),
            Some("junk".to_string()),
            Some("  ".to_string()),
            ClientType::Company,
        );
        assert_eq!(client.name, "Corp Industries");
        assert_eq!(client.email.as_deref(), Some("sales@corp.example"));
        assert_eq!(client.phone, None);
        assert_eq!(client.identification, None);
    }

    #[test]
    fn client_type_round_trips_through_storage_form() {
        assert_eq!(ClientType::from("company"), ClientType::Company);
        assert_eq!(ClientType::from("anything-else"), ClientType::Individual);
        assert_eq!(ClientType::Company.as_str(), "company");
    }
}
