use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{normalize_email, normalize_phone_to_e164};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
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

#[derive(Clone, Debug, Deserialize)]
pub struct NewSupplier {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub identification: Option<String>,
    pub is_active: bool,
}

impl NewSupplier {
    #[must_use]
    pub fn new(
        name: String,
        email: Option<String>,
        phone: Option<String>,
        identification: Option<String>,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.and_then(|s| normalize_email(s).ok()),
            phone: phone.and_then(|s| normalize_phone_to_e164(&s).ok()),
            identification: identification
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            is_active: true,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateSupplier {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub identification: Option<String>,
    pub is_active: bool,
}
