//! The authenticated caller as seen by the service layer.
//!
//! Authentication itself happens upstream; services only consult the roles
//! carried here.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub email: String,
    pub name: String,
    pub roles: Vec<String>,
}

impl AuthenticatedUser {
    pub fn new(email: impl Into<String>, name: impl Into<String>, roles: Vec<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            roles,
        }
    }
}
