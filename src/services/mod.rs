//! Application services: role checks, form validation, orchestration.
//!
//! Services stay generic over the repository traits so every one of them
//! can be exercised against the mock repository.

use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod client;
pub mod inventory;
pub mod ledger;
pub mod order;
pub mod product;
pub mod supplier;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("not found")]
    NotFound,
    #[error("form validation failed: {0}")]
    Form(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// True when the user carries the given role.
pub fn check_role(role: &str, roles: &[String]) -> bool {
    roles.iter().any(|r| r == role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_role_matches_exactly() {
        let roles = vec!["erp".to_string(), "erp_admin".to_string()];
        assert!(check_role("erp", &roles));
        assert!(check_role("erp_admin", &roles));
        assert!(!check_role("erp_", &roles));
        assert!(!check_role("admin", &roles));
    }
}
