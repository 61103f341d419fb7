use validator::Validate;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::product::Product;
use crate::dto::list::{ListParams, PageEnvelope};
use crate::forms::product::{AddProductForm, UpdateProductForm};
use crate::repository::{ProductReader, ProductWriter};
use crate::services::{ServiceError, ServiceResult, check_role};
use crate::{SERVICE_ACCESS_ROLE, SERVICE_ADMIN_ROLE};

pub fn get_product_by_id<R>(
    repo: &R,
    user: &AuthenticatedUser,
    product_id: i32,
) -> ServiceResult<Option<Product>>
where
    R: ProductReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    repo.get_product_by_id(product_id)
        .map_err(ServiceError::from)
}

pub fn list_products<R>(
    repo: &R,
    user: &AuthenticatedUser,
    params: ListParams,
) -> ServiceResult<PageEnvelope<Product>>
where
    R: ProductReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let page = repo.list_products(params.into())?;
    Ok(page.into())
}

pub fn add_product<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: AddProductForm,
) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    if !check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    if let Err(err) = form.validate() {
        log::error!("Failed to validate product form: {err}");
        return Err(ServiceError::Form(err.to_string()));
    }

    repo.create_product(&form.into()).map_err(ServiceError::from)
}

pub fn update_product<R>(
    repo: &R,
    user: &AuthenticatedUser,
    product_id: i32,
    form: UpdateProductForm,
) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    if !check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    if let Err(err) = form.validate() {
        log::error!("Failed to validate product form: {err}");
        return Err(ServiceError::Form(err.to_string()));
    }

    repo.update_product(product_id, &form.into())
        .map_err(ServiceError::from)
}

pub fn delete_product<R>(repo: &R, user: &AuthenticatedUser, product_id: i32) -> ServiceResult<()>
where
    R: ProductWriter + ?Sized,
{
    if !check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    repo.delete_product(product_id).map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::mock::MockRepository;

    fn admin() -> AuthenticatedUser {
        AuthenticatedUser::new("ops@example.com", "Ops", vec!["erp_admin".to_string()])
    }

    #[test]
    fn add_product_rejects_negative_price() {
        let repo = MockRepository::new();
        let form = AddProductForm {
            sku: "SKU-1".to_string(),
            name: "Widget".to_string(),
            category: "tools".to_string(),
            price: -1.0,
            stock: None,
        };
        let result = add_product(&repo, &admin(), form);
        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn add_product_defaults_stock_to_zero() {
        let mut repo = MockRepository::new();
        repo.expect_create_product()
            .withf(|p| p.stock == 0 && p.sku == "SKU-1")
            .returning(|p| {
                let now = chrono::Utc::now().naive_utc();
                Ok(Product {
                    id: 1,
                    sku: p.sku.clone(),
                    name: p.name.clone(),
                    category: p.category.clone(),
                    price: p.price,
                    stock: p.stock,
                    is_active: true,
                    created_at: now,
                    updated_at: now,
                    deleted_at: None,
                })
            });

        let form = AddProductForm {
            sku: "SKU-1".to_string(),
            name: "Widget".to_string(),
            category: "tools".to_string(),
            price: 9.99,
            stock: None,
        };
        let product = add_product(&repo, &admin(), form).unwrap();
        assert_eq!(product.stock, 0);
    }
}
