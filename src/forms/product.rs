use serde::Deserialize;
use validator::Validate;

use crate::domain::product::{NewProduct, UpdateProduct};

#[derive(Debug, Deserialize, Validate)]
pub struct AddProductForm {
    #[validate(length(min = 1))]
    pub sku: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub category: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    pub stock: Option<i32>,
}

impl From<AddProductForm> for NewProduct {
    fn from(form: AddProductForm) -> Self {
        NewProduct {
            sku: form.sku.trim().to_string(),
            name: form.name.trim().to_string(),
            category: form.category.trim().to_string(),
            price: form.price,
            stock: form.stock.unwrap_or(0),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProductForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub category: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    pub is_active: bool,
}

impl From<UpdateProductForm> for UpdateProduct {
    fn from(form: UpdateProductForm) -> Self {
        UpdateProduct {
            name: form.name.trim().to_string(),
            category: form.category.trim().to_string(),
            price: form.price,
            is_active: form.is_active,
        }
    }
}
