use serde::Deserialize;
use validator::Validate;

/// Stock adjustment as submitted by the caller. The movement kind stays a
/// string here; the service parses it and rejects unknown kinds before
/// anything is written.
#[derive(Debug, Deserialize, Validate)]
pub struct AdjustStockForm {
    pub product_id: i32,
    #[validate(length(min = 1))]
    pub kind: String,
    pub quantity: i32,
    pub note: Option<String>,
}
