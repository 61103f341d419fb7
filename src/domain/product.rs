use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::types::sanitize_note;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: i32,
    pub sku: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    /// Current on-hand quantity, maintained by the stock adjustment path.
    pub stock: i32,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewProduct {
    pub sku: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: i32,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateProduct {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub is_active: bool,
}

/// How a stock movement changes the counter: add, subtract, or overwrite.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    Inbound,
    Outbound,
    Adjustment,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported movement kind: {0}")]
pub struct UnsupportedMovementKind(pub String);

impl MovementKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MovementKind::Inbound => "inbound",
            MovementKind::Outbound => "outbound",
            MovementKind::Adjustment => "adjustment",
        }
    }

    /// The stock value after applying this movement to `current`.
    /// Saturates at the i32 bounds instead of wrapping.
    pub fn apply(self, current: i32, quantity: i32) -> i32 {
        match self {
            MovementKind::Inbound => current.saturating_add(quantity),
            MovementKind::Outbound => current.saturating_sub(quantity),
            MovementKind::Adjustment => quantity,
        }
    }
}

impl Display for MovementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MovementKind {
    type Err = UnsupportedMovementKind;

    // An unrecognized kind must be rejected before any mutation happens.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inbound" => Ok(MovementKind::Inbound),
            "outbound" => Ok(MovementKind::Outbound),
            "adjustment" => Ok(MovementKind::Adjustment),
            other => Err(UnsupportedMovementKind(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StockMovement {
    pub id: i32,
    pub product_id: i32,
    pub kind: MovementKind,
    pub quantity: i32,
    pub note: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewStockMovement {
    pub product_id: i32,
    pub kind: MovementKind,
    pub quantity: i32,
    pub note: Option<String>,
}

impl NewStockMovement {
    #[must_use]
    pub fn new(product_id: i32, kind: MovementKind, quantity: i32, note: Option<String>) -> Self {
        Self {
            product_id,
            kind,
            quantity,
            note: note.and_then(sanitize_note),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_kind_parsing() {
        assert_eq!("inbound".parse::<MovementKind>(), Ok(MovementKind::Inbound));
        assert_eq!(
            " Adjustment ".parse::<MovementKind>(),
            Ok(MovementKind::Adjustment)
        );
        assert_eq!(
            "sideways".parse::<MovementKind>(),
            Err(UnsupportedMovementKind("sideways".to_string()))
        );
    }

    #[test]
    fn movement_kind_applies_delta() {
        assert_eq!(MovementKind::Inbound.apply(10, 5), 15);
        assert_eq!(MovementKind::Outbound.apply(10, 5), 5);
        assert_eq!(MovementKind::Adjustment.apply(10, 42), 42);
    }

    #[test]
    fn movement_kind_saturates_at_counter_bounds() {
        assert_eq!(MovementKind::Inbound.apply(i32::MAX, 1), i32::MAX);
        assert_eq!(MovementKind::Outbound.apply(i32::MIN, 1), i32::MIN);
    }

    #[test]
    fn new_movement_sanitizes_note() {
        let movement = NewStockMovement::new(
            1,
            MovementKind::Inbound,
            3,
            Some("<script>alert(1)</script>recount".to_string()),
        );
        assert_eq!(movement.note.as_deref(), Some("recount"));
    }
}
