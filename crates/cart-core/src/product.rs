//! # Product Types
//!
//! The line-item type stored in the cart, plus candidate validation.
//! Candidates arrive as untyped JSON (an HTTP body or any
//! caller-assembled value) and are checked field by field before they
//! are allowed into the cart.

use crate::error::{FieldViolation, ValidationError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One product entry in the cart.
///
/// `price` and `quantity` are plain numbers with no range or
/// integrality constraints, and `id` is not required to be unique
/// across the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Opaque product identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Unit price
    pub price: f64,

    /// Count of units
    pub quantity: f64,
}

impl Product {
    /// Create a product from its four fields
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        quantity: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            quantity,
        }
    }

    /// Validate an untyped candidate into a `Product`.
    ///
    /// Requires a JSON object with a string `id`, string `name`,
    /// number `price`, and number `quantity`. Every violated field is
    /// collected, so the returned error lists all problems at once.
    pub fn validate(candidate: &Value) -> Result<Product, ValidationError> {
        let Some(object) = candidate.as_object() else {
            return Err(ValidationError::new(vec![
                FieldViolation::wrong_type("id"),
                FieldViolation::wrong_type("name"),
                FieldViolation::wrong_type("price"),
                FieldViolation::wrong_type("quantity"),
            ]));
        };

        let mut violations = Vec::new();

        let id = check_string(object.get("id"), "id", &mut violations);
        let name = check_string(object.get("name"), "name", &mut violations);
        let price = check_number(object.get("price"), "price", &mut violations);
        let quantity = check_number(object.get("quantity"), "quantity", &mut violations);

        if !violations.is_empty() {
            return Err(ValidationError::new(violations));
        }

        // All four checks passed, so the options are present.
        Ok(Product {
            id: id.unwrap_or_default(),
            name: name.unwrap_or_default(),
            price: price.unwrap_or_default(),
            quantity: quantity.unwrap_or_default(),
        })
    }

    /// Line subtotal (price times quantity)
    pub fn subtotal(&self) -> f64 {
        self.price * self.quantity
    }
}

fn check_string(
    value: Option<&Value>,
    field: &'static str,
    violations: &mut Vec<FieldViolation>,
) -> Option<String> {
    match value {
        None | Some(Value::Null) => {
            violations.push(FieldViolation::missing(field));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            violations.push(FieldViolation::wrong_type(field));
            None
        }
    }
}

fn check_number(
    value: Option<&Value>,
    field: &'static str,
    violations: &mut Vec<FieldViolation>,
) -> Option<f64> {
    match value {
        None | Some(Value::Null) => {
            violations.push(FieldViolation::missing(field));
            None
        }
        Some(Value::Number(n)) => match n.as_f64() {
            Some(f) => Some(f),
            None => {
                violations.push(FieldViolation::wrong_type(field));
                None
            }
        },
        Some(_) => {
            violations.push(FieldViolation::wrong_type(field));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ViolationKind;
    use serde_json::json;

    #[test]
    fn test_validate_accepts_well_formed_candidate() {
        let candidate = json!({
            "id": "1",
            "name": "Air Force",
            "price": 100,
            "quantity": 1
        });

        let product = Product::validate(&candidate).unwrap();
        assert_eq!(product, Product::new("1", "Air Force", 100.0, 1.0));
    }

    #[test]
    fn test_validate_allows_fractional_and_negative_numbers() {
        // No range constraints: negative price and fractional quantity pass.
        let candidate = json!({
            "id": "oddball",
            "name": "Oddball",
            "price": -5.5,
            "quantity": 0.25
        });

        let product = Product::validate(&candidate).unwrap();
        assert_eq!(product.price, -5.5);
        assert_eq!(product.quantity, 0.25);
    }

    #[test]
    fn test_validate_reports_missing_fields() {
        let candidate = json!({ "id": "1", "price": 10 });

        let err = Product::validate(&candidate).unwrap_err();
        let fields: Vec<_> = err.violations.iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["name", "quantity"]);
        assert!(err
            .violations
            .iter()
            .all(|v| v.kind == ViolationKind::Missing));
    }

    #[test]
    fn test_validate_reports_wrong_types() {
        let candidate = json!({
            "id": 7,
            "name": "Widget",
            "price": "free",
            "quantity": 2
        });

        let err = Product::validate(&candidate).unwrap_err();
        assert_eq!(
            err.violations,
            vec![
                FieldViolation::wrong_type("id"),
                FieldViolation::wrong_type("price"),
            ]
        );
    }

    #[test]
    fn test_validate_rejects_non_object() {
        let err = Product::validate(&json!("not an object")).unwrap_err();
        assert_eq!(err.violations.len(), 4);
    }

    #[test]
    fn test_subtotal() {
        let product = Product::new("2", "NB 530", 100.0, 2.0);
        assert_eq!(product.subtotal(), 200.0);
    }
}
