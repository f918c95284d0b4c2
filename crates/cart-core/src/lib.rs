//! # cart-core
//!
//! Core types and operations for the cart service.
//!
//! This crate provides:
//! - `Product` for cart line items, with field-level candidate validation
//! - `Cart` for the ordered in-memory store and its operations
//! - `CartError` / `ValidationError` for typed error handling
//!
//! The crate is framework-free and fully synchronous; the HTTP layer
//! lives in `cart-api`.
//!
//! ## Example
//!
//! ```rust,ignore
//! use cart_core::Cart;
//! use serde_json::json;
//!
//! let mut cart = Cart::new();
//!
//! // Add a validated candidate
//! cart.add(&json!({ "id": "1", "name": "Air Force", "price": 100, "quantity": 1 }))?;
//!
//! // Query totals
//! assert_eq!(cart.count(), 1.0);
//! assert_eq!(cart.total(), 100.0);
//!
//! // Remove by id (first match only)
//! cart.remove_by_id("1");
//! ```

pub mod cart;
pub mod error;
pub mod product;

// Re-exports for convenience
pub use cart::Cart;
pub use error::{CartError, CartResult, FieldViolation, ValidationError, ViolationKind};
pub use product::Product;
