//! # Cart Store
//!
//! The ordered in-memory cart: a sequence of products mutated in
//! place by every operation. Insertion order is the display order.
//! Lookups by id are linear scans that touch only the first match,
//! and duplicate ids are allowed in.

use crate::error::ValidationError;
use crate::product::Product;
use serde_json::Value;

/// An ordered in-memory cart of products.
///
/// One instance is constructed at startup and shared (behind whatever
/// synchronization the host needs) for the lifetime of the process.
/// The store itself is synchronous and single-threaded.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<Product>,
}

impl Cart {
    /// Create an empty cart
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Validate a candidate and append it to the cart.
    ///
    /// Returns the stored product on success. There is no
    /// duplicate-id check: adding an item whose id already exists
    /// leaves two entries with that id.
    pub fn add(&mut self, candidate: &Value) -> Result<Product, ValidationError> {
        let product = Product::validate(candidate)?;
        self.items.push(product.clone());
        Ok(product)
    }

    /// The cart contents, in insertion order
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Remove the first product whose id matches.
    ///
    /// Later entries with the same id are untouched. Returns whether
    /// anything was removed; a miss is a no-op, not an error.
    pub fn remove_by_id(&mut self, id: &str) -> bool {
        match self.items.iter().position(|p| p.id == id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Validate a candidate and replace the first product whose id
    /// matches.
    ///
    /// Validation happens before the lookup, so an invalid candidate
    /// fails even when `id` matches nothing. The match is replaced
    /// wholesale, not merged: every field is overwritten, including
    /// the id, which may therefore end up different from the lookup
    /// key. Returns whether a match was replaced; a miss is a no-op.
    pub fn update_by_id(&mut self, id: &str, candidate: &Value) -> Result<bool, ValidationError> {
        let product = Product::validate(candidate)?;
        match self.items.iter().position(|p| p.id == id) {
            Some(index) => {
                self.items[index] = product;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Empty the cart unconditionally
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total quantity across all products (0 for an empty cart)
    pub fn count(&self) -> f64 {
        self.items.iter().map(|p| p.quantity).sum()
    }

    /// Total price across all products, quantity-weighted
    /// (0 for an empty cart)
    pub fn total(&self) -> f64 {
        self.items.iter().map(|p| p.subtotal()).sum()
    }

    /// Number of line entries (not quantity-weighted)
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart holds no entries
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
