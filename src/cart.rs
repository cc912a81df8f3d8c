//! Shopping cart state
//!
//! The cart is an ordered sequence of product copies. Adding the same
//! product twice yields two entries; there is no quantity field. Every
//! mutation reports an explicit outcome so callers can observe whether
//! anything actually changed.

use crate::data::{Catalog, Product};

/// Result of an add-to-cart attempt
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    /// The product was found in the catalog and appended
    Added,
    /// No product with that id exists in the current catalog snapshot
    UnknownProduct(u64),
}

/// Result of a remove-from-cart attempt
#[derive(Debug, Clone, PartialEq)]
pub enum RemoveOutcome {
    /// The entry at the given index was removed
    Removed(Product),
    /// The index was outside `[0, len)`; the cart is unchanged
    OutOfRange(usize),
}

/// Ordered sequence of product copies selected by the user
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<Product>,
}

impl Cart {
    /// Creates an empty cart
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates a cart from previously persisted items
    pub fn from_items(items: Vec<Product>) -> Self {
        Self { items }
    }

    /// Returns the cart entries in insertion order
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Returns the number of entries in the cart
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the cart has no entries
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up a product by id in the catalog snapshot and appends a copy.
    ///
    /// An id not present in the snapshot leaves the cart untouched and
    /// reports `UnknownProduct` instead of silently doing nothing.
    pub fn add(&mut self, product_id: u64, catalog: &Catalog) -> AddOutcome {
        match catalog.product_by_id(product_id) {
            Some(product) => {
                self.items.push(product.clone());
                AddOutcome::Added
            }
            None => AddOutcome::UnknownProduct(product_id),
        }
    }

    /// Appends a copy of a product that the caller already holds.
    ///
    /// Used by the detail view, where the product came from a
    /// by-id fetch rather than the catalog snapshot.
    pub fn add_product(&mut self, product: Product) {
        self.items.push(product);
    }

    /// Removes the entry at `index`, shifting later entries down.
    ///
    /// Out-of-range indexes are a defined no-op reported as `OutOfRange`.
    pub fn remove(&mut self, index: usize) -> RemoveOutcome {
        if index < self.items.len() {
            RemoveOutcome::Removed(self.items.remove(index))
        } else {
            RemoveOutcome::OutOfRange(index)
        }
    }

    /// Sum of the prices of all entries, unrounded
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(|p| p.price).sum()
    }

    /// Subtotal formatted for display with exactly two decimal places.
    ///
    /// Uses standard half-up rounding; the stored prices stay unrounded.
    pub fn subtotal_display(&self) -> String {
        format_price(self.subtotal())
    }
}

/// Formats a dollar amount to two decimal places with half-up rounding
pub fn format_price(amount: f64) -> String {
    // `+ 0.0` normalizes the -0.0 that summing an empty iterator produces,
    // so an empty subtotal prints "0.00" rather than "-0.00".
    format!("{:.2}", ((amount * 100.0).round() + 0.0) / 100.0)
}
