//! Persistence module for the cart slot
//!
//! The cart is mirrored to a single JSON file after every mutation and
//! read back once at startup. A missing or unparsable file is treated as
//! an empty cart.

mod cart_file;

pub use cart_file::{CartStore, StoreError};
