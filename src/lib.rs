//! shoptui library
//!
//! Exposes the application modules for use in integration tests.

pub mod app;
pub mod cart;
pub mod cli;
pub mod data;
pub mod store;
pub mod ui;
pub mod view;
