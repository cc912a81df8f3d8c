//! UI rendering module for the storefront TUI
//!
//! This module contains all the rendering logic for the terminal user
//! interface, using the ratatui library. Each screen consumes the typed
//! view models from `crate::view` and replaces the full contents of its
//! region every frame.

pub mod cart_view;
pub mod detail;
pub mod help_overlay;
pub mod listing;

pub use cart_view::render as render_cart_view;
pub use detail::render as render_detail;
pub use help_overlay::render as render_help_overlay;
pub use listing::render as render_listing;
