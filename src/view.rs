//! View models for the storefront screens
//!
//! Pure functions that shape product data into typed descriptors the UI
//! layer renders. Keeping this separate from the ratatui code lets the
//! display rules (star counts, price formatting, trending prefix, empty
//! state) be tested without a terminal.

use crate::cart::{format_price, Cart};
use crate::data::Product;

/// Number of products shown in the trending strip
pub const TRENDING_COUNT: usize = 3;

/// Star symbols used for ratings
const STAR_FILLED: char = '\u{2605}'; // ★
const STAR_EMPTY: char = '\u{2606}'; // ☆

/// A five-symbol star rating with no half-star state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
    /// Number of filled stars, 0 to 5
    pub filled: u8,
}

impl StarRating {
    /// Builds a rating from an average score: filled = floor(rate),
    /// clamped to the 0-5 range.
    pub fn from_rate(rate: f64) -> Self {
        let filled = rate.floor().clamp(0.0, 5.0) as u8;
        Self { filled }
    }

    /// Renders the five-symbol sequence, filled stars first
    pub fn symbols(&self) -> String {
        let filled = usize::from(self.filled.min(5));
        let mut out = String::with_capacity(5 * STAR_FILLED.len_utf8());
        for _ in 0..filled {
            out.push(STAR_FILLED);
        }
        for _ in filled..5 {
            out.push(STAR_EMPTY);
        }
        out
    }
}

/// Display descriptor for one product card in a listing
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    /// Product identifier, used for add-to-cart and detail actions
    pub id: u64,
    /// Product title
    pub title: String,
    /// Category name
    pub category: String,
    /// Price formatted to two decimals
    pub price_display: String,
    /// Star rating for the card
    pub stars: StarRating,
    /// Number of reviews behind the rating
    pub review_count: u64,
}

/// Builds the card descriptor for a product
pub fn card_for(product: &Product) -> ProductCard {
    ProductCard {
        id: product.id,
        title: product.title.clone(),
        category: product.category.clone(),
        price_display: format_price(product.price),
        stars: StarRating::from_rate(product.rating.rate),
        review_count: product.rating.count,
    }
}

/// Display descriptor for the product detail view
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetail {
    /// The card fields shared with listings
    pub card: ProductCard,
    /// Long-form description shown only in the detail view
    pub description: String,
    /// Image URL
    pub image: String,
}

/// Builds the detail descriptor for a product
pub fn detail_for(product: &Product) -> ProductDetail {
    ProductDetail {
        card: card_for(product),
        description: product.description.clone(),
        image: product.image.clone(),
    }
}

/// Descriptor for a full listing screen
#[derive(Debug, Clone, PartialEq)]
pub struct ListingView {
    /// Trending strip: a fixed-size prefix of the full catalog
    pub trending: Vec<ProductCard>,
    /// Cards for the (possibly filtered) listing
    pub cards: Vec<ProductCard>,
    /// True when the filtered listing has no products
    pub is_empty: bool,
}

/// Message shown when a listing has no products
pub const EMPTY_LISTING_MESSAGE: &str = "No products found.";

/// Builds the listing view from the full catalog and the filtered list.
///
/// The trending strip always comes from the full catalog, independent of
/// the active category filter.
pub fn listing_view(all_products: &[Product], filtered: &[Product]) -> ListingView {
    ListingView {
        trending: all_products
            .iter()
            .take(TRENDING_COUNT)
            .map(card_for)
            .collect(),
        cards: filtered.iter().map(card_for).collect(),
        is_empty: filtered.is_empty(),
    }
}

/// A single row in the cart line-item table
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    /// Product title
    pub title: String,
    /// Price formatted to two decimals
    pub price_display: String,
}

/// Summary of the cart shown in the badge and the cart footer
#[derive(Debug, Clone, PartialEq)]
pub struct CartSummary {
    /// Number of entries in the cart
    pub item_count: usize,
    /// Subtotal formatted to two decimals
    pub subtotal_display: String,
}

/// Builds the line-item rows for the cart view
pub fn cart_lines(cart: &Cart) -> Vec<CartLine> {
    cart.items()
        .iter()
        .map(|p| CartLine {
            title: p.title.clone(),
            price_display: format_price(p.price),
        })
        .collect()
}

/// Builds the cart summary
pub fn cart_summary(cart: &Cart) -> CartSummary {
    CartSummary {
        item_count: cart.len(),
        subtotal_display: cart.subtotal_display(),
    }
}
