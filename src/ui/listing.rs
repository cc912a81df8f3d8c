//! Listing screen rendering
//!
//! Renders the main storefront view: a trending strip, the category
//! filter bar, the product card list, and a status line carrying the
//! cart badge, notices, and fetch errors.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::App;
use crate::view::{self, ProductCard, EMPTY_LISTING_MESSAGE};

/// Renders the listing screen
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // trending strip
            Constraint::Length(1), // category bar
            Constraint::Min(5),    // product list
            Constraint::Length(1), // status line
        ])
        .split(area);

    let listing = view::listing_view(&app.catalog.products, &app.listed);

    render_trending(frame, chunks[0], &listing.trending);
    render_category_bar(frame, chunks[1], app);
    render_cards(frame, chunks[2], app, &listing.cards, listing.is_empty);
    render_status_line(frame, chunks[3], app);
}

/// Renders the trending strip: a fixed prefix of the full catalog
fn render_trending(frame: &mut Frame, area: Rect, trending: &[ProductCard]) {
    let mut lines = Vec::with_capacity(trending.len());
    for card in trending {
        lines.push(Line::from(vec![
            Span::styled(card.stars.symbols(), Style::default().fg(Color::Yellow)),
            Span::raw(" "),
            Span::styled(card.title.clone(), Style::default().fg(Color::White)),
            Span::styled(
                format!("  ${}", card.price_display),
                Style::default()
                    .fg(Color::LightMagenta)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let block = Block::default().title(" Trending ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Renders the category filter bar with the active filter highlighted
fn render_category_bar(frame: &mut Frame, area: Rect, app: &App) {
    let active_style = Style::default()
        .fg(Color::Black)
        .bg(Color::LightMagenta)
        .add_modifier(Modifier::BOLD);
    let inactive_style = Style::default().fg(Color::Gray);

    let mut spans = vec![Span::styled(
        " All ",
        if app.active_category.is_none() {
            active_style
        } else {
            inactive_style
        },
    )];
    for category in &app.catalog.categories {
        spans.push(Span::raw(" "));
        let style = if app.active_category.as_deref() == Some(category.as_str()) {
            active_style
        } else {
            inactive_style
        };
        spans.push(Span::styled(format!(" {} ", category), style));
    }
    spans.push(Span::styled(
        "  (Tab to switch)",
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Renders the product card list, or the empty-state message
fn render_cards(frame: &mut Frame, area: Rect, app: &App, cards: &[ProductCard], is_empty: bool) {
    let title = match &app.active_category {
        Some(category) => format!(" Products - {} ", category),
        None => " Products ".to_string(),
    };
    let block = Block::default().title(title).borders(Borders::ALL);

    if is_empty {
        let message = Paragraph::new(EMPTY_LISTING_MESSAGE)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(message, area);
        return;
    }

    let items: Vec<ListItem> = cards.iter().map(|card| ListItem::new(card_line(card))).collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.selected_index.min(cards.len().saturating_sub(1))));
    frame.render_stateful_widget(list, area, &mut state);
}

/// Builds the single display line for a product card
fn card_line(card: &ProductCard) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:<40}", truncate(&card.title, 40)),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!(" {:<16}", truncate(&card.category, 16)),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(card.stars.symbols(), Style::default().fg(Color::Yellow)),
        Span::styled(
            format!(" ({})", card.review_count),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            format!("  ${}", card.price_display),
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

/// Renders the status line: cart badge, latest notice, and errors
fn render_status_line(frame: &mut Frame, area: Rect, app: &App) {
    let summary = view::cart_summary(&app.cart);

    let mut spans = vec![Span::styled(
        format!(
            " Cart: {} items | Subtotal ${} ",
            summary.item_count, summary.subtotal_display
        ),
        Style::default().fg(Color::Green),
    )];

    if let Some(notice) = &app.notice {
        spans.push(Span::styled(
            format!(" {} ", notice),
            Style::default().fg(Color::Cyan),
        ));
    }

    if let Some(error) = &app.last_error {
        spans.push(Span::styled(
            format!(" {} (press r to retry) ", error),
            Style::default().fg(Color::Red),
        ));
    } else {
        spans.push(Span::styled(
            " a:add  Enter:details  c:cart  ?:help",
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Truncates a string for column display, appending an ellipsis
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
        out.push('\u{2026}');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppState;
    use crate::data::{Catalog, Product, Rating};
    use crate::data::CatalogClient;
    use ratatui::{backend::TestBackend, Terminal};

    fn product(id: u64, title: &str, price: f64) -> Product {
        Product {
            id,
            title: title.to_string(),
            price,
            category: "electronics".to_string(),
            image: "https://example.com/img.jpg".to_string(),
            description: "desc".to_string(),
            rating: Rating {
                rate: 4.7,
                count: 2,
            },
        }
    }

    fn app_with_products(products: Vec<Product>) -> App {
        let mut app = App::with_parts(CatalogClient::with_base_url("http://127.0.0.1:1"), None);
        app.catalog = Catalog::new(products, vec!["electronics".to_string()]);
        app.listed = app.catalog.products.clone();
        app.state = AppState::Listing;
        app
    }

    fn rendered_content(app: &App) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_listing_shows_product_titles_and_prices() {
        let app = app_with_products(vec![
            product(1, "Backpack", 109.95),
            product(2, "T-Shirt", 22.3),
        ]);

        let content = rendered_content(&app);

        assert!(content.contains("Backpack"));
        assert!(content.contains("109.95"));
        assert!(content.contains("22.30"));
    }

    #[test]
    fn test_empty_listing_shows_placeholder() {
        let mut app = app_with_products(vec![product(1, "Backpack", 109.95)]);
        app.listed.clear();

        let content = rendered_content(&app);

        assert!(content.contains("No products found."));
    }

    #[test]
    fn test_status_line_shows_cart_badge() {
        let app = app_with_products(vec![product(1, "Backpack", 109.95)]);
        let content = rendered_content(&app);

        assert!(content.contains("Cart: 0 items"));
        assert!(content.contains("Subtotal $0.00"));
    }

    #[test]
    fn test_error_shows_retry_hint() {
        let mut app = app_with_products(vec![product(1, "Backpack", 109.95)]);
        app.last_error = Some("Error fetching products: boom".to_string());

        let content = rendered_content(&app);

        assert!(content.contains("press r to retry"));
    }

    #[test]
    fn test_trending_section_is_rendered() {
        let app = app_with_products(vec![
            product(1, "First", 1.0),
            product(2, "Second", 2.0),
            product(3, "Third", 3.0),
            product(4, "Fourth", 4.0),
        ]);

        let content = rendered_content(&app);
        assert!(content.contains("Trending"));
    }

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate("abc", 10), "abc");
    }

    #[test]
    fn test_truncate_long_string_gets_ellipsis() {
        let out = truncate("abcdefghij", 5);
        assert_eq!(out.chars().count(), 5);
        assert!(out.ends_with('\u{2026}'));
    }
}
