//! Cart screen rendering
//!
//! Renders the line-item table with a cursor for removal, plus a footer
//! carrying the item count and subtotal.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::app::App;
use crate::view;

/// Renders the cart view
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // line items
            Constraint::Length(1), // summary footer
        ])
        .split(area);

    render_lines(frame, chunks[0], app);
    render_footer(frame, chunks[1], app);
}

/// Renders the line-item table, or an empty-cart message
fn render_lines(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().title(" Cart ").borders(Borders::ALL);

    let lines = view::cart_lines(&app.cart);
    if lines.is_empty() {
        let message = Paragraph::new("Your cart is empty. Press Esc to keep browsing.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(message, area);
        return;
    }

    let rows: Vec<Row> = lines
        .iter()
        .map(|line| {
            Row::new(vec![
                line.title.clone(),
                format!("${}", line.price_display),
            ])
        })
        .collect();

    let table = Table::new(rows, [Constraint::Min(30), Constraint::Length(12)])
        .header(
            Row::new(vec!["Item", "Price"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = TableState::default();
    state.select(Some(app.cart_cursor.min(lines.len().saturating_sub(1))));
    frame.render_stateful_widget(table, area, &mut state);
}

/// Renders the summary footer with count, subtotal, and key hints
fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let summary = view::cart_summary(&app.cart);

    let line = Line::from(vec![
        Span::styled(
            format!(
                " {} items | Subtotal ${} ",
                summary.item_count, summary.subtotal_display
            ),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " d:remove  j/k:move  Esc:back",
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
