//! Product detail modal rendering
//!
//! Renders a centered overlay with the full product record: title,
//! category badge, star rating, review count, description, price, and
//! the buy action hint.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::view;

/// Renders the detail overlay on top of the listing
pub fn render(frame: &mut Frame, app: &App) {
    let Some(product) = &app.detail else {
        return;
    };
    let detail = view::detail_for(product);

    let area = frame.area();
    let overlay = centered_rect(area.width.saturating_sub(10).min(80), 20, area);

    frame.render_widget(Clear, overlay);

    let lines = vec![
        Line::from(Span::styled(
            detail.card.title.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("[{}]", detail.card.category),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                detail.card.stars.symbols(),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(
                format!(" ({} reviews)", detail.card.review_count),
                Style::default().fg(Color::Gray),
            ),
        ]),
        Line::from(""),
        Line::from(Span::raw(detail.description.clone())),
        Line::from(""),
        Line::from(Span::styled(
            format!("Image: {}", detail.image),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("${}", detail.card.price_display),
                Style::default()
                    .fg(Color::LightMagenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "   b: Buy Now   a: Add to cart   Esc: Close",
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ];

    let block = Block::default()
        .title(" Product Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::LightMagenta));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, overlay);
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
