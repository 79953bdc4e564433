//! 仪表盘页面视图

use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::App;
use crate::util::format_cents;
use crate::view::theme::ThemeColors;

/// 低库存阈值
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// 渲染仪表盘
pub fn render(app: &App, frame: &mut Frame, area: Rect, c: &ThemeColors) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(1)])
        .split(area);

    let data = &app.data;
    let today = Local::now().date_naive();
    let overdue = data.overdue_count(today);
    let low_stock = data.low_stock(LOW_STOCK_THRESHOLD).count();
    let active_subscriptions = data.subscriptions.iter().filter(|s| s.active).count();

    let cards = [
        ("Outstanding", format_cents(data.outstanding_cents()), c.highlight),
        (
            "Overdue",
            overdue.to_string(),
            if overdue > 0 { c.error } else { c.success },
        ),
        (
            "Low stock",
            low_stock.to_string(),
            if low_stock > 0 { c.warning } else { c.success },
        ),
        ("Subscriptions", active_subscriptions.to_string(), c.fg),
    ];

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(rows[0]);

    for ((label, value, color), column) in cards.into_iter().zip(columns.iter()) {
        let card = Paragraph::new(vec![
            Line::styled(format!(" {label}"), Style::default().fg(c.muted)),
            Line::styled(
                format!(" {value}"),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(c.border_style(false)),
        );
        frame.render_widget(card, *column);
    }

    let mut lines = vec![
        Line::from(""),
        Line::styled(" Recent invoices", c.title()),
    ];
    for invoice in data.invoices.iter().rev().take(3) {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(invoice.id.clone(), Style::default().fg(c.active)),
            Span::raw("  "),
            Span::raw(invoice.customer.clone()),
            Span::styled(
                format!("  {}", format_cents(invoice.amount_cents)),
                Style::default().fg(c.muted),
            ),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::styled(
        format!(
            " {} customers · {} products · {} invoices",
            data.customers.len(),
            data.products.len(),
            data.invoices.len()
        ),
        Style::default().fg(c.muted),
    ));

    frame.render_widget(Paragraph::new(lines), rows[1]);
}
