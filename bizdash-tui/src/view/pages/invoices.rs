//! 发票列表与详情页面视图

use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row},
    Frame,
};

use crate::model::domain::{Invoice, InvoiceStatus};
use crate::model::App;
use crate::util::format_cents;
use crate::view::theme::ThemeColors;

/// 渲染发票列表
pub fn render_list(app: &App, frame: &mut Frame, area: Rect, c: &ThemeColors) {
    let today = Local::now().date_naive();
    let rows = app
        .data
        .invoices
        .iter()
        .map(|invoice| {
            Row::new(vec![
                Cell::from(invoice.id.clone()),
                Cell::from(invoice.customer.clone()),
                Cell::from(invoice.due.format("%Y-%m-%d").to_string()),
                Cell::from(status_label(invoice, today, c)),
                Cell::from(format_cents(invoice.amount_cents)),
            ])
        })
        .collect();

    super::render_table(
        app,
        frame,
        area,
        c,
        &["Number", "Customer", "Due", "Status", "Amount"],
        rows,
        &[
            Constraint::Length(9),
            Constraint::Min(18),
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Length(12),
        ],
    );
}

fn status_label(invoice: &Invoice, today: chrono::NaiveDate, c: &ThemeColors) -> Span<'static> {
    if invoice.is_overdue(today) {
        return Span::styled("Overdue", Style::default().fg(c.error));
    }
    let color = match invoice.status {
        InvoiceStatus::Draft => c.muted,
        InvoiceStatus::Sent => c.warning,
        InvoiceStatus::Paid => c.success,
    };
    Span::styled(invoice.status.display_name(), Style::default().fg(color))
}

/// 渲染发票详情
pub fn render_detail(app: &App, id: &str, frame: &mut Frame, area: Rect, c: &ThemeColors) {
    let Some(invoice) = app.data.invoice(id) else {
        let message = Paragraph::new(vec![
            Line::from(""),
            Line::styled(format!("  Invoice {id} does not exist."), Style::default().fg(c.error)),
            Line::styled("  Press Esc to return to the invoice list.", Style::default().fg(c.muted)),
        ]);
        frame.render_widget(message, area);
        return;
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(1)])
        .split(area);

    let today = Local::now().date_naive();
    let summary = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("  Customer  ", Style::default().fg(c.muted)),
            Span::raw(invoice.customer.clone()),
        ]),
        Line::from(vec![
            Span::styled("  Issued    ", Style::default().fg(c.muted)),
            Span::raw(invoice.issued.format("%Y-%m-%d").to_string()),
            Span::styled("   Due ", Style::default().fg(c.muted)),
            Span::raw(invoice.due.format("%Y-%m-%d").to_string()),
        ]),
        Line::from(vec![
            Span::styled("  Status    ", Style::default().fg(c.muted)),
            status_label(invoice, today, c),
        ]),
        Line::from(vec![
            Span::styled("  Total     ", Style::default().fg(c.muted)),
            Span::styled(format_cents(invoice.amount_cents), c.title()),
        ]),
    ]);
    frame.render_widget(summary, layout[0]);

    let rows = invoice
        .lines
        .iter()
        .map(|(description, quantity, unit_cents)| {
            Row::new(vec![
                description.clone(),
                quantity.to_string(),
                format_cents(*unit_cents),
                format_cents(i64::from(*quantity) * unit_cents),
            ])
        })
        .collect();

    super::render_table(
        app,
        frame,
        layout[1],
        c,
        &["Description", "Qty", "Unit", "Total"],
        rows,
        &[
            Constraint::Min(20),
            Constraint::Length(4),
            Constraint::Length(12),
            Constraint::Length(12),
        ],
    );
}
