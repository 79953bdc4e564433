//! 报表页面视图：按状态与客户汇总发票金额

use std::collections::BTreeMap;

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::domain::{Invoice, InvoiceStatus};
use crate::model::App;
use crate::util::format_cents;
use crate::view::theme::ThemeColors;

/// 条形图的最大宽度
const BAR_WIDTH: i64 = 24;

/// 渲染报表
pub fn render(app: &App, frame: &mut Frame, area: Rect, c: &ThemeColors) {
    let invoices = &app.data.invoices;
    let mut lines = vec![Line::from(""), Line::styled(" Revenue by status", c.title())];

    let by_status: Vec<(&str, i64)> = [InvoiceStatus::Paid, InvoiceStatus::Sent, InvoiceStatus::Draft]
        .into_iter()
        .map(|status| (status.display_name(), total(invoices.iter().filter(|i| i.status == status))))
        .collect();
    lines.extend(bar_lines(&by_status, c));

    lines.push(Line::from(""));
    lines.push(Line::styled(" Revenue by customer", c.title()));

    let mut by_customer: BTreeMap<&str, i64> = BTreeMap::new();
    for invoice in invoices {
        *by_customer.entry(invoice.customer.as_str()).or_default() += invoice.amount_cents;
    }
    let by_customer: Vec<(&str, i64)> = by_customer.into_iter().collect();
    lines.extend(bar_lines(&by_customer, c));

    frame.render_widget(Paragraph::new(lines), area);
}

fn total<'a>(invoices: impl Iterator<Item = &'a Invoice>) -> i64 {
    invoices.map(|i| i.amount_cents).sum()
}

fn bar_lines(entries: &[(&str, i64)], c: &ThemeColors) -> Vec<Line<'static>> {
    let max = entries.iter().map(|(_, v)| *v).max().unwrap_or(0);
    entries
        .iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::raw(format!("  {label:<20}")),
                Span::styled(bar(*value, max), Style::default().fg(c.highlight)),
                Span::styled(format!(" {}", format_cents(*value)), Style::default().fg(c.muted)),
            ])
        })
        .collect()
}

/// 按比例生成条形，非零值至少占一格
fn bar(value: i64, max: i64) -> String {
    if value <= 0 || max <= 0 {
        return String::new();
    }
    let cells = (value.saturating_mul(BAR_WIDTH) / max).clamp(1, BAR_WIDTH);
    "█".repeat(usize::try_from(cells).unwrap_or(0))
}
