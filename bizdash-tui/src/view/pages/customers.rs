//! 客户页面视图

use ratatui::{
    layout::{Constraint, Rect},
    widgets::Row,
    Frame,
};

use crate::model::domain::InvoiceStatus;
use crate::model::App;
use crate::util::format_cents;
use crate::view::theme::ThemeColors;

/// 渲染客户列表，附带未结清金额
pub fn render(app: &App, frame: &mut Frame, area: Rect, c: &ThemeColors) {
    let rows = app
        .data
        .customers
        .iter()
        .map(|customer| {
            let open: i64 = app
                .data
                .invoices
                .iter()
                .filter(|i| i.customer == customer.name && i.status != InvoiceStatus::Paid)
                .map(|i| i.amount_cents)
                .sum();
            Row::new(vec![
                customer.name.clone(),
                customer.email.clone(),
                customer.city.clone(),
                format_cents(open),
            ])
        })
        .collect();

    super::render_table(
        app,
        frame,
        area,
        c,
        &["Name", "Email", "City", "Open"],
        rows,
        &[
            Constraint::Min(18),
            Constraint::Min(24),
            Constraint::Length(10),
            Constraint::Length(12),
        ],
    );
}
