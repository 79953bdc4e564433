//! 服务套餐与订阅页面视图

use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    widgets::{Cell, Row},
    Frame,
};

use crate::model::App;
use crate::util::format_cents;
use crate::view::theme::ThemeColors;

/// 渲染服务套餐（服务概览也使用此视图）
pub fn render_plans(app: &App, frame: &mut Frame, area: Rect, c: &ThemeColors) {
    let rows = app
        .data
        .plans
        .iter()
        .map(|plan| {
            let subscribers = app
                .data
                .subscriptions
                .iter()
                .filter(|s| s.active && s.plan == plan.name)
                .count();
            Row::new(vec![
                plan.name.clone(),
                format!("{}/mo", format_cents(plan.monthly_cents)),
                subscribers.to_string(),
            ])
        })
        .collect();

    super::render_table(
        app,
        frame,
        area,
        c,
        &["Plan", "Price", "Active"],
        rows,
        &[Constraint::Min(18), Constraint::Length(12), Constraint::Length(6)],
    );
}

/// 渲染客户订阅
pub fn render_subscriptions(app: &App, frame: &mut Frame, area: Rect, c: &ThemeColors) {
    let rows = app
        .data
        .subscriptions
        .iter()
        .map(|s| {
            let (label, color) = if s.active {
                ("Active", c.success)
            } else {
                ("Cancelled", c.muted)
            };
            Row::new(vec![
                Cell::from(s.customer.clone()),
                Cell::from(s.plan.clone()),
                Cell::from(label).style(Style::default().fg(color)),
            ])
        })
        .collect();

    super::render_table(
        app,
        frame,
        area,
        c,
        &["Customer", "Plan", "State"],
        rows,
        &[Constraint::Min(18), Constraint::Min(18), Constraint::Length(10)],
    );
}
