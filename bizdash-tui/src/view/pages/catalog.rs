//! 商品、分类与库存页面视图

use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    widgets::{Cell, Row},
    Frame,
};

use super::dashboard::LOW_STOCK_THRESHOLD;
use crate::model::App;
use crate::util::format_cents;
use crate::view::theme::ThemeColors;

/// 渲染商品列表
pub fn render_products(app: &App, frame: &mut Frame, area: Rect, c: &ThemeColors) {
    let rows = app
        .data
        .products
        .iter()
        .map(|p| {
            Row::new(vec![
                p.sku.clone(),
                p.name.clone(),
                p.category.clone(),
                format_cents(p.price_cents),
            ])
        })
        .collect();

    super::render_table(
        app,
        frame,
        area,
        c,
        &["SKU", "Name", "Category", "Price"],
        rows,
        &[
            Constraint::Length(8),
            Constraint::Min(18),
            Constraint::Length(10),
            Constraint::Length(10),
        ],
    );
}

/// 渲染分类列表（附带每个分类下的商品数）
pub fn render_categories(app: &App, frame: &mut Frame, area: Rect, c: &ThemeColors) {
    let rows = app
        .data
        .categories
        .iter()
        .map(|category| {
            let count = app
                .data
                .products
                .iter()
                .filter(|p| p.category == category.name)
                .count();
            Row::new(vec![
                category.name.clone(),
                count.to_string(),
                category.description.clone(),
            ])
        })
        .collect();

    super::render_table(
        app,
        frame,
        area,
        c,
        &["Category", "Products", "Description"],
        rows,
        &[Constraint::Length(12), Constraint::Length(8), Constraint::Min(20)],
    );
}

/// 渲染库存，低库存商品以警告色显示
pub fn render_inventory(app: &App, frame: &mut Frame, area: Rect, c: &ThemeColors) {
    let rows = app
        .data
        .products
        .iter()
        .map(|p| {
            let low = p.stock < LOW_STOCK_THRESHOLD;
            let stock_style = Style::default().fg(if low { c.warning } else { c.fg });
            Row::new(vec![
                Cell::from(p.sku.clone()),
                Cell::from(p.name.clone()),
                Cell::from(p.stock.to_string()).style(stock_style),
                Cell::from(if low { "Reorder" } else { "" }).style(stock_style),
            ])
        })
        .collect();

    super::render_table(
        app,
        frame,
        area,
        c,
        &["SKU", "Name", "Stock", ""],
        rows,
        &[
            Constraint::Length(8),
            Constraint::Min(18),
            Constraint::Length(6),
            Constraint::Length(8),
        ],
    );
}
