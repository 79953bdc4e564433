//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders},
    Frame,
};

use crate::model::{App, Page};

use super::components;
use super::pages;
use super::theme::{colors, ThemeColors};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let c = colors(app.theme);
    let size = frame.area();

    // 整个屏幕先铺上主题底色
    frame.render_widget(
        Block::default().style(Style::default().bg(c.bg).fg(c.fg)),
        size,
    );

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    let title_area = main_layout[0];
    let content_area = main_layout[1];
    let status_area = main_layout[2];

    components::header::render(app, frame, title_area, &c);

    // 左右分栏：侧边栏宽度随折叠状态变化
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(components::sidebar::width(app)),
            Constraint::Min(1),
        ])
        .split(content_area);

    components::sidebar::render(app, frame, columns[0], &c);
    render_page_content(app, frame, columns[1], &c);
    components::statusbar::render(app, frame, status_area, &c);
}

/// 根据当前页面渲染内容
fn render_page_content(app: &App, frame: &mut Frame, area: Rect, c: &ThemeColors) {
    let block = Block::default()
        .title(format!(" {} ", app.current_page.title()))
        .title_style(c.title())
        .borders(Borders::ALL)
        .border_style(c.border_style(app.focus.is_content()));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    match &app.current_page {
        Page::Dashboard => pages::dashboard::render(app, frame, inner_area, c),
        Page::Invoices => pages::invoices::render_list(app, frame, inner_area, c),
        Page::InvoiceDetail { id } => pages::invoices::render_detail(app, id, frame, inner_area, c),
        Page::Products => pages::catalog::render_products(app, frame, inner_area, c),
        Page::Categories => pages::catalog::render_categories(app, frame, inner_area, c),
        Page::Inventory => pages::catalog::render_inventory(app, frame, inner_area, c),
        Page::Customers => pages::customers::render(app, frame, inner_area, c),
        Page::Services | Page::ServicePlans => pages::services::render_plans(app, frame, inner_area, c),
        Page::Subscriptions => pages::services::render_subscriptions(app, frame, inner_area, c),
        Page::Reports => pages::reports::render(app, frame, inner_area, c),
        Page::Settings => pages::settings::render(app, frame, inner_area, c),
        Page::NotFound { path } => pages::not_found::render(path, frame, inner_area, c),
    }
}
